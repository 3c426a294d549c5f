//! Posts a deployment notice through the webhook client against a local mock endpoint.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use web_helpers::{config::WebhookConfig, webhook::WebhookClient};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let hook_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/services/T000/B000/demo");
			then.status(200).body("ok");
		})
		.await;
	let config = WebhookConfig {
		username: Some("deploy-bot".into()),
		icon_emoji: Some(":rocket:".into()),
		..WebhookConfig::new(server.url("/services/T000/B000/demo"))
	};

	config.validate()?;

	let client = WebhookClient::new()?;
	let payload = config.payload("Version 1.4.2 is live on production. ✅");
	let status = client.send(&config.url, &payload).await?;

	println!("Webhook answered with {status}.");

	hook_mock.assert_async().await;

	Ok(())
}
