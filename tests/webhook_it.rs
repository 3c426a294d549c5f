#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use web_helpers::{
	Error,
	error::{ConfigError, TransportError},
	webhook::{Payload, WebhookClient},
};

#[tokio::test]
async fn send_posts_form_encoded_payload() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/services/T0/B0/hook")
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("payload", "{\"text\":\"hello\"}");
			then.status(200).body("ok");
		})
		.await;
	let status = WebhookClient::default()
		.send_text(&server.url("/services/T0/B0/hook"), "hello")
		.await
		.expect("Webhook delivery should succeed.");

	assert_eq!(status, http::StatusCode::OK);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn full_payload_is_escaped_and_status_returned() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/hook").form_urlencoded_tuple(
				"payload",
				"{\"channel\":\"#ops\",\"username\":\"bot\",\"text\":\"d\\u00e9ploy\",\
				 \"icon_emoji\":\":ghost:\"}",
			);
			then.status(404).body("no_team");
		})
		.await;
	let payload =
		Payload::text("déploy").with_channel("#ops").with_username("bot").with_icon_emoji(":ghost:");
	let status = WebhookClient::default()
		.send(&server.url("/hook"), &payload)
		.await
		.expect("Non-success statuses are still delivered results.");

	assert_eq!(status, http::StatusCode::NOT_FOUND);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn empty_url_never_reaches_the_network() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST);
			then.status(200);
		})
		.await;
	let err = WebhookClient::default()
		.send_text("", "hello")
		.await
		.expect_err("Empty URL should be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::MissingWebhookUrl)));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn connection_failure_maps_to_transport_error() {
	let err = WebhookClient::default()
		.send_text("http://127.0.0.1:1/hook", "hello")
		.await
		.expect_err("Refused connection should fail.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}

#[cfg(feature = "blocking")]
#[test]
fn blocking_client_posts_payload() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(POST).path("/hook").form_urlencoded_tuple("payload", "{\"text\":\"sync\"}");
		then.status(200);
	});
	let status = web_helpers::webhook::BlockingWebhookClient::default()
		.send_text(&server.url("/hook"), "sync")
		.expect("Blocking delivery should succeed.");

	assert_eq!(status, http::StatusCode::OK);

	mock.assert_calls(1);
}
