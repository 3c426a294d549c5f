//! Runs a handler behind the culture, throttle, and cache filters and prints what a client
//! would receive for two quick calls.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use http::{
	Request, Response,
	header::{ACCEPT_LANGUAGE, USER_AGENT},
};
// self
use web_helpers::{
	config::HelpersConfig,
	culture::ResolvedCulture,
	filter::{self, ClientAddr},
	throttle::MemoryMarkerStore,
};

const CONFIG: &str = r#"{
	"cultures": ["en-US", "fr-FR", "ar-SA"],
	"throttles": [{ "name": "Contact", "seconds": 5, "message": "Please wait {n} seconds." }]
}"#;

async fn contact(request: Request<()>) -> web_helpers::Result<Response<String>> {
	let culture = request
		.extensions()
		.get::<ResolvedCulture>()
		.map(|culture| culture.as_str().to_owned())
		.unwrap_or_default();

	Ok(Response::new(format!("Message received ({culture}).")))
}

fn client_request(language: &str) -> Result<Request<()>> {
	let mut request = Request::builder()
		.uri("/contact")
		.header(USER_AGENT, "demo-browser/1.0")
		.header(ACCEPT_LANGUAGE, language)
		.body(())?;

	request.extensions_mut().insert(ClientAddr::new("192.0.2.10"));

	Ok(request)
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = HelpersConfig::from_json_str(CONFIG)?;
	let guards = config.throttle_guards(Arc::new(MemoryMarkerStore::default()));
	let guard = guards.get("Contact").ok_or_else(|| color_eyre::eyre::eyre!("missing guard"))?;

	for language in ["fr-CA,fr;q=0.9", "de-DE"] {
		let response = filter::no_cache(client_request(language)?, |request| {
			filter::throttle(guard, request, |request| {
				filter::with_culture(&config.cultures, request, contact)
			})
		})
		.await?;

		println!("{} {}", response.status(), response.body());
	}

	Ok(())
}
