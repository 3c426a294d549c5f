// std
use std::sync::Arc;
// crates.io
use http::{
	Request, Response, StatusCode,
	header::{CACHE_CONTROL, CONTENT_LANGUAGE, RETRY_AFTER, USER_AGENT},
};
use time::{Duration, OffsetDateTime};
// self
use web_helpers::{
	culture::{CultureSet, ResolvedCulture},
	filter::{self, ClientAddr, SessionId},
	throttle::{ClientIdentity, MemoryMarkerStore, ThrottleConfig, ThrottleGuard},
};

fn request(address: &str, session: Option<&str>) -> Request<()> {
	let mut request = Request::builder()
		.uri("/contact")
		.header(USER_AGENT, "integration/1.0")
		.body(())
		.expect("Integration request should build.");

	request.extensions_mut().insert(ClientAddr::new(address));

	if let Some(session) = session {
		request.extensions_mut().insert(SessionId::new(session));
	}

	request
}

async fn handler(request: Request<()>) -> web_helpers::Result<Response<String>> {
	let culture = request
		.extensions()
		.get::<ResolvedCulture>()
		.map(|culture| culture.as_str().to_owned())
		.unwrap_or_default();

	Ok(Response::new(culture))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_admit_exactly_one() {
	let guard = Arc::new(ThrottleGuard::new(
		ThrottleConfig::new("Contact", 60),
		Arc::new(MemoryMarkerStore::default()),
	));
	let tasks = (0..32)
		.map(|_| {
			let guard = guard.clone();

			tokio::spawn(async move {
				guard.check(&ClientIdentity::new("203.0.113.7")).await.is_allowed()
			})
		})
		.collect::<Vec<_>>();
	let mut admitted = 0;

	for task in tasks {
		if task.await.expect("Throttle task should not panic.") {
			admitted += 1;
		}
	}

	assert_eq!(admitted, 1);
}

#[tokio::test]
async fn session_partitioning_separates_clients_behind_one_address() {
	let guard = ThrottleGuard::new(
		ThrottleConfig::new("Contact", 60).with_session_id(true),
		Arc::new(MemoryMarkerStore::default()),
	);
	let first = filter::throttle(&guard, request("198.51.100.1", Some("s-1")), handler)
		.await
		.expect("First session should pass.");
	let second = filter::throttle(&guard, request("198.51.100.1", Some("s-2")), handler)
		.await
		.expect("Second session should pass.");
	let repeat = filter::throttle(&guard, request("198.51.100.1", Some("s-1")), handler)
		.await
		.expect("Repeated session should be answered by the filter.");

	assert_eq!(first.status(), StatusCode::OK);
	assert_eq!(second.status(), StatusCode::OK);
	assert_eq!(repeat.status(), StatusCode::TOO_MANY_REQUESTS);
	assert_eq!(repeat.headers()[RETRY_AFTER], "60");
}

#[tokio::test]
async fn expired_marker_is_replaced_without_sliding() {
	let guard = ThrottleGuard::new(
		ThrottleConfig::new("Search", 10),
		Arc::new(MemoryMarkerStore::default()),
	);
	let client = ClientIdentity::new("192.0.2.4").with_user_agent("ua");
	let start = OffsetDateTime::now_utc();

	assert!(guard.check_at(&client, start).await.is_allowed());
	assert!(!guard.check_at(&client, start + Duration::seconds(9)).await.is_allowed());
	assert!(guard.check_at(&client, start + Duration::seconds(10)).await.is_allowed());
	assert!(guard.reset(&client).await.expect("Throttle reset should succeed."));
	assert!(guard.check_at(&client, start + Duration::seconds(11)).await.is_allowed());
}

#[tokio::test]
async fn filters_compose_around_one_handler() {
	let cultures = CultureSet::new(["en-US", "fr-FR"]).expect("Cultures should be valid.");
	let guard = ThrottleGuard::new(
		ThrottleConfig::new("Page", 1),
		Arc::new(MemoryMarkerStore::default()),
	);
	let mut request = request("192.0.2.8", None);

	request
		.headers_mut()
		.insert(http::header::ACCEPT_LANGUAGE, http::HeaderValue::from_static("fr-BE"));

	let response = filter::no_cache(request, |request| {
		filter::throttle(&guard, request, |request| {
			filter::with_culture(&cultures, request, handler)
		})
	})
	.await
	.expect("Composed filters should succeed.");

	assert_eq!(response.body(), "fr-FR");
	assert_eq!(response.headers()[CONTENT_LANGUAGE], "fr-FR");
	assert_eq!(
		response.headers()[CACHE_CONTROL],
		"no-cache, no-store, must-revalidate, proxy-revalidate"
	);
}
