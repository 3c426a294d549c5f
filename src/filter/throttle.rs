//! Throttling interceptor answering `429 Too Many Requests`.

// crates.io
use http::{
	HeaderValue, Request, Response,
	header::{CONTENT_TYPE, RETRY_AFTER, USER_AGENT},
};
// self
use crate::{
	_prelude::*,
	filter::{ClientAddr, SessionId},
	throttle::{ClientIdentity, ThrottleDecision, ThrottleGuard, ThrottleRejection},
};

/// Address recorded for requests whose [`ClientAddr`] extension is missing.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Runs `next` only when `guard` admits the requesting client.
///
/// Rejected requests are answered directly with the guard's message as a plain-text body,
/// status `429`, and a `Retry-After` header.
pub async fn throttle<B, R, E, F, Fut>(
	guard: &ThrottleGuard,
	request: Request<B>,
	next: F,
) -> Result<Response<R>, E>
where
	R: From<String>,
	F: FnOnce(Request<B>) -> Fut,
	Fut: Future<Output = Result<Response<R>, E>>,
{
	let client = client_identity(&request);

	match guard.check(&client).await {
		ThrottleDecision::Allow => next(request).await,
		ThrottleDecision::Deny(rejection) => Ok(rejection_response(&rejection)),
	}
}

/// Extracts the throttle identity from request extensions and headers.
pub fn client_identity<B>(request: &Request<B>) -> ClientIdentity {
	let extensions = request.extensions();
	let address = extensions
		.get::<ClientAddr>()
		.map(|addr| addr.0.clone())
		.unwrap_or_else(|| UNKNOWN_CLIENT.to_owned());

	ClientIdentity {
		address,
		user_agent: request
			.headers()
			.get(USER_AGENT)
			.and_then(|value| value.to_str().ok())
			.map(str::to_owned),
		session_id: extensions.get::<SessionId>().map(|session| session.0.clone()),
	}
}

/// Builds the `429` response for a rejected call.
pub fn rejection_response<R>(rejection: &ThrottleRejection) -> Response<R>
where
	R: From<String>,
{
	let mut response = Response::new(R::from(rejection.message.clone()));
	// Round up so clients never retry before the marker expires.
	let retry_secs = (rejection.retry_after + Duration::nanoseconds(999_999_999)).whole_seconds();

	*response.status_mut() = rejection.status;

	let headers = response.headers_mut();

	headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
	headers.insert(RETRY_AFTER, HeaderValue::from(retry_secs.max(0)));

	response
}

#[cfg(test)]
mod tests {
	// crates.io
	use http::StatusCode;
	// self
	use super::*;
	use crate::_preludet::{build_test_guard, test_request};

	#[test]
	fn identity_reads_extensions_and_headers() {
		let request = test_request("10.1.1.1", "agent/1.0", Some("abc"));
		let identity = client_identity(&request);

		assert_eq!(
			identity,
			ClientIdentity::new("10.1.1.1").with_user_agent("agent/1.0").with_session_id("abc")
		);
		assert_eq!(client_identity(&Request::new(())).address, UNKNOWN_CLIENT);
	}

	#[test]
	fn rejection_response_rounds_retry_after_up() {
		let rejection = ThrottleRejection {
			status: StatusCode::TOO_MANY_REQUESTS,
			message: "slow down".into(),
			retry_after: Duration::milliseconds(1_200),
		};
		let response: Response<String> = rejection_response(&rejection);

		assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
		assert_eq!(response.headers()[RETRY_AFTER], "2");
		assert_eq!(response.body(), "slow down");
	}

	#[tokio::test]
	async fn second_request_inside_window_gets_429() {
		let (guard, _) = build_test_guard("TestThrottle", 30);
		let handler = |_: Request<()>| async { Ok::<_, Error>(Response::new(String::from("done"))) };
		let first = throttle(&guard, test_request("10.0.0.9", "ua", None), handler)
			.await
			.expect("First call should reach the handler.");
		let second = throttle(&guard, test_request("10.0.0.9", "ua", None), handler)
			.await
			.expect("Rejection should be answered directly.");

		assert_eq!(first.body(), "done");
		assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
		assert_eq!(second.body(), "You may only perform this action every 30 seconds.");
		assert_eq!(second.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
	}
}
