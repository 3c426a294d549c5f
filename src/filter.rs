//! Request interceptors composed explicitly around a handler continuation.
//!
//! Every filter is an `async fn` taking the incoming [`http::Request`] and a `next`
//! continuation that runs the rest of the pipeline. Filters nest by calling one from inside
//! another's continuation:
//!
//! ```ignore
//! filter::no_cache(request, |request| async move {
//! 	filter::throttle(&guard, request, handler).await
//! })
//! .await
//! ```

pub mod ajax;
pub mod cache;
pub mod culture;
pub mod throttle;

pub use ajax::*;
pub use cache::*;
pub use culture::*;
pub use throttle::*;

// crates.io
use http::HeaderMap;

/// Header jQuery and most AJAX libraries attach to XHR requests.
pub const X_REQUESTED_WITH: &str = "x-requested-with";

/// Network address of the client, inserted into request extensions by the host server.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientAddr(pub String);
impl ClientAddr {
	/// Wraps a client address.
	pub fn new(address: impl Into<String>) -> Self {
		Self(address.into())
	}
}
impl From<std::net::IpAddr> for ClientAddr {
	fn from(value: std::net::IpAddr) -> Self {
		Self(value.to_string())
	}
}
impl From<std::net::SocketAddr> for ClientAddr {
	fn from(value: std::net::SocketAddr) -> Self {
		value.ip().into()
	}
}

/// Session id of the client, inserted into request extensions by the host's session layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);
impl SessionId {
	/// Wraps a session id.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}
}

/// Returns `true` when the request was issued through `XMLHttpRequest`.
pub fn is_ajax(headers: &HeaderMap) -> bool {
	headers
		.get(X_REQUESTED_WITH)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
}

#[cfg(test)]
mod tests {
	// crates.io
	use http::HeaderValue;
	// self
	use super::*;

	#[test]
	fn ajax_detection_is_case_insensitive() {
		let mut headers = HeaderMap::new();

		assert!(!is_ajax(&headers));

		headers.insert(X_REQUESTED_WITH, HeaderValue::from_static("xmlhttprequest"));

		assert!(is_ajax(&headers));

		headers.insert(X_REQUESTED_WITH, HeaderValue::from_static("fetch"));

		assert!(!is_ajax(&headers));
	}

	#[test]
	fn client_addr_from_socket_drops_port() {
		let socket: std::net::SocketAddr =
			"192.168.0.1:8080".parse().expect("Socket fixture should parse.");

		assert_eq!(ClientAddr::from(socket), ClientAddr::new("192.168.0.1"));
	}
}
