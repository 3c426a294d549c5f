//! Crate-level error types shared across helpers, filters, and transports.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Short identifier could not be decoded.
	#[error(transparent)]
	ShortId(#[from] crate::id::ShortIdError),
	/// Supported culture list is unusable.
	#[error(transparent)]
	Culture(#[from] crate::culture::CultureError),
	/// Unix timestamp conversion failed.
	#[error(transparent)]
	Timestamp(#[from] crate::timestamp::TimestampError),
	/// Marker store failure reported by a throttle reset.
	#[error("{0}")]
	MarkerStore(
		#[from]
		#[source]
		crate::throttle::MarkerStoreError,
	),

	/// Route only accepts AJAX requests.
	#[error("This action only accepts AJAX requests.")]
	AjaxRequired,
	/// Caller passed an argument the helper cannot work with.
	#[error("Invalid argument `{name}`: {reason}.")]
	InvalidArgument {
		/// Argument name.
		name: &'static str,
		/// Why the argument was rejected.
		reason: String,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Webhook URL is empty.
	#[error("Webhook URL must not be empty.")]
	MissingWebhookUrl,
	/// Webhook URL cannot be parsed.
	#[error("Webhook URL is invalid.")]
	InvalidWebhookUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Payload could not be serialized.
	#[error("Webhook payload could not be serialized.")]
	PayloadSerialize(#[source] serde_json::Error),
	/// Configuration document is malformed.
	#[error("Configuration is malformed at `{path}`.")]
	Malformed {
		/// Path to the offending field.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
	/// Configuration is well-formed but inconsistent.
	#[error("Configuration field `{field}` is invalid: {reason}.")]
	Invalid {
		/// Offending field.
		field: String,
		/// Why the value was rejected.
		reason: String,
	},
	/// Configuration file could not be read.
	#[error("Configuration file could not be read.")]
	Io(#[from] std::io::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Malformed { path, source: e.into_inner() }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the webhook.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the webhook.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn transport_error_exposes_source() {
		let io = std::io::Error::other("connection reset");
		let error: Error = TransportError::network(io).into();

		assert!(matches!(error, Error::Transport(_)));

		let source =
			StdError::source(&error).expect("Transport error should expose its network source.");

		assert_eq!(source.to_string(), "connection reset");
	}

	#[test]
	fn malformed_config_keeps_field_path() {
		#[derive(Debug, Deserialize)]
		#[allow(dead_code)]
		struct Probe {
			seconds: u32,
		}

		let mut de = serde_json::Deserializer::from_str("{\"seconds\":\"five\"}");
		let err = serde_path_to_error::deserialize::<_, Probe>(&mut de)
			.expect_err("String seconds should not deserialize into u32.");
		let config: ConfigError = err.into();

		assert!(matches!(&config, ConfigError::Malformed { path, .. } if path == "seconds"));
	}
}
