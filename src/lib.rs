//! Small, composable helpers for web apps.
//!
//! Covers culture negotiation, short identifiers, throttling and cache-header filters, resource
//! bundles, HTML snippets, and Slack webhooks.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod bundle;
pub mod config;
pub mod culture;
pub mod error;
pub mod filter;
pub mod grid;
pub mod hash;
pub mod html;
pub mod id;
pub mod obs;
pub mod throttle;
pub mod timestamp;
pub mod webhook;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// crates.io
	use http::{Request, header::USER_AGENT};
	// self
	use crate::{
		filter::{ClientAddr, SessionId},
		throttle::{MemoryMarkerStore, ThrottleConfig, ThrottleGuard},
	};

	/// Builds a throttle guard backed by a fresh in-memory marker store.
	pub fn build_test_guard(name: &str, seconds: u32) -> (ThrottleGuard, Arc<MemoryMarkerStore>) {
		let store = Arc::new(MemoryMarkerStore::default());
		let config = ThrottleConfig::new(name, seconds);
		let guard = ThrottleGuard::new(config, store.clone());

		(guard, store)
	}

	/// Builds a request carrying the client metadata the throttle filter reads.
	pub fn test_request(address: &str, user_agent: &str, session: Option<&str>) -> Request<()> {
		let mut request = Request::builder()
			.uri("/throttled")
			.header(USER_AGENT, user_agent)
			.body(())
			.expect("Failed to build throttle test request.");

		request.extensions_mut().insert(ClientAddr::new(address));

		if let Some(session) = session {
			request.extensions_mut().insert(SessionId::new(session));
		}

		request
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use error::{Error, Result};
pub use http;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
