//! Serde-loadable configuration for the helpers that need settings.
//!
//! ```json
//! {
//!   "cultures": ["en-US", "fr-FR"],
//!   "throttles": [{ "name": "login", "seconds": 5 }],
//!   "webhook": { "url": "https://hooks.slack.com/services/T/B/X", "username": "deploy-bot" },
//!   "assets": { "debug": false, "cache_tag": "2024.1" }
//! }
//! ```

// std
use std::{collections::HashSet, fs, path::Path};
// self
use crate::{
	_prelude::*,
	bundle::ResourceBundleBuilder,
	culture::CultureSet,
	error::ConfigError,
	html::AssetOptions,
	throttle::{MarkerStore, ThrottleConfig, ThrottleGuard},
	webhook::Payload,
};

/// Aggregate configuration; every section is optional in the source document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
	/// Supported cultures, default first.
	pub cultures: CultureSet,
	/// Throttled routes.
	pub throttles: Vec<ThrottleConfig>,
	/// Webhook notifier settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub webhook: Option<WebhookConfig>,
	/// Asset tag rendering options.
	pub assets: AssetOptions,
	/// Resource bundle settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resources: Option<ResourceBundleBuilder>,
}
impl HelpersConfig {
	/// Parses and validates a JSON document.
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let config: Self = serde_path_to_error::deserialize(&mut de)?;

		config.validate()?;

		Ok(config)
	}

	/// Reads, parses, and validates a JSON file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let raw = fs::read_to_string(path)?;

		Self::from_json_str(&raw)
	}

	/// Checks cross-field constraints serde cannot express.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let mut names = HashSet::new();

		for (index, throttle) in self.throttles.iter().enumerate() {
			let field = format!("throttles[{index}].name");

			if throttle.name.trim().is_empty() {
				return Err(ConfigError::Invalid { field, reason: "name must not be empty".into() });
			}
			if !names.insert(throttle.name.as_str()) {
				return Err(ConfigError::Invalid {
					field,
					reason: format!("`{}` is configured more than once", throttle.name),
				});
			}
		}

		if let Some(webhook) = &self.webhook {
			webhook.validate()?;
		}

		Ok(())
	}

	/// Throttle settings for the named route.
	pub fn throttle(&self, name: &str) -> Option<&ThrottleConfig> {
		self.throttles.iter().find(|throttle| throttle.name == name)
	}

	/// Builds one guard per throttled route, all sharing `store`.
	pub fn throttle_guards(&self, store: Arc<dyn MarkerStore>) -> HashMap<String, ThrottleGuard> {
		self.throttles
			.iter()
			.map(|config| (config.name.clone(), ThrottleGuard::new(config.clone(), store.clone())))
			.collect()
	}
}

/// Webhook destination plus the poster identity applied to every message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
	/// Incoming webhook URL.
	pub url: String,
	/// Channel override.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel: Option<String>,
	/// Poster name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	/// Poster emoji avatar.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon_emoji: Option<String>,
	/// Poster image avatar.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon_url: Option<String>,
}
impl WebhookConfig {
	/// Creates a configuration posting to `url`.
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into(), ..Default::default() }
	}

	/// Rejects blank or unparseable URLs.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let url = self.url.trim();

		if url.is_empty() {
			return Err(ConfigError::MissingWebhookUrl);
		}

		Url::parse(url).map_err(|source| ConfigError::InvalidWebhookUrl { source })?;

		Ok(())
	}

	/// Text payload carrying the configured poster identity.
	pub fn payload(&self, text: impl Into<String>) -> Payload {
		Payload {
			channel: self.channel.clone(),
			username: self.username.clone(),
			icon_emoji: self.icon_emoji.clone(),
			icon_url: self.icon_url.clone(),
			..Payload::text(text)
		}
	}
}
