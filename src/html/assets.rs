//! Script and stylesheet tags that switch between debug and minified assets.

// std
use std::sync::LazyLock;
// self
use crate::{
	_prelude::*,
	bundle,
	html::{escape, script_tag},
	id::ShortId,
};

/// CDN serving jQuery in release mode.
pub const DEFAULT_CDN_ROOT: &str = "https://ajax.aspnetcdn.com/ajax/";

static CACHE_TAG: LazyLock<String> = LazyLock::new(|| ShortId::new_v4().encode());

/// Rendering options shared by the asset helpers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetOptions {
	/// Serve readable sources instead of minified files.
	pub debug: bool,
	/// Value appended as `?v=` to bust browser caches on deploy; defaults to one short id
	/// generated per process.
	pub cache_tag: String,
	/// Root URL of the CDN hosting third-party libraries.
	pub cdn_root: String,
}
impl AssetOptions {
	/// Release-mode options carrying the process-wide cache tag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Toggles debug mode.
	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;

		self
	}

	/// Fixes the cache tag, typically to the deployed build version.
	pub fn with_cache_tag(mut self, cache_tag: impl Into<String>) -> Self {
		self.cache_tag = cache_tag.into();

		self
	}

	/// Overrides the CDN root; a trailing slash is added when missing.
	pub fn with_cdn_root(mut self, cdn_root: impl Into<String>) -> Self {
		let mut cdn_root = cdn_root.into();

		if !cdn_root.ends_with('/') {
			cdn_root.push('/');
		}

		self.cdn_root = cdn_root;

		self
	}

	/// Script tag for `url` (with or without its `.js` extension).
	///
	/// Debug mode loads `{url}.js`, release mode `{url}.min.js`.
	pub fn javascript(&self, url: &str) -> String {
		let stem = url.strip_suffix(".js").unwrap_or(url);
		let suffix = if self.debug { ".js" } else { ".min.js" };

		script_tag(&self.versioned(&format!("{stem}{suffix}")))
	}

	/// Script tags for a group of files served as one bundle in release mode.
	///
	/// Debug mode emits one tag per file so each stays debuggable; release mode emits a single
	/// tag for `bundle_url`.
	pub fn javascript_bundle<I, S>(&self, bundle_url: &str, urls: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if !self.debug {
			return script_tag(&self.versioned(bundle_url));
		}

		urls.into_iter().map(|url| self.javascript(url.as_ref())).collect()
	}

	/// Script tag for the JavaScript compiled from a TypeScript file.
	pub fn typescript(&self, url: &str) -> Result<String> {
		let stem = url.trim().strip_suffix(".ts").filter(|stem| !stem.is_empty()).ok_or_else(
			|| Error::InvalidArgument {
				name: "url",
				reason: format!("`{url}` does not name a TypeScript file"),
			},
		)?;

		Ok(self.javascript(stem))
	}

	/// Stylesheet link for `name`; release mode swaps the extension for `.min.css`.
	pub fn css(&self, name: &str) -> String {
		let href = if self.debug {
			name.to_owned()
		} else {
			let stem = name.split_once('.').map_or(name, |(stem, _)| stem);

			format!("{stem}.min.css")
		};

		format!("<link rel='stylesheet' href='{}'>", escape(&self.versioned(&href)))
	}

	/// jQuery script tags.
	///
	/// Release mode loads `jquery-{version}.min.js` from the CDN and falls back to
	/// `local_bundle` when the CDN copy did not define `window.jQuery`. Debug mode loads only
	/// the local bundle.
	pub fn jquery(&self, version: &str, local_bundle: &str) -> String {
		if self.debug {
			return script_tag(local_bundle);
		}

		let cdn = format!("{}jquery/jquery-{version}.min.js", self.cdn_root);
		let fallback = format!(
			"<script>window.jQuery || document.write('<script src=\"{}\">\\x3C/script>')</script>",
			escape(local_bundle)
		);

		script_tag(&cdn) + &fallback
	}

	/// jQuery Validation script tags.
	///
	/// Release mode loads `jquery.validate`, its additional methods, and the unobtrusive adapter
	/// (`unobtrusive_version`) from the CDN. Debug mode loads only the local bundle.
	pub fn jquery_validate(
		&self,
		version: &str,
		unobtrusive_version: &str,
		local_bundle: &str,
	) -> String {
		if self.debug {
			return script_tag(local_bundle);
		}

		let cdn = &self.cdn_root;

		[
			format!("{cdn}jquery.validate/{version}/jquery.validate.min.js"),
			format!("{cdn}jquery.validate/{version}/additional-methods.min.js"),
			format!("{cdn}mvc/{unobtrusive_version}/jquery.validate.unobtrusive.min.js"),
		]
		.iter()
		.map(|src| script_tag(src))
		.collect()
	}

	/// Script tag for the most specific resource bundle available for `culture`.
	///
	/// Candidates come from [`bundle::resource_bundle_candidates`]; `exists` reports which
	/// bundle URLs the host actually serves. The base bundle is used when none matches.
	pub fn resources_js<F>(
		&self,
		base_bundle: &str,
		culture: &str,
		base_language: &str,
		exists: F,
	) -> String
	where
		F: Fn(&str) -> bool,
	{
		let url = bundle::resource_bundle_candidates(base_bundle, culture, base_language)
			.into_iter()
			.find(|candidate| exists(candidate))
			.unwrap_or_else(|| base_bundle.to_owned());

		script_tag(&url)
	}

	fn versioned(&self, url: &str) -> String {
		if self.cache_tag.is_empty() {
			return url.to_owned();
		}

		let separator = if url.contains('?') { '&' } else { '?' };

		format!("{url}{separator}v={}", self.cache_tag)
	}
}
impl Default for AssetOptions {
	fn default() -> Self {
		Self {
			debug: false,
			cache_tag: CACHE_TAG.clone(),
			cdn_root: DEFAULT_CDN_ROOT.into(),
		}
	}
}
