//! JavaScript resource bundles built from JSON translation files.
//!
//! Translations live next to each other as `{namespace}.{language}.json` objects mapping keys
//! to strings, with `{namespace}.json` holding the base language. The builder turns one of
//! them into `;window.{js_name}={...};` so scripts can read `window.rescJS.SomeKey`.

// std
use std::{fs, path::PathBuf};
// self
use crate::{
	_prelude::*,
	culture,
	error::ConfigError,
	obs::{OpKind, OpOutcome, OpSpan},
};

/// Script emitted when no resource file can be loaded.
pub const RESOURCES_ERROR_SCRIPT: &str =
	";console.error('Resources Errors');/* Resources Errors */;";
/// Global variable name used when none is configured.
pub const DEFAULT_JS_NAME: &str = "rescJS";
/// Base language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Key/value translations, ordered by key.
pub type ResourceEntries = BTreeMap<String, String>;

/// Builds the resource bundle script for one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceBundleBuilder {
	/// Directory holding the JSON resource files.
	pub directory: PathBuf,
	/// File name stem shared by every language of the bundle.
	pub namespace: String,
	/// Language to load.
	pub language: String,
	/// Global variable receiving the entries.
	pub js_name: String,
}
impl ResourceBundleBuilder {
	/// Creates a builder for `{directory}/{namespace}*.json` with the default language and
	/// variable name.
	pub fn new(directory: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
		Self { directory: directory.into(), namespace: namespace.into(), ..Default::default() }
	}

	/// Selects the language to load.
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = language.into();

		self
	}

	/// Overrides the global variable name.
	pub fn with_js_name(mut self, js_name: impl Into<String>) -> Self {
		self.js_name = js_name.into();

		self
	}

	/// Files tried in order: the language file, its neutral language file, the base file.
	pub fn candidate_files(&self) -> Vec<PathBuf> {
		let mut files = Vec::with_capacity(3);
		let language = self.language.trim();

		if !language.is_empty() {
			files.push(self.file_for(Some(language)));

			let neutral = culture::neutral_culture(language);

			if neutral != language {
				files.push(self.file_for(Some(neutral)));
			}
		}

		files.push(self.file_for(None));

		files
	}

	/// Loads the entries from the first existing candidate file.
	pub fn load(&self) -> Result<ResourceEntries, ConfigError> {
		let mut last_missing = None;

		for path in self.candidate_files() {
			match fs::read_to_string(&path) {
				Ok(raw) => return parse_entries(&raw),
				Err(e) if e.kind() == std::io::ErrorKind::NotFound => last_missing = Some(e),
				Err(e) => return Err(e.into()),
			}
		}

		Err(last_missing
			.unwrap_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
			.into())
	}

	/// Produces the bundle script, or [`RESOURCES_ERROR_SCRIPT`] when loading fails.
	pub fn build(&self) -> String {
		let span = OpSpan::new(OpKind::Bundle, "build");

		match span.in_scope(|| self.load().and_then(|entries| self.build_from_entries(&entries))) {
			Ok(script) => {
				span.finish(OpOutcome::Success);

				script
			},
			Err(e) => {
				span.degraded(&e);
				span.finish(OpOutcome::Fallback);

				RESOURCES_ERROR_SCRIPT.to_owned()
			},
		}
	}

	/// Renders already loaded entries as the bundle script.
	pub fn build_from_entries(&self, entries: &ResourceEntries) -> Result<String, ConfigError> {
		let json = serde_json::to_string(entries).map_err(ConfigError::PayloadSerialize)?;
		let js_name = if self.js_name.is_empty() { DEFAULT_JS_NAME } else { &self.js_name };

		Ok(format!(";window.{js_name}={json};"))
	}

	fn file_for(&self, language: Option<&str>) -> PathBuf {
		let name = match language {
			Some(language) => format!("{}.{language}.json", self.namespace),
			None => format!("{}.json", self.namespace),
		};

		self.directory.join(name)
	}
}
impl Default for ResourceBundleBuilder {
	fn default() -> Self {
		Self {
			directory: PathBuf::from("."),
			namespace: "resources".into(),
			language: DEFAULT_LANGUAGE.into(),
			js_name: DEFAULT_JS_NAME.into(),
		}
	}
}

/// Bundle names to look up for `culture`, most specific first.
///
/// Yields `{base}_{culture}`, `{base}_{neutral}`, then `base`. When the culture is blank or
/// equals `base_language`, only `base` is returned because the base bundle already holds that
/// language.
pub fn resource_bundle_candidates(base: &str, culture: &str, base_language: &str) -> Vec<String> {
	let culture = culture.trim();

	if culture.is_empty() || culture.eq_ignore_ascii_case(base_language) {
		return vec![base.to_owned()];
	}

	let neutral = culture::neutral_culture(culture);
	let mut candidates = vec![format!("{base}_{culture}")];

	if neutral != culture && !neutral.eq_ignore_ascii_case(base_language) {
		candidates.push(format!("{base}_{neutral}"));
	}

	candidates.push(base.to_owned());

	candidates
}

fn parse_entries(raw: &str) -> Result<ResourceEntries, ConfigError> {
	let mut de = serde_json::Deserializer::from_str(raw);

	Ok(serde_path_to_error::deserialize(&mut de)?)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	struct TempDir(PathBuf);
	impl TempDir {
		fn new(label: &str) -> Self {
			let path = std::env::temp_dir()
				.join(format!("web-helpers-{label}-{}", crate::id::random_base36(10)));

			fs::create_dir_all(&path).expect("Temp directory should be creatable.");

			Self(path)
		}

		fn write(&self, name: &str, content: &str) {
			fs::write(self.0.join(name), content).expect("Fixture file should be writable.");
		}
	}
	impl Drop for TempDir {
		fn drop(&mut self) {
			let _ = fs::remove_dir_all(&self.0);
		}
	}

	#[test]
	fn builds_script_from_language_file() {
		let dir = TempDir::new("lang");

		dir.write("Strings.json", "{\"Hello\":\"Hello\"}");
		dir.write("Strings.fr.json", "{\"Hello\":\"Bonjour\",\"Bye\":\"Au revoir\"}");

		let builder = ResourceBundleBuilder::new(&dir.0, "Strings").with_language("fr-FR");

		assert_eq!(
			builder.build(),
			";window.rescJS={\"Bye\":\"Au revoir\",\"Hello\":\"Bonjour\"};"
		);
		assert_eq!(
			ResourceBundleBuilder::new(&dir.0, "Strings").with_js_name("i18n").build(),
			";window.i18n={\"Hello\":\"Hello\"};"
		);
	}

	#[test]
	fn missing_or_malformed_files_yield_error_script() {
		let dir = TempDir::new("broken");
		let builder = ResourceBundleBuilder::new(&dir.0, "Strings");

		assert_eq!(builder.build(), RESOURCES_ERROR_SCRIPT);
		assert!(matches!(builder.load(), Err(ConfigError::Io(_))));

		dir.write("Strings.en.json", "{\"Count\":3}");

		assert_eq!(builder.build(), RESOURCES_ERROR_SCRIPT);
		assert!(matches!(
			builder.load(),
			Err(ConfigError::Malformed { path, .. }) if path == "Count"
		));
	}

	#[test]
	fn candidate_files_walk_down_to_base() {
		let builder = ResourceBundleBuilder::new("res", "Strings").with_language("pt-BR");
		let files = builder.candidate_files();

		assert_eq!(
			files,
			vec![
				PathBuf::from("res/Strings.pt-BR.json"),
				PathBuf::from("res/Strings.pt.json"),
				PathBuf::from("res/Strings.json"),
			]
		);
	}

	#[test]
	fn bundle_candidates_follow_culture_specificity() {
		assert_eq!(
			resource_bundle_candidates("/bundles/resources", "fr-FR", "en"),
			vec!["/bundles/resources_fr-FR", "/bundles/resources_fr", "/bundles/resources"]
		);
		assert_eq!(
			resource_bundle_candidates("/bundles/resources", "EN", "en"),
			vec!["/bundles/resources"]
		);
		assert_eq!(
			resource_bundle_candidates("/bundles/resources", "de", "en"),
			vec!["/bundles/resources_de", "/bundles/resources"]
		);
	}
}
