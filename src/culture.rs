//! Culture negotiation against an explicitly configured set of supported cultures.
//!
//! A [`CultureSet`] holds the cultures an application actually ships translations for; the
//! first entry is the default. [`CultureSet::resolve`] never fails: unknown, invalid, or
//! missing input collapses to the closest supported culture or the default.

pub mod catalog;
pub mod request;

pub use catalog::{RIGHT_TO_LEFT_LANGUAGES, VALID_CULTURES, is_valid_culture};
pub use request::*;

// self
use crate::{
	_prelude::*,
	obs::{OpKind, OpOutcome, OpSpan},
};

/// Errors raised while building a [`CultureSet`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CultureError {
	/// No supported culture was configured.
	#[error("At least one supported culture must be configured.")]
	Empty,
	/// A configured culture name is blank.
	#[error("Supported culture at position {index} is blank.")]
	Blank {
		/// Position of the blank entry.
		index: usize,
	},
}

/// Ordered list of supported cultures; the first entry is the default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CultureSet(Vec<String>);
impl CultureSet {
	/// Builds a culture set, rejecting empty lists and blank names.
	pub fn new<I, S>(cultures: I) -> Result<Self, CultureError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let cultures =
			cultures.into_iter().map(|c| c.into().trim().to_owned()).collect::<Vec<_>>();

		if cultures.is_empty() {
			return Err(CultureError::Empty);
		}
		if let Some(index) = cultures.iter().position(String::is_empty) {
			return Err(CultureError::Blank { index });
		}

		Ok(Self(cultures))
	}

	/// Default culture (first configured entry).
	pub fn default_culture(&self) -> &str {
		&self.0[0]
	}

	/// Supported cultures in configuration order.
	pub fn cultures(&self) -> &[String] {
		&self.0
	}

	/// Returns `true` when `name` is one of the supported cultures, ignoring ASCII case.
	pub fn supports(&self, name: &str) -> bool {
		self.find_exact(name).is_some()
	}

	/// Maps a requested culture to the closest supported culture.
	///
	/// Resolution order:
	/// 1. empty or missing input yields the default;
	/// 2. names outside [`VALID_CULTURES`] yield the default;
	/// 3. an exact (case-insensitive) match wins;
	/// 4. otherwise the first supported culture whose name starts with the neutral language
	///    wins;
	/// 5. otherwise the default.
	///
	/// Exact matches return the configured spelling, not the caller's casing.
	pub fn resolve(&self, requested: Option<&str>) -> &str {
		let span = OpSpan::new(OpKind::Culture, "resolve");
		let resolved =
			span.in_scope(|| self.resolve_inner(requested.map(str::trim).unwrap_or_default()));

		span.finish(if resolved.is_some() { OpOutcome::Matched } else { OpOutcome::Fallback });

		resolved.unwrap_or_else(|| self.default_culture())
	}

	fn resolve_inner(&self, requested: &str) -> Option<&str> {
		if requested.is_empty() || !is_valid_culture(requested) {
			return None;
		}
		if let Some(exact) = self.find_exact(requested) {
			return Some(exact);
		}

		let neutral = neutral_culture(requested);

		self.0.iter().map(String::as_str).find(|supported| shares_language(supported, neutral))
	}

	fn find_exact(&self, name: &str) -> Option<&str> {
		self.0.iter().map(String::as_str).find(|supported| supported.eq_ignore_ascii_case(name))
	}
}
impl Default for CultureSet {
	fn default() -> Self {
		Self(vec!["en-US".into()])
	}
}
impl TryFrom<Vec<String>> for CultureSet {
	type Error = CultureError;

	fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<CultureSet> for Vec<String> {
	fn from(value: CultureSet) -> Self {
		value.0
	}
}

/// Returns the language subtag of a culture name (`"en"` for `"en-US"`).
///
/// Names without a hyphen are already neutral and are returned unchanged.
pub fn neutral_culture(name: &str) -> &str {
	name.split_once('-').map_or(name, |(language, _)| language)
}

/// Returns `true` when the culture's language is written right to left.
pub fn is_right_to_left(name: &str) -> bool {
	let language = neutral_culture(name.trim());

	RIGHT_TO_LEFT_LANGUAGES.iter().any(|rtl| rtl.eq_ignore_ascii_case(language))
}

fn shares_language(supported: &str, neutral: &str) -> bool {
	supported.get(..neutral.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(neutral))
}
