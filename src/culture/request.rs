//! Extraction of the requested culture from HTTP request headers.

// crates.io
use http::{
	HeaderMap,
	header::{ACCEPT_LANGUAGE, COOKIE},
};

/// Cookie that pins a client to a culture regardless of browser preferences.
pub const CULTURE_COOKIE: &str = "_culture";

/// Culture chosen for the current request, stored in request extensions by
/// [`with_culture`](crate::filter::with_culture).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedCulture(pub String);
impl ResolvedCulture {
	/// Culture name.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Language subtag of the culture.
	pub fn neutral(&self) -> &str {
		super::neutral_culture(&self.0)
	}

	/// Whether the culture is written right to left.
	pub fn is_right_to_left(&self) -> bool {
		super::is_right_to_left(&self.0)
	}
}

/// Reads the culture a client asked for.
///
/// The [`CULTURE_COOKIE`] cookie wins over the `Accept-Language` header; only the first
/// language listed in the header is considered and its quality suffix is dropped.
pub fn requested_culture(headers: &HeaderMap) -> Option<String> {
	cookie_culture(headers).or_else(|| accept_language_culture(headers))
}

fn cookie_culture(headers: &HeaderMap) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|raw| raw.split(';'))
		.filter_map(|pair| pair.trim().split_once('='))
		.find(|(name, _)| *name == CULTURE_COOKIE)
		.map(|(_, value)| value.trim().trim_matches('"').to_owned())
		.filter(|value| !value.is_empty())
}

fn accept_language_culture(headers: &HeaderMap) -> Option<String> {
	let raw = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;
	let first = raw.split(',').next()?;
	let tag = first.split(';').next()?.trim();

	(!tag.is_empty() && tag != "*").then(|| tag.to_owned())
}

#[cfg(test)]
mod tests {
	// crates.io
	use http::HeaderValue;
	// self
	use super::*;

	fn headers(pairs: &[(http::HeaderName, &'static str)]) -> HeaderMap {
		let mut map = HeaderMap::new();

		for (name, value) in pairs {
			map.append(name.clone(), HeaderValue::from_static(value));
		}

		map
	}

	#[test]
	fn cookie_wins_over_accept_language() {
		let map = headers(&[
			(COOKIE, "theme=dark; _culture=fr-FR"),
			(ACCEPT_LANGUAGE, "de-DE,de;q=0.9"),
		]);

		assert_eq!(requested_culture(&map).as_deref(), Some("fr-FR"));
	}

	#[test]
	fn first_accept_language_entry_without_quality() {
		let map = headers(&[(ACCEPT_LANGUAGE, "es-MX;q=0.9, en;q=0.5")]);

		assert_eq!(requested_culture(&map).as_deref(), Some("es-MX"));
	}

	#[test]
	fn absent_or_wildcard_yields_none() {
		assert_eq!(requested_culture(&HeaderMap::new()), None);
		assert_eq!(requested_culture(&headers(&[(ACCEPT_LANGUAGE, "*")])), None);
		assert_eq!(requested_culture(&headers(&[(COOKIE, "_culture=")])), None);
	}

	#[test]
	fn resolved_culture_helpers() {
		let culture = ResolvedCulture("he-IL".into());

		assert_eq!(culture.as_str(), "he-IL");
		assert_eq!(culture.neutral(), "he");
		assert!(culture.is_right_to_left());
	}
}
