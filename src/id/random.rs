//! Random human-friendly codes drawn from base62 and base36 alphabets.
//!
//! Five base62 characters give roughly 916 million distinct codes and six give about
//! 56.8 billion; six base36 characters give about 2.2 billion.

// crates.io
use rand::{Rng, distr::slice::Choose};

/// Base62 alphabet; its first 36 characters form the base36 alphabet.
pub const BASE62_ALPHABET: &[u8; 62] =
	b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generates a random code of `len` characters from `[0-9A-Za-z]`.
pub fn random_base62(len: usize) -> String {
	random_from(&BASE62_ALPHABET[..], len)
}

/// Generates a random code of `len` characters from `[0-9A-Z]`.
pub fn random_base36(len: usize) -> String {
	random_from(&BASE62_ALPHABET[..36], len)
}

fn random_from(alphabet: &[u8], len: usize) -> String {
	let Ok(choose) = Choose::new(alphabet) else {
		return String::new();
	};

	rand::rng().sample_iter(choose).take(len).map(|byte| char::from(*byte)).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn base62_codes_use_full_alphabet_only() {
		let code = random_base62(64);

		assert_eq!(code.len(), 64);
		assert!(code.bytes().all(|b| b.is_ascii_alphanumeric()));
	}

	#[test]
	fn base36_codes_are_upper_case_alphanumeric() {
		let code = random_base36(64);

		assert_eq!(code.len(), 64);
		assert!(code.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
	}

	#[test]
	fn zero_length_yields_empty_code() {
		assert!(random_base62(0).is_empty());
		assert!(random_base36(0).is_empty());
	}
}
