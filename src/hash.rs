//! MD5 digests for cache keys and Gravatar-style lookups.
//!
//! MD5 is broken as a cryptographic hash; these helpers exist for interoperability with
//! services that key content by MD5 and must never guard anything secret.

// crates.io
use md5::{Digest, Md5};

/// Lowercase hexadecimal MD5 digest of the UTF-8 bytes of `text`.
pub fn md5_hex(text: &str) -> String {
	let digest = Md5::digest(text.as_bytes());

	format!("{digest:x}")
}

/// Returns `true` when `digest` is the MD5 of `text`, ignoring hexadecimal case.
pub fn verify_md5(text: &str, digest: &str) -> bool {
	md5_hex(text).eq_ignore_ascii_case(digest.trim())
}
