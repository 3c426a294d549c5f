//! Compact identifiers: URL-safe short GUIDs and random base62/base36 codes.

pub mod random;
pub mod short;

pub use random::*;
pub use short::*;
