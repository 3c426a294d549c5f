//! 22-character URL-safe encoding of 128-bit identifiers.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use uuid::Uuid;
// self
use crate::_prelude::*;

/// Length of an encoded [`ShortId`].
pub const SHORT_ID_LEN: usize = 22;

/// Error returned when a string is not a valid encoded [`ShortId`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ShortIdError {
	/// The encoded value does not have exactly [`SHORT_ID_LEN`] characters.
	#[error("Short identifier must be {SHORT_ID_LEN} characters, got {len}.")]
	InvalidLength {
		/// Length of the rejected input.
		len: usize,
	},
	/// The encoded value is not valid URL-safe base64.
	#[error("Short identifier is not valid URL-safe base64: {reason}.")]
	InvalidEncoding {
		/// Decoder failure description.
		reason: String,
	},
	/// A hyphenated GUID string could not be parsed.
	#[error("GUID string is malformed: {reason}.")]
	InvalidGuid {
		/// Parser failure description.
		reason: String,
	},
}

/// A 128-bit identifier with a 22-character URL-safe string form.
///
/// The string form is the URL-safe base64 encoding (no padding) of the identifier's bytes in
/// the little-endian field layout used by .NET GUID byte arrays, so values interoperate with
/// short GUIDs produced by existing .NET services.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortId(Uuid);
impl ShortId {
	/// Generates a random (v4) identifier.
	pub fn new_v4() -> Self {
		Self(Uuid::new_v4())
	}

	/// The all-zero identifier.
	pub const fn nil() -> Self {
		Self(Uuid::nil())
	}

	/// Wraps an existing UUID.
	pub const fn from_uuid(uuid: Uuid) -> Self {
		Self(uuid)
	}

	/// Returns the underlying UUID.
	pub const fn as_uuid(&self) -> Uuid {
		self.0
	}

	/// Encodes the identifier into its 22-character form.
	pub fn encode(&self) -> String {
		URL_SAFE_NO_PAD.encode(self.0.to_bytes_le())
	}

	/// Decodes a 22-character string produced by [`encode`](Self::encode).
	pub fn decode(value: &str) -> Result<Self, ShortIdError> {
		if value.len() != SHORT_ID_LEN {
			return Err(ShortIdError::InvalidLength { len: value.len() });
		}

		let decoded = URL_SAFE_NO_PAD
			.decode(value)
			.map_err(|e| ShortIdError::InvalidEncoding { reason: e.to_string() })?;
		let bytes = <[u8; 16]>::try_from(decoded.as_slice()).map_err(|_| {
			ShortIdError::InvalidEncoding {
				reason: format!("decoded {} bytes instead of 16", decoded.len()),
			}
		})?;

		Ok(Self(Uuid::from_bytes_le(bytes)))
	}

	/// Encodes a hyphenated (or simple) GUID string into its 22-character form.
	pub fn encode_str(guid: &str) -> Result<String, ShortIdError> {
		let uuid = Uuid::parse_str(guid.trim())
			.map_err(|e| ShortIdError::InvalidGuid { reason: e.to_string() })?;

		Ok(Self(uuid).encode())
	}
}
impl From<Uuid> for ShortId {
	fn from(value: Uuid) -> Self {
		Self(value)
	}
}
impl From<ShortId> for Uuid {
	fn from(value: ShortId) -> Self {
		value.0
	}
}
impl From<ShortId> for String {
	fn from(value: ShortId) -> Self {
		value.encode()
	}
}
impl TryFrom<String> for ShortId {
	type Error = ShortIdError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::decode(&value)
	}
}
impl FromStr for ShortId {
	type Err = ShortIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::decode(s)
	}
}
impl Debug for ShortId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ShortId({})", self.encode())
	}
}
impl Display for ShortId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.encode())
	}
}
