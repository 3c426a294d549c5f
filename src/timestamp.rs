//! Unix timestamp conversions and JavaScript-friendly ISO-8601 formatting.

// crates.io
use time::{UtcOffset, format_description::BorrowedFormatItem, macros::format_description};
// self
use crate::_prelude::*;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const JS_ISO_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
	"[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:7]Z"
);

/// Errors raised by timestamp conversions.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum TimestampError {
	/// Timestamp lies outside the range representable by [`OffsetDateTime`].
	#[error("Unix timestamp {0} is out of range.")]
	OutOfRange(i64),
	/// Datetime could not be formatted.
	#[error("Datetime could not be formatted: {0}.")]
	Format(String),
}

/// Converts seconds since the Unix epoch into a UTC datetime.
pub fn from_unix_timestamp(seconds: i64) -> Result<OffsetDateTime, TimestampError> {
	OffsetDateTime::from_unix_timestamp(seconds).map_err(|_| TimestampError::OutOfRange(seconds))
}

/// Converts a datetime into seconds since the Unix epoch.
///
/// Sub-second precision is rounded to the nearest second; exact halves round to the even
/// second.
pub fn to_unix_timestamp(datetime: OffsetDateTime) -> i64 {
	let nanos = datetime.unix_timestamp_nanos();
	let seconds = nanos.div_euclid(NANOS_PER_SECOND);
	let remainder = nanos.rem_euclid(NANOS_PER_SECOND);
	let half = NANOS_PER_SECOND / 2;
	let round_up = remainder > half || (remainder == half && seconds % 2 != 0);

	(if round_up { seconds + 1 } else { seconds }) as i64
}

/// Formats a datetime as UTC ISO-8601 with seven fractional digits, e.g.
/// `2024-03-01T08:30:00.1234567Z`, which JavaScript's `Date` parses directly.
pub fn to_js_iso(datetime: OffsetDateTime) -> Result<String, TimestampError> {
	datetime
		.to_offset(UtcOffset::UTC)
		.format(JS_ISO_FORMAT)
		.map_err(|e| TimestampError::Format(e.to_string()))
}
