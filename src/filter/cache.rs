//! Response caching headers.

// crates.io
use http::{
	HeaderMap, HeaderValue, Request, Response,
	header::{CACHE_CONTROL, EXPIRES, PRAGMA},
};
use time::{UtcOffset, format_description::BorrowedFormatItem, macros::format_description};
// self
use crate::_prelude::*;

/// Lifetime advertised by [`optimized_for_cache`].
pub const LONG_CACHE_LIFETIME: Duration = Duration::days(30);

const HTTP_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
	"[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Forbids every cache between the server and the client from storing the response.
pub async fn no_cache<B, R, E, F, Fut>(request: Request<B>, next: F) -> Result<Response<R>, E>
where
	F: FnOnce(Request<B>) -> Fut,
	Fut: Future<Output = Result<Response<R>, E>>,
{
	let mut response = next(request).await?;

	apply_no_cache(response.headers_mut(), OffsetDateTime::now_utc());

	Ok(response)
}

/// Marks the response as publicly cacheable for [`LONG_CACHE_LIFETIME`].
pub async fn optimized_for_cache<B, R, E, F, Fut>(
	request: Request<B>,
	next: F,
) -> Result<Response<R>, E>
where
	F: FnOnce(Request<B>) -> Fut,
	Fut: Future<Output = Result<Response<R>, E>>,
{
	let mut response = next(request).await?;

	apply_long_cache(response.headers_mut(), OffsetDateTime::now_utc());

	Ok(response)
}

/// Writes the headers set by [`no_cache`]; `Expires` lands one day before `now`.
pub fn apply_no_cache(headers: &mut HeaderMap, now: OffsetDateTime) {
	headers.insert(
		CACHE_CONTROL,
		HeaderValue::from_static("no-cache, no-store, must-revalidate, proxy-revalidate"),
	);
	headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
	insert_expires(headers, now - Duration::days(1));
}

/// Writes the headers set by [`optimized_for_cache`].
pub fn apply_long_cache(headers: &mut HeaderMap, now: OffsetDateTime) {
	let max_age = format!("public, max-age={}", LONG_CACHE_LIFETIME.whole_seconds());

	if let Ok(value) = HeaderValue::from_str(&max_age) {
		headers.insert(CACHE_CONTROL, value);
	}

	insert_expires(headers, now + LONG_CACHE_LIFETIME);
}

/// Formats a datetime as an IMF-fixdate (`Sun, 06 Nov 1994 08:49:37 GMT`).
pub fn http_date(datetime: OffsetDateTime) -> Option<String> {
	datetime.to_offset(UtcOffset::UTC).format(HTTP_DATE_FORMAT).ok()
}

fn insert_expires(headers: &mut HeaderMap, at: OffsetDateTime) {
	if let Some(value) = http_date(at).and_then(|date| HeaderValue::from_str(&date).ok()) {
		headers.insert(EXPIRES, value);
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn http_date_uses_imf_fixdate() {
		assert_eq!(
			http_date(datetime!(1994-11-06 08:49:37 UTC)).as_deref(),
			Some("Sun, 06 Nov 1994 08:49:37 GMT")
		);
	}

	#[test]
	fn no_cache_headers_expire_in_the_past() {
		let mut headers = HeaderMap::new();

		apply_no_cache(&mut headers, datetime!(2025-03-02 10:00 UTC));

		assert_eq!(headers[CACHE_CONTROL], "no-cache, no-store, must-revalidate, proxy-revalidate");
		assert_eq!(headers[PRAGMA], "no-cache");
		assert_eq!(headers[EXPIRES], "Sat, 01 Mar 2025 10:00:00 GMT");
	}

	#[test]
	fn long_cache_headers_expire_in_thirty_days() {
		let mut headers = HeaderMap::new();

		apply_long_cache(&mut headers, datetime!(2025-03-01 10:00 UTC));

		assert_eq!(headers[CACHE_CONTROL], "public, max-age=2592000");
		assert_eq!(headers[EXPIRES], "Mon, 31 Mar 2025 10:00:00 GMT");
	}

	#[tokio::test]
	async fn filters_decorate_handler_response() {
		let request = Request::new(());
		let response = no_cache(request, |_| async { Ok::<_, Error>(Response::new("body")) })
			.await
			.expect("Handler should succeed.");

		assert!(response.headers().contains_key(EXPIRES));
		assert_eq!(*response.body(), "body");

		let response =
			optimized_for_cache(Request::new(()), |_| async { Ok::<_, Error>(Response::new(())) })
				.await
				.expect("Handler should succeed.");

		assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=2592000");
	}
}
