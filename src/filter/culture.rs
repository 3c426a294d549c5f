//! Per-request culture selection.

// crates.io
use http::{HeaderValue, Request, Response, header::CONTENT_LANGUAGE};
// self
use crate::{
	_prelude::*,
	culture::{CultureSet, ResolvedCulture, requested_culture},
};

/// Resolves the request's culture against `cultures` and exposes it to `next`.
///
/// The resolved culture is inserted into the request extensions as [`ResolvedCulture`] and
/// echoed on the response as `Content-Language` unless the handler set one.
pub async fn with_culture<B, R, E, F, Fut>(
	cultures: &CultureSet,
	mut request: Request<B>,
	next: F,
) -> Result<Response<R>, E>
where
	F: FnOnce(Request<B>) -> Fut,
	Fut: Future<Output = Result<Response<R>, E>>,
{
	let requested = requested_culture(request.headers());
	let resolved = cultures.resolve(requested.as_deref()).to_owned();
	let header = HeaderValue::from_str(&resolved).ok();

	request.extensions_mut().insert(ResolvedCulture(resolved));

	let mut response = next(request).await?;

	if let Some(header) = header {
		response.headers_mut().entry(CONTENT_LANGUAGE).or_insert(header);
	}

	Ok(response)
}
