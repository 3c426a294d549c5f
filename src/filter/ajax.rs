//! Filters for routes consumed by `XMLHttpRequest` clients.

// crates.io
use http::{HeaderValue, Request, Response, StatusCode, header::CONTENT_TYPE};
// self
use crate::{_prelude::*, filter::is_ajax};

/// JSON body returned by [`ajax_handle_error`] for failed AJAX requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AjaxErrorBody {
	/// Display form of the error.
	pub message: String,
	/// Display forms of the error's source chain, outermost first.
	pub causes: Vec<String>,
}
impl AjaxErrorBody {
	/// Captures an error and its source chain.
	pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
		let mut causes = Vec::new();
		let mut source = error.source();

		while let Some(cause) = source {
			causes.push(cause.to_string());

			source = cause.source();
		}

		Self { message: error.to_string(), causes }
	}
}

/// Rejects requests that were not issued through `XMLHttpRequest`.
///
/// The continuation only runs for AJAX requests; other requests fail with
/// [`Error::AjaxRequired`].
pub async fn ajax_only<B, R, E, F, Fut>(request: Request<B>, next: F) -> Result<Response<R>, E>
where
	E: From<Error>,
	F: FnOnce(Request<B>) -> Fut,
	Fut: Future<Output = Result<Response<R>, E>>,
{
	if !is_ajax(request.headers()) {
		return Err(Error::AjaxRequired.into());
	}

	next(request).await
}

/// Turns handler failures on AJAX requests into `500` JSON responses.
///
/// Non-AJAX failures propagate unchanged so the host's regular error pages still apply.
pub async fn ajax_handle_error<B, R, E, F, Fut>(
	request: Request<B>,
	next: F,
) -> Result<Response<R>, E>
where
	R: From<String>,
	E: 'static + StdError,
	F: FnOnce(Request<B>) -> Fut,
	Fut: Future<Output = Result<Response<R>, E>>,
{
	let ajax = is_ajax(request.headers());

	match next(request).await {
		Err(e) if ajax => Ok(ajax_error_response(&e)),
		outcome => outcome,
	}
}

/// Builds the `500` JSON response emitted by [`ajax_handle_error`].
pub fn ajax_error_response<R>(error: &(dyn StdError + 'static)) -> Response<R>
where
	R: From<String>,
{
	let body = AjaxErrorBody::from_error(error);
	let json = serde_json::to_string(&body).unwrap_or_else(|_| String::from("{}"));
	let mut response = Response::new(R::from(json));

	*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
	response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

	response
}
