use {
	http::{HeaderName, HeaderValue, Method, header},
	std::sync::Arc,
	tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer},
};

/// CORS for the public API.
///
/// Everything we serve is read-only, so only `GET` is allowed. An empty list of origins allows
/// any origin.
pub(crate) fn layer(allowed_origins: impl IntoIterator<Item = HeaderValue>) -> CorsLayer
{
	let allowed_origins = Arc::<[HeaderValue]>::from_iter(allowed_origins);
	let allow_origin = if allowed_origins.is_empty() {
		AllowOrigin::any()
	} else {
		AllowOrigin::predicate(move |origin, _request| -> bool { allowed_origins.contains(origin) })
	};

	CorsLayer::new()
		.allow_origin(allow_origin)
		.allow_methods([Method::GET])
		.allow_headers(AllowHeaders::list([header::CONTENT_TYPE]))
		.expose_headers([HeaderName::from_static("x-request-id")])
}
