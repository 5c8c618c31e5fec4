use {
	axum::body::Body,
	http::{Request, Response},
	std::time::Duration,
	tower_http::{
		classify::ServerErrorsFailureClass,
		request_id::RequestId,
		trace::{
			DefaultOnBodyChunk,
			DefaultOnEos,
			HttpMakeClassifier,
			MakeSpan,
			OnFailure,
			OnRequest,
			OnResponse,
			TraceLayer,
		},
	},
};

/// Emits a span for every request, plus events when we start and finish processing it.
///
/// Headers are only recorded if `include_headers` is set.
pub(crate) fn layer(
	include_headers: bool,
) -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<Body> + Clone,
	impl OnRequest<Body> + Clone,
	impl OnResponse<Body> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	TraceLayer::new_for_http()
		.make_span_with(make_span)
		.on_request(move |req: &Request<Body>, span: &tracing::Span| {
			on_request(req, span, include_headers)
		})
		.on_response(move |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
			on_response(res, latency, span, include_headers)
		})
		.on_failure(on_failure)
}

fn make_span(_: &Request<Body>) -> tracing::Span
{
	tracing::info_span!(
		target: "faceit_profile::http",
		"request",
		req.id = tracing::field::Empty,
		req.method = tracing::field::Empty,
		req.uri = tracing::field::Empty,
		req.version = tracing::field::Empty,
		req.headers = tracing::field::Empty,
		res.status = tracing::field::Empty,
		res.headers = tracing::field::Empty,
	)
}

fn on_request(req: &Request<Body>, span: &tracing::Span, include_headers: bool)
{
	if let Some(request_id) = req.extensions().get::<RequestId>() {
		span.record("req.id", tracing::field::debug(request_id.header_value()));
	} else {
		warn!(target: "faceit_profile::http::request", "no request ID in request extensions");
	}

	span.record("req.method", tracing::field::debug(req.method()));
	span.record("req.uri", tracing::field::display(req.uri()));
	span.record("req.version", tracing::field::debug(req.version()));

	if include_headers {
		span.record("req.headers", tracing::field::debug(req.headers()));
	}

	info!(target: "faceit_profile::http", "starting to process request");
}

fn on_response(res: &Response<Body>, latency: Duration, span: &tracing::Span, include_headers: bool)
{
	span.record("res.status", res.status().as_u16());

	if include_headers {
		span.record("res.headers", tracing::field::debug(res.headers()));
	}

	info!(target: "faceit_profile::http", ?latency, "finished processing request");
}

fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span)
{
	match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			error!(
				target: "faceit_profile::http::error",
				status = status.as_u16(),
				?latency,
				"failed to handle request",
			);
		},
		ServerErrorsFailureClass::Error(error) => {
			error!(
				target: "faceit_profile::http::error",
				error,
				?latency,
				"failed to handle request",
			);
		},
	}
}
