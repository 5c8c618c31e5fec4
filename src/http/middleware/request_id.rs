use {
	crate::error::ResultExt,
	tower_http::request_id::{
		MakeRequestId,
		PropagateRequestIdLayer,
		RequestId,
		SetRequestIdLayer,
	},
	uuid::Uuid,
};

/// Generates an ID for every request and puts it into the request's headers and extensions.
pub(crate) fn set_layer() -> SetRequestIdLayer<impl MakeRequestId + Clone>
{
	SetRequestIdLayer::x_request_id(MakeUuidv7RequestId)
}

/// Copies the `x-request-id` header from the request to the response.
pub(crate) fn propagate_layer() -> PropagateRequestIdLayer
{
	PropagateRequestIdLayer::x_request_id()
}

#[derive(Debug, Clone, Copy)]
struct MakeUuidv7RequestId;

impl MakeRequestId for MakeUuidv7RequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		Uuid::now_v7()
			.hyphenated()
			.to_string()
			.parse::<http::HeaderValue>()
			.inspect_err_dyn(|error| warn!(error, "failed to generate request ID"))
			.map(RequestId::new)
			.ok()
	}
}
