use {
	bytes::Bytes,
	reqwest::RequestBuilder,
	serde::Deserialize,
	std::fmt,
	url::Url,
};

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Display, Error, From)]
#[display("Steam API error: {_variant}")]
pub enum ApiError
{
	#[display("failed to make http request")]
	Http(reqwest::Error),

	#[display("Steam responded with {status}")]
	#[from(ignore)]
	Status
	{
		status: http::StatusCode,
	},

	#[display("failed to deserialize response from Steam")]
	#[from(ignore)]
	DeserializeResponse
	{
		#[error(source)]
		error: serde_json::Error,

		#[debug("{:?}", String::from_utf8_lossy(body))]
		body: Bytes,
	},
}

/// A client for Steam's Web API.
#[derive(Debug, Clone)]
pub struct Client
{
	http_client: reqwest::Client,

	#[debug("{:?}", base_url.as_str())]
	base_url: Url,
}

impl Client
{
	pub fn new(http_client: reqwest::Client, base_url: Url) -> Self
	{
		Self { http_client, base_url }
	}

	/// Builds a URL for `path`, relative to the configured base URL.
	pub(super) fn url(&self, path: &str) -> Url
	{
		let mut url = self.base_url.clone();
		let base_path = url.path().trim_end_matches('/');
		let full_path = format!("{base_path}/{}", path.trim_start_matches('/'));

		url.set_path(&full_path);
		url
	}
}

impl AsRef<reqwest::Client> for Client
{
	fn as_ref(&self) -> &reqwest::Client
	{
		&self.http_client
	}
}

/// Sends `request` and unwraps the `response` envelope every Steam Web API response comes in.
#[instrument(level = "debug", skip(request), ret(level = "debug"), err(Debug, level = "debug"))]
pub(super) async fn send_request<T>(request: RequestBuilder) -> Result<T>
where
	T: fmt::Debug + for<'de> Deserialize<'de>,
{
	#[derive(Debug, serde::Deserialize)]
	struct ApiResponse<T>
	{
		response: T,
	}

	// the API key is part of the URL
	let response = request.send().await.map_err(reqwest::Error::without_url)?;
	let status = response.status();

	if !status.is_success() {
		return Err(ApiError::Status { status });
	}

	let body = response.bytes().await.map_err(reqwest::Error::without_url)?;

	serde_json::from_slice(&body[..])
		.map(|ApiResponse { response }| response)
		.map_err(|error| ApiError::DeserializeResponse { error, body })
}
