use {
	super::{MatchHistory, Page, Player, PlayerId, PlayerStats},
	crate::ApiKey,
	bytes::Bytes,
	serde::Deserialize,
	std::{fmt, future::Future},
	steam_id::SteamId,
	url::Url,
};

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Display, Error, From)]
#[display("FACEIT API error: {_variant}")]
pub enum ApiError
{
	#[display("failed to make http request")]
	Http(reqwest::Error),

	#[display("FACEIT responded with {status}")]
	#[from(ignore)]
	Status
	{
		status: http::StatusCode,

		/// The error message FACEIT put in the response body, if any.
		message: Option<Box<str>>,
	},

	#[display("failed to deserialize response from FACEIT")]
	#[from(ignore)]
	DeserializeResponse
	{
		#[error(source)]
		error: serde_json::Error,

		#[debug("{:?}", String::from_utf8_lossy(body))]
		body: Bytes,
	},

	#[display("base URL `{_0}` cannot have path segments")]
	#[from(ignore)]
	#[error(ignore)]
	InvalidBaseUrl(Url),
}

impl ApiError
{
	/// The status code FACEIT responded with, if we got that far.
	pub fn status(&self) -> Option<http::StatusCode>
	{
		match *self {
			Self::Status { status, .. } => Some(status),
			Self::Http(ref error) => error.status(),
			Self::DeserializeResponse { .. } | Self::InvalidBaseUrl(_) => None,
		}
	}

	/// The error message FACEIT included in its response, if any.
	pub fn message(&self) -> Option<&str>
	{
		match *self {
			Self::Status { ref message, .. } => message.as_deref(),
			Self::Http(_) | Self::DeserializeResponse { .. } | Self::InvalidBaseUrl(_) => None,
		}
	}
}

/// The subset of FACEIT's Data API needed to assemble a profile.
///
/// Every call takes the API key explicitly so callers decide whether they are configured before
/// anything goes over the wire.
pub trait FaceitApi: Send + Sync
{
	/// Finds the FACEIT player whose account for `game` is linked to `steam_id`.
	fn find_player(
		&self,
		api_key: &ApiKey,
		game: &str,
		steam_id: SteamId,
	) -> impl Future<Output = Result<Player>> + Send;

	/// Fetches a player's lifetime statistics for `game`.
	fn player_stats(
		&self,
		api_key: &ApiKey,
		player_id: &PlayerId,
		game: &str,
	) -> impl Future<Output = Result<PlayerStats>> + Send;

	/// Fetches a page of a player's match history for `game`, most recent first.
	fn match_history(
		&self,
		api_key: &ApiKey,
		player_id: &PlayerId,
		game: &str,
		page: Page,
	) -> impl Future<Output = Result<MatchHistory>> + Send;
}

/// A client for FACEIT's Data API.
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

	/// Builds a URL by appending (percent-encoded) `segments` to the base URL.
	fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url>
	{
		let mut url = self.base_url.clone();

		url.path_segments_mut()
			.map_err(|()| ApiError::InvalidBaseUrl(self.base_url.clone()))?
			.pop_if_empty()
			.extend(segments);

		Ok(url)
	}

	fn get(&self, api_key: &ApiKey, url: Url) -> reqwest::RequestBuilder
	{
		self.http_client.get(url).bearer_auth(api_key.expose())
	}
}

impl FaceitApi for Client
{
	#[instrument(skip(self, api_key), err(level = "debug"))]
	async fn find_player(&self, api_key: &ApiKey, game: &str, steam_id: SteamId) -> Result<Player>
	{
		#[derive(serde::Serialize)]
		struct Query<'a>
		{
			game: &'a str,

			#[serde(rename = "game_player_id", serialize_with = "SteamId::serialize_u64_stringified")]
			steam_id: SteamId,
		}

		let request = self
			.get(api_key, self.url(["players"])?)
			.query(&Query { game, steam_id });

		send_request(request).await
	}

	#[instrument(skip(self, api_key), err(level = "debug"))]
	async fn player_stats(
		&self,
		api_key: &ApiKey,
		player_id: &PlayerId,
		game: &str,
	) -> Result<PlayerStats>
	{
		let url = self.url(["players", player_id.as_str(), "stats", game])?;

		send_request(self.get(api_key, url)).await
	}

	#[instrument(skip(self, api_key), err(level = "debug"))]
	async fn match_history(
		&self,
		api_key: &ApiKey,
		player_id: &PlayerId,
		game: &str,
		page: Page,
	) -> Result<MatchHistory>
	{
		#[derive(serde::Serialize)]
		struct Query<'a>
		{
			game: &'a str,
			offset: u32,
			limit: u32,
		}

		let request = self
			.get(api_key, self.url(["players", player_id.as_str(), "history"])?)
			.query(&Query { game, offset: page.offset, limit: page.limit });

		send_request(request).await
	}
}

#[instrument(level = "trace", err(Debug, level = "trace"))]
async fn send_request<T>(request: reqwest::RequestBuilder) -> Result<T>
where
	T: fmt::Debug + for<'de> Deserialize<'de>,
{
	let response = request.send().await.map_err(reqwest::Error::without_url)?;
	let status = response.status();
	let body = response.bytes().await.map_err(reqwest::Error::without_url)?;

	if !status.is_success() {
		return Err(ApiError::Status { status, message: error_message(&body) });
	}

	serde_json::from_slice(&body[..]).map_err(|error| ApiError::DeserializeResponse { error, body })
}

/// Extracts a human-readable message from a FACEIT error body.
///
/// Errors come either as `{ "message": "..." }` or as `{ "errors": [{ "message": "..." }] }`.
fn error_message(body: &[u8]) -> Option<Box<str>>
{
	#[derive(Deserialize)]
	struct ErrorBody
	{
		message: Option<Box<str>>,

		#[serde(default)]
		errors: Vec<ErrorEntry>,
	}

	#[derive(Deserialize)]
	struct ErrorEntry
	{
		message: Option<Box<str>>,
	}

	let ErrorBody { message, errors } = serde_json::from_slice(body).ok()?;

	message.or_else(|| errors.into_iter().find_map(|entry| entry.message))
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		crate::testing::{self, StubServer, render_error_chain},
		serde_json::json,
	};

	const STEAM_ID: &str = "76561198012345678";

	fn client(base_url: &str) -> Client
	{
		let base_url = Url::parse(base_url).unwrap_or_else(|err| panic!("bad test URL: {err}"));

		Client::new(reqwest::Client::new(), base_url)
	}

	#[test]
	fn url_appends_segments()
	{
		let url = client("https://open.faceit.com/data/v4").url(["players", "abc", "stats", "cs2"]);

		assert!(matches!(
			url.as_ref().map(Url::as_str),
			Ok("https://open.faceit.com/data/v4/players/abc/stats/cs2")
		));
	}

	#[test]
	fn url_handles_trailing_slash()
	{
		let url = client("https://open.faceit.com/data/v4/").url(["players"]);

		assert!(matches!(url.as_ref().map(Url::as_str), Ok("https://open.faceit.com/data/v4/players")));
	}

	#[test]
	fn url_encodes_segments()
	{
		let url = client("https://open.faceit.com/data/v4").url(["players", "../admin"]);

		assert!(matches!(
			url.as_ref().map(Url::as_str),
			Ok("https://open.faceit.com/data/v4/players/..%2Fadmin")
		));
	}

	#[test]
	fn error_message_from_top_level_field()
	{
		let message = error_message(br#"{ "message": "Invalid API key" }"#);

		assert_eq!(message.as_deref(), Some("Invalid API key"));
	}

	#[test]
	fn error_message_from_errors_list()
	{
		let message = error_message(br#"{ "errors": [{ "message": "not found", "code": "err_nf0" }] }"#);

		assert_eq!(message.as_deref(), Some("not found"));
	}

	#[test]
	fn error_message_from_garbage()
	{
		assert_eq!(error_message(b"<html>bad gateway</html>"), None);
	}

	#[test]
	fn status_errors_expose_status_and_message()
	{
		let error = ApiError::Status {
			status: http::StatusCode::TOO_MANY_REQUESTS,
			message: Some(Box::from("slow down")),
		};

		assert_eq!(error.status(), Some(http::StatusCode::TOO_MANY_REQUESTS));
		assert_eq!(error.message(), Some("slow down"));
	}

	fn steam_id() -> SteamId
	{
		SteamId::parse_canonical(STEAM_ID).unwrap_or_else(|| panic!("invalid test SteamID"))
	}

	fn api_key() -> ApiKey
	{
		ApiKey::new(testing::FACEIT_API_KEY)
	}

	fn stub_client(server: &StubServer) -> Client
	{
		Client::new(testing::http_client(), server.url("data/v4"))
	}

	#[tokio::test]
	async fn find_player_queries_by_steam_id()
	{
		let server = StubServer::start(http::StatusCode::OK, testing::player_payload()).await;
		let player = stub_client(&server)
			.find_player(&api_key(), "cs2", steam_id())
			.await
			.unwrap_or_else(|err| panic!("{err}"));

		assert_eq!(player.player_id.as_str(), testing::PLAYER_ID);

		let request = server.single_request();

		assert_eq!(request.path, "/data/v4/players");
		assert_eq!(request.query.get("game").map(String::as_str), Some("cs2"));
		assert_eq!(request.query.get("game_player_id").map(String::as_str), Some(STEAM_ID));
		assert_eq!(
			request.authorization,
			Some(format!("Bearer {}", testing::FACEIT_API_KEY))
		);
	}

	#[tokio::test]
	async fn player_stats_uses_game_in_path()
	{
		let server = StubServer::start(http::StatusCode::OK, testing::stats_payload("cs2")).await;
		let player_id = PlayerId::from(testing::PLAYER_ID);

		stub_client(&server)
			.player_stats(&api_key(), &player_id, "cs2")
			.await
			.unwrap_or_else(|err| panic!("{err}"));

		let request = server.single_request();

		assert_eq!(request.path, format!("/data/v4/players/{}/stats/cs2", testing::PLAYER_ID));
		assert!(request.query.is_empty());
		assert_eq!(
			request.authorization,
			Some(format!("Bearer {}", testing::FACEIT_API_KEY))
		);
	}

	#[tokio::test]
	async fn match_history_sends_page()
	{
		let server = StubServer::start(http::StatusCode::OK, testing::history_payload()).await;
		let player_id = PlayerId::from(testing::PLAYER_ID);
		let history = stub_client(&server)
			.match_history(&api_key(), &player_id, "cs2", Page::first(5))
			.await
			.unwrap_or_else(|err| panic!("{err}"));

		assert_eq!(history.items.len(), 1);

		let request = server.single_request();

		assert_eq!(request.path, format!("/data/v4/players/{}/history", testing::PLAYER_ID));
		assert_eq!(request.query.get("game").map(String::as_str), Some("cs2"));
		assert_eq!(request.query.get("offset").map(String::as_str), Some("0"));
		assert_eq!(request.query.get("limit").map(String::as_str), Some("5"));
	}

	#[tokio::test]
	async fn error_status_carries_message()
	{
		let server = StubServer::start(
			http::StatusCode::NOT_FOUND,
			json!({ "errors": [{ "message": "not found", "code": "err_nf0" }] }),
		)
		.await;

		let error = stub_client(&server)
			.find_player(&api_key(), "cs2", steam_id())
			.await
			.err()
			.unwrap_or_else(|| panic!("404 should be an error"));

		assert_eq!(error.status(), Some(http::StatusCode::NOT_FOUND));
		assert_eq!(error.message(), Some("not found"));
	}

	#[tokio::test]
	async fn unparsable_body_is_a_deserialize_error()
	{
		let server = StubServer::start(http::StatusCode::OK, json!({ "nickname": "no id" })).await;
		let result = stub_client(&server)
			.find_player(&api_key(), "cs2", steam_id())
			.await;

		assert!(matches!(result, Err(ApiError::DeserializeResponse { .. })));
	}

	#[tokio::test]
	async fn transport_errors_do_not_contain_url()
	{
		let base_url = Url::parse("http://127.0.0.1:1/data/v4").unwrap_or_else(|err| panic!("{err}"));
		let error = Client::new(testing::http_client(), base_url)
			.find_player(&api_key(), "cs2", steam_id())
			.await
			.err()
			.unwrap_or_else(|| panic!("nothing should be listening on port 1"));

		assert!(matches!(error, ApiError::Http(_)));
		assert_eq!(error.status(), None);
		assert!(!render_error_chain(&error).contains(STEAM_ID));
	}
}
