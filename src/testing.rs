//! Fake upstream APIs for tests.
//!
//! Every fake counts how often it was called, and clones share their counters, so a test can hand
//! a clone to the code under test and inspect its own copy afterwards.

use {
	crate::{
		ApiKey,
		faceit::{self, FaceitApi, MatchHistory, Page, Player, PlayerId, PlayerStats},
		steam::{self, VanityUrlApi, VanityUrlResponse},
	},
	axum::{Json, Router},
	serde_json::json,
	std::{
		collections::HashMap,
		error::Error,
		sync::{
			Arc,
			Mutex,
			PoisonError,
			atomic::{AtomicUsize, Ordering},
		},
		time::Duration,
	},
	steam_id::SteamId,
	url::Url,
};

pub(crate) const STEAM_API_KEY: &str = "test-steam-key";
pub(crate) const FACEIT_API_KEY: &str = "test-faceit-key";
pub(crate) const PLAYER_ID: &str = "5ea07280-2399-4c7e-88ab-f2f7db0c449f";

/// What [`FakeSteam`] answers vanity lookups with.
#[derive(Debug, Clone, Copy)]
pub(crate) enum VanityOutcome
{
	Resolved(&'static str),
	NoMatch,
	Status(http::StatusCode),
}

#[derive(Debug, Clone)]
pub(crate) struct FakeSteam
{
	outcome: VanityOutcome,
	calls: Arc<AtomicUsize>,
	last_vanity_name: Arc<Mutex<Option<String>>>,
}

impl FakeSteam
{
	pub(crate) fn new(outcome: VanityOutcome) -> Self
	{
		Self { outcome, calls: Arc::default(), last_vanity_name: Arc::default() }
	}

	pub(crate) fn calls(&self) -> usize
	{
		self.calls.load(Ordering::SeqCst)
	}

	pub(crate) fn last_vanity_name(&self) -> Option<String>
	{
		self.last_vanity_name
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}
}

impl VanityUrlApi for FakeSteam
{
	async fn resolve_vanity_url(
		&self,
		api_key: &ApiKey,
		vanity_name: &str,
	) -> steam::api::Result<VanityUrlResponse>
	{
		assert_eq!(api_key.expose(), STEAM_API_KEY);

		self.calls.fetch_add(1, Ordering::SeqCst);
		*self
			.last_vanity_name
			.lock()
			.unwrap_or_else(PoisonError::into_inner) = Some(vanity_name.to_owned());

		match self.outcome {
			VanityOutcome::Resolved(steam_id) => Ok(VanityUrlResponse {
				success: VanityUrlResponse::SUCCESS,
				steam_id: Some(steam_id.parse().unwrap_or_else(|err| panic!("{err}"))),
				message: None,
			}),
			VanityOutcome::NoMatch => Ok(VanityUrlResponse {
				success: 42,
				steam_id: None,
				message: Some(Box::from("No match")),
			}),
			VanityOutcome::Status(status) => Err(steam::ApiError::Status { status }),
		}
	}
}

/// What a single [`FakeFaceit`] endpoint answers with.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) enum Outcome
{
	#[default]
	Ok,

	/// FACEIT responds with this status and an error message.
	Status(http::StatusCode),

	/// FACEIT responds with something we can't parse.
	Garbage,
}

impl Outcome
{
	fn into_result<T>(self, payload: serde_json::Value) -> faceit::api::Result<T>
	where
		T: for<'de> serde::Deserialize<'de>,
	{
		match self {
			Self::Ok => Ok(serde_json::from_value(payload).unwrap_or_else(|err| panic!("{err}"))),
			Self::Status(status) => Err(faceit::ApiError::Status {
				status,
				message: Some(Box::from(status.canonical_reason().unwrap_or("oops"))),
			}),
			Self::Garbage => Err(faceit::ApiError::DeserializeResponse {
				error: serde_json::from_str::<serde_json::Value>("<html>")
					.err()
					.unwrap_or_else(|| panic!("`<html>` is not JSON")),
				body: bytes::Bytes::from_static(b"<html>"),
			}),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeFaceit
{
	pub(crate) player: Outcome,
	pub(crate) stats: Outcome,
	pub(crate) history: Outcome,

	/// How long stats and history requests take.
	pub(crate) supplementary_delay: Option<Duration>,

	pub(crate) player_calls: Arc<AtomicUsize>,
	pub(crate) stats_calls: Arc<AtomicUsize>,
	pub(crate) history_calls: Arc<AtomicUsize>,
	pub(crate) last_player_query: Arc<Mutex<Option<(String, SteamId)>>>,
	pub(crate) last_history_page: Arc<Mutex<Option<Page>>>,
}

impl FakeFaceit
{
	pub(crate) fn player_calls(&self) -> usize
	{
		self.player_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn stats_calls(&self) -> usize
	{
		self.stats_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn history_calls(&self) -> usize
	{
		self.history_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn total_calls(&self) -> usize
	{
		self.player_calls() + self.stats_calls() + self.history_calls()
	}

	pub(crate) fn last_player_query(&self) -> Option<(String, SteamId)>
	{
		self.last_player_query
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub(crate) fn last_history_page(&self) -> Option<Page>
	{
		*self
			.last_history_page
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
	}

	async fn delay(&self)
	{
		if let Some(delay) = self.supplementary_delay {
			tokio::time::sleep(delay).await;
		}
	}
}

impl FaceitApi for FakeFaceit
{
	async fn find_player(
		&self,
		api_key: &ApiKey,
		game: &str,
		steam_id: SteamId,
	) -> faceit::api::Result<Player>
	{
		assert_eq!(api_key.expose(), FACEIT_API_KEY);

		self.player_calls.fetch_add(1, Ordering::SeqCst);
		*self
			.last_player_query
			.lock()
			.unwrap_or_else(PoisonError::into_inner) = Some((game.to_owned(), steam_id));

		self.player.into_result(player_payload())
	}

	async fn player_stats(
		&self,
		api_key: &ApiKey,
		player_id: &PlayerId,
		game: &str,
	) -> faceit::api::Result<PlayerStats>
	{
		assert_eq!(api_key.expose(), FACEIT_API_KEY);
		assert_eq!(player_id.as_str(), PLAYER_ID);

		self.stats_calls.fetch_add(1, Ordering::SeqCst);
		self.delay().await;
		self.stats.into_result(stats_payload(game))
	}

	async fn match_history(
		&self,
		api_key: &ApiKey,
		player_id: &PlayerId,
		_game: &str,
		page: Page,
	) -> faceit::api::Result<MatchHistory>
	{
		assert_eq!(api_key.expose(), FACEIT_API_KEY);
		assert_eq!(player_id.as_str(), PLAYER_ID);

		self.history_calls.fetch_add(1, Ordering::SeqCst);
		*self
			.last_history_page
			.lock()
			.unwrap_or_else(PoisonError::into_inner) = Some(page);

		self.delay().await;
		self.history.into_result(history_payload())
	}
}

pub(crate) fn player_payload() -> serde_json::Value
{
	json!({
		"player_id": PLAYER_ID,
		"nickname": "coolgamer99",
		"avatar": "https://distribution.faceit-cdn.net/images/avatar.jpg",
		"country": "de",
		"games": {
			"cs2": {
				"skill_level": 8,
				"faceit_elo": 1834,
				"game_player_id": "76561198012345678",
				"region": "EU"
			}
		},
		"steam_id_64": "76561198012345678"
	})
}

pub(crate) fn stats_payload(game: &str) -> serde_json::Value
{
	json!({
		"player_id": PLAYER_ID,
		"game_id": game,
		"lifetime": {
			"Matches": "412",
			"Win Rate %": "53",
			"Average K/D Ratio": "1.12",
			"Average Headshots %": "47",
			"Longest Win Streak": "9",
			"Current Win Streak": "2"
		},
		"segments": []
	})
}

pub(crate) fn history_payload() -> serde_json::Value
{
	json!({
		"items": [
			{
				"match_id": "1-0d2c9a4e-8f4b-4c55-9f7e-3b5b2f1c0a11",
				"finished_at": 1_718_000_000,
				"teams": {
					"faction1": { "nickname": "team_coolgamer99" },
					"faction2": { "nickname": "team_someone" }
				},
				"results": { "winner": "faction1", "score": { "faction1": 13, "faction2": 9 } }
			}
		],
		"start": 0,
		"end": 1
	})
}

/// An HTTP client for talking to local servers, ignoring any proxy configured in the environment.
pub(crate) fn http_client() -> reqwest::Client
{
	reqwest::Client::builder()
		.no_proxy()
		.build()
		.unwrap_or_else(|err| panic!("failed to build http client: {err}"))
}

/// A request received by a [`StubServer`].
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest
{
	pub(crate) path: String,
	pub(crate) query: HashMap<String, String>,
	pub(crate) authorization: Option<String>,
}

/// A local HTTP server that answers every request with the same response and remembers what it
/// was asked.
#[derive(Debug)]
pub(crate) struct StubServer
{
	base_url: Url,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer
{
	pub(crate) async fn start(status: http::StatusCode, body: serde_json::Value) -> Self
	{
		let requests = Arc::<Mutex<Vec<RecordedRequest>>>::default();
		let router = Router::new().fallback({
			let requests = Arc::clone(&requests);

			move |uri: http::Uri, headers: http::HeaderMap| {
				let requests = Arc::clone(&requests);
				let body = body.clone();

				async move {
					let query = url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
						.into_owned()
						.collect();

					let authorization = headers
						.get(http::header::AUTHORIZATION)
						.and_then(|value| value.to_str().ok())
						.map(ToOwned::to_owned);

					requests
						.lock()
						.unwrap_or_else(PoisonError::into_inner)
						.push(RecordedRequest { path: uri.path().to_owned(), query, authorization });

					(status, Json(body))
				}
			}
		});

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.unwrap_or_else(|err| panic!("failed to bind stub server: {err}"));

		let addr = listener
			.local_addr()
			.unwrap_or_else(|err| panic!("stub server has no address: {err}"));

		tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, router).await {
				panic!("stub server failed: {err}");
			}
		});

		let base_url = Url::parse(&format!("http://{addr}"))
			.unwrap_or_else(|err| panic!("invalid stub server URL: {err}"));

		Self { base_url, requests }
	}

	/// The server's URL with `path` appended.
	pub(crate) fn url(&self, path: &str) -> Url
	{
		self.base_url
			.join(path)
			.unwrap_or_else(|err| panic!("invalid stub server path `{path}`: {err}"))
	}

	pub(crate) fn requests(&self) -> Vec<RecordedRequest>
	{
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// The one request the server received.
	pub(crate) fn single_request(&self) -> RecordedRequest
	{
		let mut requests = self.requests();

		assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");

		requests.remove(0)
	}
}

/// Renders `error` and all of its sources, in both `Display` and `Debug` form.
pub(crate) fn render_error_chain(error: &(dyn Error + 'static)) -> String
{
	let mut rendered = format!("{error:?}");
	let mut source = Some(error);

	while let Some(error) = source {
		rendered.push('\n');
		rendered.push_str(&error.to_string());
		source = error.source();
	}

	rendered
}
