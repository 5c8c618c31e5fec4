use {
	super::AggregatedProfile,
	crate::{
		ApiKey,
		error::ResultExt,
		faceit::{self, FaceitApi, Page},
	},
	steam_id::SteamId,
};

/// Errors returned by [`Aggregator::aggregate()`].
#[derive(Debug, Display, Error)]
pub enum AggregateError
{
	/// We have no FACEIT API key.
	#[display("FACEIT API key not configured")]
	NotConfigured,

	/// The SteamID is not linked to any FACEIT account.
	#[display("player not found on FACEIT")]
	PlayerNotFound,

	/// The player lookup failed for any other reason.
	#[display("failed to look up FACEIT player")]
	Upstream(faceit::ApiError),
}

impl From<faceit::ApiError> for AggregateError
{
	fn from(error: faceit::ApiError) -> Self
	{
		if error.status() == Some(http::StatusCode::NOT_FOUND) {
			Self::PlayerNotFound
		} else {
			Self::Upstream(error)
		}
	}
}

/// Gathers a FACEIT player's profile, lifetime stats, and recent matches.
#[derive(Debug, Clone)]
pub struct Aggregator<F>
{
	faceit: F,
	api_key: Option<ApiKey>,
	game: Box<str>,
	history_limit: u32,
}

impl<F> Aggregator<F>
{
	pub const DEFAULT_GAME: &str = "cs2";
	pub const DEFAULT_HISTORY_LIMIT: u32 = 5;

	pub fn new(faceit: F, api_key: Option<ApiKey>) -> Self
	{
		Self {
			faceit,
			api_key,
			game: Box::from(Self::DEFAULT_GAME),
			history_limit: Self::DEFAULT_HISTORY_LIMIT,
		}
	}

	/// Sets the game profiles are looked up for.
	pub fn game(self, game: impl Into<Box<str>>) -> Self
	{
		Self { game: game.into(), ..self }
	}

	/// Sets how many recent matches are included in a profile.
	pub fn history_limit(self, history_limit: u32) -> Self
	{
		Self { history_limit, ..self }
	}

	pub fn is_configured(&self) -> bool
	{
		self.api_key.is_some()
	}
}

impl<F: FaceitApi> Aggregator<F>
{
	/// Builds the FACEIT profile of the player linked to `steam_id`.
	///
	/// The player itself is required; stats and match history are fetched concurrently
	/// afterwards and simply left out if fetching them fails.
	#[instrument(skip(self), fields(%steam_id), err(level = "debug"))]
	pub async fn aggregate(&self, steam_id: SteamId) -> Result<AggregatedProfile, AggregateError>
	{
		let api_key = self.api_key.as_ref().ok_or(AggregateError::NotConfigured)?;
		let player = self.faceit.find_player(api_key, &self.game, steam_id).await?;

		let stats = async {
			self.faceit
				.player_stats(api_key, &player.player_id, &self.game)
				.await
				.ok_or_warn("failed to fetch player stats")
		};

		let recent_matches = async {
			self.faceit
				.match_history(api_key, &player.player_id, &self.game, Page::first(self.history_limit))
				.await
				.ok_or_warn("failed to fetch match history")
		};

		let (stats, recent_matches) = tokio::join!(stats, recent_matches);

		Ok(AggregatedProfile { player, stats, recent_matches })
	}
}
