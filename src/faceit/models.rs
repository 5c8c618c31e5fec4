//! The parts of FACEIT's payloads we care about.
//!
//! Every type keeps the fields it does not name in an `extra` map, so serializing a value
//! reproduces what FACEIT sent.

use {
	serde::{Deserialize, Serialize},
	serde_json::{Map, Value},
	std::collections::BTreeMap,
};

/// A FACEIT player ID (a UUID, but we never need to look inside it).
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[debug("PlayerId({_0:?})")]
#[serde(transparent)]
pub struct PlayerId(Box<str>);

impl PlayerId
{
	pub fn as_str(&self) -> &str
	{
		&self.0
	}
}

impl From<&str> for PlayerId
{
	fn from(value: &str) -> Self
	{
		Self(Box::from(value))
	}
}

/// A FACEIT player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player
{
	pub player_id: PlayerId,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nickname: Option<Box<str>>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<Box<str>>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub country: Option<Box<str>>,

	/// Per-game profiles, keyed by game (e.g. `cs2`).
	#[serde(default)]
	pub games: BTreeMap<String, GameProfile>,

	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Player
{
	/// Returns the player's profile for `game`, if they have one.
	pub fn game(&self, game: &str) -> Option<&GameProfile>
	{
		self.games.get(game)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProfile
{
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub skill_level: Option<u8>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub faceit_elo: Option<u32>,

	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A player's statistics for a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats
{
	/// Lifetime aggregates. FACEIT reports these as strings keyed by display names
	/// (`"Matches"`, `"Win Rate %"`, ...), so we leave them untyped.
	#[serde(default)]
	pub lifetime: Map<String, Value>,

	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A page of match history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHistory
{
	#[serde(default)]
	pub items: Vec<MatchSummary>,

	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary
{
	pub match_id: Box<str>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub finished_at: Option<i64>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub results: Option<MatchResults>,

	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResults
{
	/// `faction1` or `faction2`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub winner: Option<Box<str>>,

	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Which slice of a paginated collection to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page
{
	pub offset: u32,
	pub limit: u32,
}

impl Page
{
	/// The first `limit` entries.
	pub const fn first(limit: u32) -> Self
	{
		Self { offset: 0, limit }
	}
}
