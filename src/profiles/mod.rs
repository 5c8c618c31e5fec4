//! FACEIT profile lookups.
//!
//! A lookup happens in two steps:
//!
//!    1. [`Resolver`] turns whatever the user typed into a [`SteamId`].
//!    2. [`Aggregator`] finds the FACEIT player linked to that SteamID and gathers their stats and
//!       recent matches.
//!
//! [`ProfileService`] ties both together and is what the HTTP layer talks to.
//!
//! [`SteamId`]: steam_id::SteamId

use {
	crate::{
		faceit::{self, FaceitApi, MatchHistory, Player, PlayerStats},
		steam::VanityUrlApi,
	},
	serde::Serialize,
	std::sync::Arc,
};

pub use self::{
	aggregator::{AggregateError, Aggregator},
	resolver::{ResolveError, Resolver},
};

mod aggregator;
mod resolver;

/// Everything we know about a FACEIT player.
///
/// Only the player is guaranteed to be present. FACEIT's payloads are passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedProfile
{
	pub player: Player,
	pub stats: Option<PlayerStats>,

	#[serde(rename = "recentMatches")]
	pub recent_matches: Option<MatchHistory>,
}

/// The upstream service a credential belongs to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Service
{
	Steam,

	#[display("FACEIT")]
	Faceit,
}

/// Errors returned by [`ProfileService::lookup()`].
#[derive(Debug, Display, Error)]
pub enum ProfileError
{
	/// An API key required for this lookup is missing.
	#[display("{_0} API key not configured")]
	#[error(ignore)]
	Configuration(Service),

	/// The identifier could not be resolved into a SteamID.
	#[display("could not resolve identifier")]
	Resolution,

	/// The SteamID is not linked to a FACEIT account.
	#[display("player not found on FACEIT")]
	PlayerNotFound,

	/// FACEIT failed to give us the player.
	#[display("FACEIT player lookup failed")]
	Upstream(faceit::ApiError),
}

impl From<ResolveError> for ProfileError
{
	fn from(error: ResolveError) -> Self
	{
		match error {
			ResolveError::NotConfigured => Self::Configuration(Service::Steam),
			ResolveError::Unresolvable => Self::Resolution,
		}
	}
}

impl From<AggregateError> for ProfileError
{
	fn from(error: AggregateError) -> Self
	{
		match error {
			AggregateError::NotConfigured => Self::Configuration(Service::Faceit),
			AggregateError::PlayerNotFound => Self::PlayerNotFound,
			AggregateError::Upstream(error) => Self::Upstream(error),
		}
	}
}

/// Looks up FACEIT profiles by Steam identifier.
#[derive(Debug)]
pub struct ProfileService<S, F>
{
	inner: Arc<Inner<S, F>>,
}

#[derive(Debug)]
struct Inner<S, F>
{
	resolver: Resolver<S>,
	aggregator: Aggregator<F>,
}

impl<S, F> Clone for ProfileService<S, F>
{
	fn clone(&self) -> Self
	{
		Self { inner: Arc::clone(&self.inner) }
	}
}

impl<S, F> ProfileService<S, F>
where
	S: VanityUrlApi,
	F: FaceitApi,
{
	pub fn new(resolver: Resolver<S>, aggregator: Aggregator<F>) -> Self
	{
		Self { inner: Arc::new(Inner { resolver, aggregator }) }
	}

	/// Resolves `identifier` and builds the profile of the FACEIT player linked to it.
	///
	/// Without a FACEIT API key no lookup can ever succeed, so we fail before even talking to
	/// Steam.
	#[instrument(skip(self), err(level = "debug"))]
	pub async fn lookup(&self, identifier: &str) -> Result<AggregatedProfile, ProfileError>
	{
		if !self.inner.aggregator.is_configured() {
			return Err(ProfileError::Configuration(Service::Faceit));
		}

		let steam_id = self.inner.resolver.resolve(identifier).await?;
		let profile = self.inner.aggregator.aggregate(steam_id).await?;

		Ok(profile)
	}
}
