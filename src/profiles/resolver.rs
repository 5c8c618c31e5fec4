use {
	crate::{ApiKey, error::ResultExt, steam::VanityUrlApi},
	steam_id::SteamId,
};

/// Errors returned by [`Resolver::resolve()`].
#[derive(Debug, Display, Error)]
pub enum ResolveError
{
	/// The identifier is a vanity name, but we have no Steam API key to look it up with.
	#[display("identifier resolution unavailable")]
	NotConfigured,

	/// Steam did not give us a SteamID for the vanity name.
	///
	/// This covers unknown names and private profiles as well as Steam being unreachable; the
	/// actual cause is only logged.
	#[display("could not resolve identifier")]
	Unresolvable,
}

/// Turns user-supplied identifiers into [`SteamId`]s.
#[derive(Debug, Clone)]
pub struct Resolver<S>
{
	steam: S,
	api_key: Option<ApiKey>,
}

impl<S> Resolver<S>
{
	pub fn new(steam: S, api_key: Option<ApiKey>) -> Self
	{
		Self { steam, api_key }
	}

	/// Whether vanity names can be resolved.
	pub fn is_configured(&self) -> bool
	{
		self.api_key.is_some()
	}
}

impl<S: VanityUrlApi> Resolver<S>
{
	/// Resolves `identifier` into a [`SteamId`].
	///
	/// Canonical SteamID64s are returned as-is. Anything else is treated as a vanity name and
	/// looked up exactly once.
	#[instrument(skip(self), err(level = "debug"))]
	pub async fn resolve(&self, identifier: &str) -> Result<SteamId, ResolveError>
	{
		if let Some(steam_id) = SteamId::parse_canonical(identifier) {
			return Ok(steam_id);
		}

		let api_key = self.api_key.as_ref().ok_or(ResolveError::NotConfigured)?;
		let response = self
			.steam
			.resolve_vanity_url(api_key, identifier)
			.await
			.inspect_err_dyn(|error| warn!(error, "failed to resolve vanity name"))
			.map_err(|_| ResolveError::Unresolvable)?;

		response.resolved().ok_or_else(|| {
			debug!(success = response.success, message = ?response.message, "no match for vanity name");
			ResolveError::Unresolvable
		})
	}
}
