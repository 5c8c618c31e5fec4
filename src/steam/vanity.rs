use {
	crate::{ApiKey, steam},
	serde::Deserialize,
	std::future::Future,
	steam_id::SteamId,
};

const PATH: &str = "ISteamUser/ResolveVanityURL/v1/";

/// Steam's answer to a vanity name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VanityUrlResponse
{
	/// `1` on success; anything else (usually `42`) means there was no match.
	pub success: u32,

	/// The account the vanity name belongs to, if there was a match.
	#[serde(default, rename = "steamid")]
	pub steam_id: Option<SteamId>,

	/// Human-readable explanation Steam includes when there was no match.
	#[serde(default)]
	pub message: Option<Box<str>>,
}

impl VanityUrlResponse
{
	pub const SUCCESS: u32 = 1;

	/// Returns the resolved SteamID, if Steam reported a match.
	pub fn resolved(&self) -> Option<SteamId>
	{
		if self.success == Self::SUCCESS { self.steam_id } else { None }
	}
}

/// Resolves vanity names (the `xyz` in `steamcommunity.com/id/xyz`) to SteamIDs.
pub trait VanityUrlApi: Send + Sync
{
	fn resolve_vanity_url(
		&self,
		api_key: &ApiKey,
		vanity_name: &str,
	) -> impl Future<Output = steam::api::Result<VanityUrlResponse>> + Send;
}

impl VanityUrlApi for steam::api::Client
{
	#[instrument(skip(self, api_key), ret(level = "debug"), err(level = "debug"))]
	async fn resolve_vanity_url(
		&self,
		api_key: &ApiKey,
		vanity_name: &str,
	) -> steam::api::Result<VanityUrlResponse>
	{
		#[derive(serde::Serialize)]
		struct Query<'a>
		{
			#[serde(rename = "key")]
			api_key: &'a str,

			#[serde(rename = "vanityurl")]
			vanity_name: &'a str,
		}

		let request = self
			.as_ref()
			.get(self.url(PATH))
			.query(&Query { api_key: api_key.expose(), vanity_name });

		steam::api::send_request(request).await
	}
}
