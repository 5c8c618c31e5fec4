use {crate::ApiKey, serde::Deserialize, url::Url};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SteamConfig
{
	/// Steam Web API key, used to resolve vanity names.
	#[debug("{:?}", api_key.as_ref().map(|_| "<redacted>"))]
	pub api_key: Option<Box<str>>,

	/// Base URL of the Steam Web API.
	#[debug("{:?}", api_url.as_str())]
	#[serde(default = "default_api_url")]
	pub api_url: Url,
}

impl SteamConfig
{
	/// The value example configurations ship with.
	pub const API_KEY_PLACEHOLDER: &str = "your_steam_api_key_here";

	/// Returns the configured API key, if it is usable.
	pub fn api_key(&self) -> Option<ApiKey>
	{
		ApiKey::from_config(self.api_key.as_deref(), Self::API_KEY_PLACEHOLDER)
	}
}

impl Default for SteamConfig
{
	fn default() -> Self
	{
		Self { api_key: None, api_url: default_api_url() }
	}
}

fn default_api_url() -> Url
{
	Url::parse("https://api.steampowered.com")
		.unwrap_or_else(|err| panic!("failed to parse hard-coded URL: {err}"))
}
