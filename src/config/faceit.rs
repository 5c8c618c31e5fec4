use {crate::ApiKey, serde::Deserialize, url::Url};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FaceitConfig
{
	/// FACEIT Data API key (server-side).
	#[debug("{:?}", api_key.as_ref().map(|_| "<redacted>"))]
	pub api_key: Option<Box<str>>,

	/// Base URL of the FACEIT Data API, including the version segment.
	#[debug("{:?}", api_url.as_str())]
	#[serde(default = "default_api_url")]
	pub api_url: Url,

	/// The FACEIT game tag profiles are looked up for.
	#[serde(default = "default_game")]
	pub game: Box<str>,

	/// How many recent matches to include in a profile.
	#[serde(default = "default_history_limit")]
	pub history_limit: u32,
}

impl FaceitConfig
{
	/// The value example configurations ship with.
	pub const API_KEY_PLACEHOLDER: &str = "your_faceit_api_key_here";

	/// Returns the configured API key, if it is usable.
	pub fn api_key(&self) -> Option<ApiKey>
	{
		ApiKey::from_config(self.api_key.as_deref(), Self::API_KEY_PLACEHOLDER)
	}
}

impl Default for FaceitConfig
{
	fn default() -> Self
	{
		Self {
			api_key: None,
			api_url: default_api_url(),
			game: default_game(),
			history_limit: default_history_limit(),
		}
	}
}

fn default_api_url() -> Url
{
	Url::parse("https://open.faceit.com/data/v4")
		.unwrap_or_else(|err| panic!("failed to parse hard-coded URL: {err}"))
}

fn default_game() -> Box<str>
{
	Box::from("cs2")
}

fn default_history_limit() -> u32
{
	5
}
