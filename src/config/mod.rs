//! Runtime configuration.
//!
//! Configuration is read from a TOML file, after which a handful of environment variables can
//! override individual values. Every field has a default, so an empty (or missing) file is a valid
//! configuration; it just won't be able to talk to any upstream APIs.

#![allow(missing_copy_implementations, reason = "configs won't be copied around")]

mod faceit;
mod http;
mod steam;
mod tracing;

use {
	serde::Deserialize,
	std::{env, fs, io, path::Path},
};

pub use self::{
	faceit::FaceitConfig,
	http::{CorsConfig, HttpConfig},
	steam::SteamConfig,
	tracing::{FilesConfig, StderrConfig, TracingConfig},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub http: HttpConfig,
	pub tracing: TracingConfig,
	pub steam: SteamConfig,
	pub faceit: FaceitConfig,
}

/// Errors that can occur when loading a [`Config`].
#[derive(Debug, Display, Error)]
pub enum LoadConfigError
{
	#[display("failed to read configuration file: {_0}")]
	Read(io::Error),

	#[display("failed to parse configuration file: {_0}")]
	Parse(toml::de::Error),

	#[display("invalid value for `{name}`: {reason}")]
	InvalidEnvVar
	{
		name: &'static str,
		reason: String,
	},
}

impl Config
{
	/// Environment variable holding the Steam Web API key.
	pub const STEAM_API_KEY_VAR: &str = "STEAM_API_KEY";

	/// Environment variable holding the FACEIT Data API key.
	pub const FACEIT_API_KEY_VAR: &str = "FACEIT_API_KEY";

	/// Environment variable overriding the HTTP port.
	pub const PORT_VAR: &str = "PORT";

	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadConfigError>
	{
		let file = fs::read_to_string(path.as_ref()).map_err(LoadConfigError::Read)?;

		toml::from_str(&file).map_err(LoadConfigError::Parse)
	}

	/// Applies overrides from the process environment.
	pub fn override_from_env(&mut self) -> Result<(), LoadConfigError>
	{
		self.override_with(|name| env::var(name).ok())
	}

	/// Applies overrides from an arbitrary source of variables.
	///
	/// Credentials are taken as-is; whether they are usable is decided when they are turned into
	/// [`ApiKey`]s.
	///
	/// [`ApiKey`]: crate::ApiKey
	pub fn override_with(
		&mut self,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<(), LoadConfigError>
	{
		if let Some(api_key) = lookup(Self::STEAM_API_KEY_VAR) {
			self.steam.api_key = Some(api_key.into_boxed_str());
		}

		if let Some(api_key) = lookup(Self::FACEIT_API_KEY_VAR) {
			self.faceit.api_key = Some(api_key.into_boxed_str());
		}

		if let Some(port) = lookup(Self::PORT_VAR) {
			self.http.port = port.parse::<u16>().map_err(|err| LoadConfigError::InvalidEnvVar {
				name: Self::PORT_VAR,
				reason: err.to_string(),
			})?;
		}

		Ok(())
	}
}
