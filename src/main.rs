//! The `faceit-profile` server.

use {
	clap::Parser,
	color_eyre::eyre::{self, WrapErr},
	faceit_profile::{Config, config::LoadConfigError},
	std::{
		io,
		path::{Path, PathBuf},
	},
};

mod telemetry;

/// Used if no `--config` is passed; a missing file means "use the defaults".
const DEFAULT_CONFIG_PATH: &str = "faceit-profile.toml";

/// Look up FACEIT profiles by Steam identifier.
#[derive(Debug, Parser)]
#[command(version)]
struct Args
{
	/// Path to the configuration file.
	#[arg(long, env = "FACEIT_PROFILE_CONFIG", name = "CONFIG_FILE")]
	config: Option<PathBuf>,

	/// Use a custom `.env` file.
	#[arg(long, name = "ENV_FILE")]
	env_file: Option<PathBuf>,
}

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	let args = Args::parse();

	load_env_file(args.env_file.as_deref())?;

	let mut config = load_config(args.config.as_deref())?;

	config
		.override_from_env()
		.wrap_err("failed to apply environment overrides")?;

	let _guard = telemetry::init(&config.tracing).wrap_err("failed to initialize tracing")?;

	faceit_profile::panic_hook::install();

	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()
		.wrap_err("failed to build tokio runtime")?
		.block_on(faceit_profile::run(config))
		.wrap_err("failed to run server")
}

fn load_env_file(path: Option<&Path>) -> eyre::Result<()>
{
	if let Some(path) = path {
		dotenvy::from_path(path).wrap_err_with(|| format!("failed to load {path:?}"))?;
	} else if let Err(error) = dotenvy::dotenv() {
		// no `.env` is fine; the real environment might have everything we need
		if !error.not_found() {
			return Err(error).wrap_err("failed to load `.env`");
		}
	}

	Ok(())
}

fn load_config(path: Option<&Path>) -> eyre::Result<Config>
{
	if let Some(path) = path {
		return Config::load_from_file(path)
			.wrap_err_with(|| format!("failed to load configuration from {path:?}"));
	}

	match Config::load_from_file(DEFAULT_CONFIG_PATH) {
		Ok(config) => Ok(config),
		Err(LoadConfigError::Read(error)) if error.kind() == io::ErrorKind::NotFound => {
			Ok(Config::default())
		},
		Err(error) => Err(error)
			.wrap_err_with(|| format!("failed to load configuration from {DEFAULT_CONFIG_PATH:?}")),
	}
}
