//! FACEIT profile lookups by Steam identifier.
//!
//! A request names a Steam account, either by its SteamID64 or by its vanity name. This crate
//! resolves it to a SteamID64 via Steam's Web API, finds the linked FACEIT player, and gathers
//! their lifetime statistics and most recent matches into a single [`AggregatedProfile`].
//!
//! The core lives in [`profiles`] and does not know about HTTP; [`http`] is a thin axum facade
//! on top of it, and [`run()`] wires everything together.
//!
//! [`AggregatedProfile`]: profiles::AggregatedProfile

#[macro_use]
extern crate tracing as _;

#[macro_use(Debug, Display, From, Error)]
extern crate derive_more as _;

use std::io;

#[cfg(test)]
mod testing;

mod signal;

pub mod api_key;
pub mod config;
pub mod error;
pub mod faceit;
pub mod http;
pub mod panic_hook;
pub mod profiles;
pub mod steam;

pub use self::{api_key::ApiKey, config::Config};
use self::profiles::{Aggregator, ProfileService, Resolver};

/// Errors returned by [`run()`].
#[derive(Debug, Display, Error, From)]
pub enum RunError
{
	/// We failed to build the HTTP client used for upstream requests.
	#[display("failed to build http client: {_0}")]
	HttpClient(reqwest::Error),

	/// Binding the TCP listener or serving connections failed.
	#[display("{_0}")]
	Io(io::Error),
}

/// Runs the HTTP server until a shutdown signal is received.
pub async fn run(config: Config) -> Result<(), RunError>
{
	let http_client = reqwest::Client::builder()
		.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
		.build()?;

	let steam_client = steam::api::Client::new(http_client.clone(), config.steam.api_url.clone());
	let faceit_client = faceit::api::Client::new(http_client, config.faceit.api_url.clone());

	let resolver = Resolver::new(steam_client, config.steam.api_key());
	let aggregator = Aggregator::new(faceit_client, config.faceit.api_key())
		.game(&*config.faceit.game)
		.history_limit(config.faceit.history_limit);

	if !resolver.is_configured() {
		warn!("no Steam API key configured; only SteamID64s can be looked up");
	}

	if !aggregator.is_configured() {
		warn!("no FACEIT API key configured; every lookup will fail");
	}

	let profiles = ProfileService::new(resolver, aggregator);
	let service = http::router(profiles, &config.http, config.tracing.include_http_headers);

	let tcp_listener = tokio::net::TcpListener::bind(config.http.socket_addr()).await?;
	let addr = tcp_listener.local_addr()?;

	info!(%addr, "listening for http requests");

	axum::serve(tcp_listener, service)
		.with_graceful_shutdown(signal::shutdown())
		.await?;

	info!("server shut down");

	Ok(())
}
