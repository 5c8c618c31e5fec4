//! The HTTP API.
//!
//! This is a thin layer over [`ProfileService`]; all it does is map paths to lookups and errors to
//! status codes.

use {
	crate::{config::HttpConfig, faceit::FaceitApi, profiles::ProfileService, steam::VanityUrlApi},
	axum::{Router, routing},
};

mod handlers;
mod middleware;
mod response;

/// Builds the router serving the API.
pub fn router<S, F>(
	profiles: ProfileService<S, F>,
	http_config: &HttpConfig,
	include_http_headers: bool,
) -> Router
where
	S: VanityUrlApi + 'static,
	F: FaceitApi + 'static,
{
	Router::new()
		.route("/api/faceit-profile/{identifier}", routing::get(handlers::faceit_profile::<S, F>))
		.route("/api/search-by-username/{username}", routing::get(handlers::search_by_username))
		.route("/health", routing::get(handlers::health))
		.with_state(profiles)
		.layer(middleware::cors::layer(http_config.cors.allowed_origins()))
		.layer(middleware::trace::layer(include_http_headers))
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
}
