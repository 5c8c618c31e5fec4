use {
	super::response::{HandlerError, HandlerResult},
	crate::{
		faceit::FaceitApi,
		profiles::{AggregatedProfile, ProfileService},
		steam::VanityUrlApi,
	},
	axum::{
		Json,
		extract::{Path, State},
	},
};

/// `GET /api/faceit-profile/{identifier}`
///
/// `identifier` is either a SteamID64 or a vanity name.
#[instrument(skip(profiles), err(Debug, level = "debug"))]
pub(crate) async fn faceit_profile<S, F>(
	State(profiles): State<ProfileService<S, F>>,
	Path(identifier): Path<String>,
) -> HandlerResult<Json<AggregatedProfile>>
where
	S: VanityUrlApi,
	F: FaceitApi,
{
	let profile = profiles.lookup(&identifier).await?;

	Ok(Json(profile))
}

/// `GET /api/search-by-username/{username}`
///
/// FACEIT usernames can't be searched by; callers have to use a Steam identifier instead.
#[instrument(err(Debug, level = "debug"))]
pub(crate) async fn search_by_username(Path(username): Path<String>) -> HandlerResult<()>
{
	Err(HandlerError::UsernameSearchUnsupported)
}

#[instrument(level = "trace")]
pub(crate) async fn health() -> &'static str
{
	"ok"
}
