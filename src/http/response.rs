use {
	crate::profiles::{ProfileError, Service},
	axum::{
		Json,
		response::{IntoResponse, Response},
	},
	serde::Serialize,
	std::error::Error,
};

pub(crate) type HandlerResult<T> = Result<T, HandlerError>;

/// Shown when FACEIT never gave us a status code to report.
const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";

/// Errors returned by HTTP handlers.
///
/// Every error is rendered as `{ "error": "<message>" }`.
#[derive(Debug)]
pub(crate) enum HandlerError
{
	Profile(ProfileError),
	UsernameSearchUnsupported,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a>
{
	error: &'a str,
}

impl HandlerError
{
	fn status(&self) -> http::StatusCode
	{
		match *self {
			Self::Profile(ProfileError::Configuration(_)) => http::StatusCode::INTERNAL_SERVER_ERROR,
			Self::Profile(ProfileError::Resolution | ProfileError::PlayerNotFound) => {
				http::StatusCode::NOT_FOUND
			},
			Self::Profile(ProfileError::Upstream(ref error)) => {
				error.status().unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
			},
			Self::UsernameSearchUnsupported => http::StatusCode::BAD_REQUEST,
		}
	}

	fn message(&self) -> String
	{
		match *self {
			Self::Profile(ProfileError::Configuration(Service::Steam)) => {
				String::from("Steam API key not configured. Cannot resolve custom URLs.")
			},
			Self::Profile(ProfileError::Configuration(Service::Faceit)) => String::from(
				"FACEIT API key not configured. Please add FACEIT_API_KEY to your .env file.",
			),
			Self::Profile(ProfileError::Resolution) => String::from(
				"Could not resolve Steam URL. The profile may be private or the custom URL is \
				 incorrect.",
			),
			Self::Profile(ProfileError::PlayerNotFound) => String::from(
				"Player not found on FACEIT. Make sure the Steam account is public and has a \
				 FACEIT profile.",
			),
			Self::Profile(ProfileError::Upstream(ref error)) if error.status().is_none() => {
				String::from(UNEXPECTED_ERROR)
			},
			Self::Profile(ProfileError::Upstream(ref error)) => {
				format!("FACEIT API error: {}", error.message().unwrap_or("Failed to fetch data"))
			},
			Self::UsernameSearchUnsupported => String::from(
				"Please use Steam ID instead of username. You can find your Steam ID at \
				 steamidfinder.com",
			),
		}
	}
}

impl From<ProfileError> for HandlerError
{
	fn from(error: ProfileError) -> Self
	{
		match error {
			ProfileError::Configuration(_) => {
				error!(error = &error as &dyn Error, "refusing lookup");
			},
			ProfileError::Upstream(ref api_error) => {
				warn!(error = api_error as &dyn Error, "FACEIT player lookup failed");
			},
			ProfileError::Resolution | ProfileError::PlayerNotFound => {
				debug!(error = &error as &dyn Error);
			},
		}

		Self::Profile(error)
	}
}

impl IntoResponse for HandlerError
{
	fn into_response(self) -> Response
	{
		let message = self.message();

		(self.status(), Json(ErrorBody { error: &message })).into_response()
	}
}
