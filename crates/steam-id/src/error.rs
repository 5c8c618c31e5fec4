use std::num::ParseIntError;

/// Error type for conversions from [`u64`] to [`SteamId`]
///
/// [`SteamId`]: crate::SteamId
#[allow(missing_copy_implementations)]
#[derive(Debug, Display, Error)]
#[display("invalid SteamID64: {_variant}")]
pub enum InvalidSteamId64
{
	/// The universe bits were invalid.
	#[display("invalid universe bits")]
	InvalidUniverse,

	/// The account type bits were invalid.
	#[display("invalid account type bits")]
	InvalidAccountType,
}

/// Error type for conversions from strings to [`SteamId`]
///
/// [`SteamId`]: crate::SteamId
#[derive(Debug, Display, Error, From)]
#[display("failed to parse SteamID: {_variant}")]
pub enum ParseSteamIdError
{
	/// The input was not a decimal 64-bit integer.
	#[display("not a number: {_0}")]
	NotANumber(ParseIntError),

	/// The input was a 64-bit integer, but not a valid SteamID.
	#[display("{_0}")]
	InvalidSteamId64(InvalidSteamId64),
}
