//! 64-bit [SteamID]s
//!
//! Users can type a lot of things into a search box. This crate only knows about two of them: the
//! canonical 17-digit SteamID64 of an individual account, and raw 64-bit IDs as returned by
//! Steam's own APIs. Everything else (vanity names, profile URLs, Steam2IDs) has to be resolved
//! by someone else.
//!
//! [SteamID]: https://developer.valvesoftware.com/wiki/SteamID

#[macro_use(Debug, Display, From, Error)]
extern crate derive_more as _;

pub use self::{
	account_type::AccountType,
	account_universe::AccountUniverse,
	error::{InvalidSteamId64, ParseSteamIdError},
};
use std::{fmt, str::FromStr};

mod account_type;
mod account_universe;
mod error;

#[cfg(feature = "serde")]
mod serde_impls;

/// A [SteamID] in its 64-bit representation
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId
{
	/// The leading digits every canonical SteamID64 starts with.
	///
	/// Together with [`CANONICAL_LEN`] this pins down the range of individual accounts in the
	/// public universe that is currently handed out.
	///
	/// [`CANONICAL_LEN`]: SteamId::CANONICAL_LEN
	pub const CANONICAL_PREFIX: &str = "76561198";

	/// The number of decimal digits in a canonical SteamID64.
	pub const CANONICAL_LEN: usize = 17;

	/// Returns the 64-bit representation of this [`SteamId`].
	pub const fn as_u64(&self) -> u64
	{
		self.0
	}

	/// Returns the universe of the account this SteamID belongs to.
	pub const fn account_universe(&self) -> AccountUniverse
	{
		match AccountUniverse::from_bits(self.0) {
			Some(universe) => universe,
			None => panic!("invalid universe bits in SteamID"),
		}
	}

	/// Returns the type of account this SteamID belongs to.
	pub const fn account_type(&self) -> AccountType
	{
		match AccountType::from_bits(self.0) {
			Some(account_type) => account_type,
			None => panic!("invalid account type bits in SteamID"),
		}
	}

	/// Creates a [`SteamId`] from its raw 64-bit representation.
	pub const fn from_u64(value: u64) -> Result<Self, InvalidSteamId64>
	{
		if AccountUniverse::from_bits(value).is_none() {
			return Err(InvalidSteamId64::InvalidUniverse);
		}

		if AccountType::from_bits(value).is_none() {
			return Err(InvalidSteamId64::InvalidAccountType);
		}

		Ok(Self(value))
	}

	/// Checks whether `input` has the exact shape of a canonical SteamID64.
	///
	/// That is [`CANONICAL_PREFIX`] followed by ASCII digits, [`CANONICAL_LEN`] characters in
	/// total. No whitespace, signs, or other leniency.
	///
	/// [`CANONICAL_PREFIX`]: SteamId::CANONICAL_PREFIX
	/// [`CANONICAL_LEN`]: SteamId::CANONICAL_LEN
	pub fn is_canonical(input: &str) -> bool
	{
		input.len() == Self::CANONICAL_LEN
			&& input.starts_with(Self::CANONICAL_PREFIX)
			&& input.bytes().all(|byte| byte.is_ascii_digit())
	}

	/// Parses `input` if, and only if, it is a canonical SteamID64.
	///
	/// Inputs that don't have the canonical shape yield [`None`] rather than an error, as they
	/// are usually something else entirely (e.g. a vanity name) and not a broken ID.
	pub fn parse_canonical(input: &str) -> Option<Self>
	{
		if !Self::is_canonical(input) {
			return None;
		}

		input
			.parse::<u64>()
			.ok()
			.and_then(|value| Self::from_u64(value).ok())
	}
}

impl fmt::Display for SteamId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, fmt)
	}
}

impl FromStr for SteamId
{
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		let value = value.parse::<u64>()?;

		Ok(Self::from_u64(value)?)
	}
}
