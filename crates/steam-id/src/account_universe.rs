/// Steam account universes
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID#Universes_Available_for_Steam_Accounts>
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountUniverse
{
	Individual = 0,
	Public = 1,
	Beta = 2,
	Internal = 3,
	Dev = 4,
	RC = 5,
}

impl AccountUniverse
{
	/// Extracts the universe bits from a raw 64-bit SteamID.
	///
	/// If the bits are invalid, this function will return [`None`].
	pub const fn from_bits(bits: u64) -> Option<Self>
	{
		match bits >> 56 {
			0 => Some(Self::Individual),
			1 => Some(Self::Public),
			2 => Some(Self::Beta),
			3 => Some(Self::Internal),
			4 => Some(Self::Dev),
			5 => Some(Self::RC),
			_ => None,
		}
	}
}
