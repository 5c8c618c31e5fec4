use {
	crate::SteamId,
	serde::{
		de::{self, Deserialize, Deserializer},
		ser::{Serialize, Serializer},
	},
	std::fmt,
};

/// SteamIDs are serialized as stringified SteamID64s.
///
/// JavaScript clients cannot represent every `u64` as a number, and Steam's own API returns them
/// as strings as well.
impl Serialize for SteamId
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_u64_stringified(serializer)
	}
}

impl<'de> Deserialize<'de> for SteamId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct SteamId64Visitor;

		impl de::Visitor<'_> for SteamId64Visitor
		{
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
			{
				fmt.write_str("a SteamID64, either as an integer or a string")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				SteamId::from_u64(value).map_err(E::custom)
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				value.parse::<SteamId>().map_err(E::custom)
			}
		}

		deserializer.deserialize_any(SteamId64Visitor)
	}
}

impl SteamId
{
	/// Serializes using a stringified version of the SteamID64 format.
	pub fn serialize_u64_stringified<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}
