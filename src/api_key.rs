//! Credentials for upstream APIs.

use std::{fmt, sync::Arc};

/// An API key for one of the upstream services.
///
/// The key itself never shows up in [`Debug`] output, so it is safe to pass around in
/// instrumented functions.
///
/// [`Debug`]: fmt::Debug
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Arc<str>);

impl ApiKey
{
	/// Creates a new [`ApiKey`].
	pub fn new(value: impl Into<Arc<str>>) -> Self
	{
		Self(value.into())
	}

	/// Turns a raw configuration value into an [`ApiKey`], if it is actually usable.
	///
	/// Missing and empty values count as "not configured", and so does `placeholder`, which is
	/// what example configuration files ship with.
	pub fn from_config(value: Option<&str>, placeholder: &str) -> Option<Self>
	{
		value
			.filter(|value| !value.is_empty() && *value != placeholder)
			.map(Self::new)
	}

	/// Returns the raw key, for putting it on the wire.
	pub fn expose(&self) -> &str
	{
		&self.0
	}
}

impl fmt::Debug for ApiKey
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.write_str("ApiKey(<redacted>)")
	}
}
