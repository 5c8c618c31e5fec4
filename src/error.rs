//! Error helpers.

use std::error::Error;

/// Extension trait for <code>[Result]\<T, E></code>
pub trait ResultExt: Sized
{
	type Ok;
	type Err: Error + 'static;

	/// [`Result::inspect_err()`] with the error cast to <code>[&][]dyn [Error]</code>
	///
	/// `tracing` only records errors as structured fields if they are trait objects.
	fn inspect_err_dyn(self, inspect: impl FnOnce(&(dyn Error + 'static))) -> Self;

	/// Logs the error at `WARN` level (with `context` as the message) and turns the result into
	/// an [`Option`].
	///
	/// This is for failures we can live with.
	fn ok_or_warn(self, context: &str) -> Option<Self::Ok>;
}

impl<T, E> ResultExt for Result<T, E>
where
	E: Error + 'static,
{
	type Ok = T;
	type Err = E;

	fn inspect_err_dyn(self, inspect: impl FnOnce(&(dyn Error + 'static))) -> Self
	{
		self.inspect_err(|error| inspect(error))
	}

	fn ok_or_warn(self, context: &str) -> Option<T>
	{
		self.inspect_err_dyn(|error| warn!(error, "{context}")).ok()
	}
}
