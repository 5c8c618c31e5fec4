//! Custom global panic hook to log runtime panics.
//!
//! See [`std::panic::set_hook()`] for more details.

use std::{backtrace::Backtrace, panic};

/// Installs the custom global panic hook.
///
/// The previous hook will be invoked after this custom one is done.
pub fn install()
{
	let old_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		error_span!(target: "faceit_profile::runtime", "panic_hook").in_scope(|| {
			let backtrace = Backtrace::force_capture();

			error! {
				target: "faceit_profile::runtime",
				"\n{info}\n---\nbacktrace:\n{backtrace}",
			};
		});

		old_hook(info)
	}));
}
