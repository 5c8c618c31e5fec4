use {crate::error::ResultExt, tokio::signal::ctrl_c};

/// Resolves once the OS asks us to shut down.
pub(crate) async fn shutdown()
{
	tokio::select! {
		ctrl_c_result = ctrl_c() => {
			if ctrl_c_result
				.inspect_err_dyn(|error| error!(error, "failed listening for SIGINT"))
				.is_ok()
			{
				debug!("received SIGINT");
			} else {
				sigterm().await;
			}
		},

		() = sigterm() => {},
	}
}

#[cfg(unix)]
async fn sigterm()
{
	use tokio::signal::unix::{SignalKind, signal};

	match signal(SignalKind::terminate()) {
		Ok(mut signal) => match signal.recv().await {
			Some(()) => debug!("received SIGTERM"),
			None => warn!("cannot receive more SIGTERM signals"),
		},
		Err(ref error) => {
			error!(error = error as &dyn std::error::Error, "failed listening for SIGTERM");
		},
	}
}

#[cfg(not(unix))]
async fn sigterm()
{
	std::future::pending().await
}
