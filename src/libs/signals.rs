//! Shutdown signal handling for the companion loop.

use crate::libs::messages::Message;

/// Resolves once SIGTERM or SIGINT (Ctrl+C on Windows) arrives.
///
/// If the handlers cannot be installed the future never resolves, so the
/// companion keeps running and relies on its other stop conditions.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use crate::{msg_error, msg_info};
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(_) => {
                msg_error!(Message::FailedToCreateSigtermHandler);
                return std::future::pending().await;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(sigint) => sigint,
            Err(_) => {
                msg_error!(Message::FailedToCreateSigintHandler);
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                msg_info!(Message::ReceivedSigterm);
            }
            _ = sigint.recv() => {
                msg_info!(Message::ReceivedSigint);
            }
        }
    }

    #[cfg(windows)]
    {
        use crate::{msg_error, msg_info};

        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                msg_info!(Message::ReceivedCtrlC);
            }
            Err(e) => {
                msg_error!(Message::CtrlCListenFailed(e.to_string()));
                std::future::pending::<()>().await;
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        use crate::msg_warning;

        msg_warning!(Message::SignalHandlingNotSupported);
        std::future::pending::<()>().await;
    }
}
