//! Signal handling for graceful shutdown

use std::{future::Future, io};

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{error, info, warn};

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to register signal handler, falling back to Ctrl-C: {}", e);
            wait_for_fallback(tokio::signal::ctrl_c()).await;
            return;
        }
    };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}

/// Resolve when `listener` reports a signal; if it cannot listen at all,
/// never resolve so the server keeps running
async fn wait_for_fallback<F>(listener: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = listener.await {
        error!("Failed to listen for Ctrl-C, shutdown signals are unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn failed_fallback_never_resolves() {
        let listener = async { Err(io::Error::new(io::ErrorKind::Other, "no signal support")) };
        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for_fallback(listener)).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn fallback_resolves_on_signal() {
        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for_fallback(async { Ok(()) })).await;
        assert!(waited.is_ok());
    }
}
