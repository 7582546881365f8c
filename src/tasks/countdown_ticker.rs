//! Countdown ticker background task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::{
    countdown::HighlightCycle,
    state::{AppState, CountdownSnapshot},
};

/// Period between two countdown refreshes
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owner of a running ticker.
///
/// `stop` ends the task cleanly; dropping the handle aborts it.
#[derive(Debug)]
pub struct TickerHandle {
    shutdown_tx: watch::Sender<bool>,
    join: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Signal the ticker to stop and wait for it to finish
    pub async fn stop(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(join) = self.join.take() {
            if let Err(e) = join.await {
                error!("Countdown ticker ended abnormally: {}", e);
            }
        }
    }

    /// Check if the task has already returned
    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

/// Start the ticker that refreshes the countdown every `period`
pub fn spawn_countdown_ticker(state: Arc<AppState>, period: Duration) -> TickerHandle {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let join = tokio::spawn(countdown_ticker_task(state, period, shutdown_rx));
    TickerHandle {
        shutdown_tx,
        join: Some(join),
    }
}

/// Recompute the countdown from the live clock on every tick until the
/// target is reached or shutdown is requested
async fn countdown_ticker_task(
    state: Arc<AppState>,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    info!("Starting countdown ticker for {}", state.target);

    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut highlight = HighlightCycle::new();
    let mut ticks: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                ticks += 1;
                let snapshot = CountdownSnapshot::compute(
                    state.target,
                    state.clock.now(),
                    highlight.color(),
                    ticks,
                );
                highlight.advance();

                let expired = snapshot.is_expired();
                debug!("Tick {}: {}", ticks, snapshot.remaining.display());
                state.publish_countdown(snapshot);

                if expired {
                    info!("Target instant reached, countdown ticker stopping");
                    break;
                }
            }

            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    info!("Countdown ticker cancelled");
                    break;
                }
            }
        }
    }
}
