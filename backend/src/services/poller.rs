//! Polling actor and the latest-snapshot store
//!
//! A single task runs one cycle at start-up, then on every interval tick or
//! manual refresh. A refresh that arrives while a cycle is in flight cancels
//! that cycle and starts a new one immediately. Readers always see the last
//! fully assembled snapshot.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use shared::{ConnectionStatus, DashboardSnapshot};
use tokio::sync::{Notify, RwLock};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{run_cycle, Services};

/// Holds the latest snapshot; replaced wholesale, never mutated in place
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Arc<DashboardSnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Arc<DashboardSnapshot> {
        self.current.read().await.clone()
    }

    pub async fn publish(&self, snapshot: DashboardSnapshot) {
        *self.current.write().await = Arc::new(snapshot);
    }

    /// Keep the old data visible but flag that a cycle is in flight
    pub async fn mark_reconnecting(&self) {
        let mut current = self.current.write().await;
        if current.status != ConnectionStatus::Reconnecting {
            *current = Arc::new(current.with_status(ConnectionStatus::Reconnecting));
        }
    }
}

/// Polling actor
pub struct Poller {
    services: Services,
    store: Arc<SnapshotStore>,
    refresh: Arc<Notify>,
    interval: Duration,
}

impl Poller {
    pub fn new(
        services: Services,
        store: Arc<SnapshotStore>,
        refresh: Arc<Notify>,
        interval: Duration,
    ) -> Self {
        Self {
            services,
            store,
            refresh,
            interval,
        }
    }

    /// Run until `shutdown` is cancelled
    pub async fn run(self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval_secs = self.interval.as_secs(), "Poller started");

        let mut restart = false;
        loop {
            if !restart {
                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => break,
                    _ = self.refresh.notified() => debug!("Manual refresh requested"),
                    _ = ticker.tick() => {}
                }
            }
            restart = false;

            let cycle = shutdown.child_token();
            self.store.mark_reconnecting().await;

            let run = run_cycle(&self.services, Utc::now(), cycle.clone());
            tokio::pin!(run);

            let snapshot = tokio::select! {
                snapshot = &mut run => snapshot,
                _ = self.refresh.notified() => {
                    debug!("Refresh requested mid-cycle, restarting");
                    cycle.cancel();
                    // Let the cycle abort its tasks; whatever it returns is stale
                    let _ = run.await;
                    restart = true;
                    None
                }
            };

            if let Some(snapshot) = snapshot {
                self.store.publish(snapshot).await;
            }

            if shutdown.is_cancelled() {
                break;
            }
            if restart {
                ticker.reset();
            }
        }

        info!("Poller stopped");
    }
}
