//! Background sweep of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;

use pressgate_core::config::session::SessionConfig;

use super::registry::SessionRegistry;

/// Periodically drops expired sessions from the registry.
///
/// The sweep interval comes from configuration (default 1000 ms). The task
/// is scoped to server lifetime and exits when the shutdown channel fires.
#[derive(Debug)]
pub struct SessionWatcher {
    registry: Arc<SessionRegistry>,
    interval: Duration,
}

impl SessionWatcher {
    /// Build a watcher from session configuration.
    pub fn new(registry: Arc<SessionRegistry>, config: &SessionConfig) -> Self {
        Self {
            registry,
            interval: Duration::from_millis(config.sweep_interval_ms.max(1)),
        }
    }

    /// Run the sweep loop until shutdown is signalled.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = self.registry.remove_expired(Utc::now());
                    if removed > 0 {
                        tracing::debug!(removed, "Swept expired sessions");
                    }
                }
                _ = shutdown.changed() => {
                    tracing::debug!("Session watcher stopping");
                    return;
                }
            }
        }
    }
}
