//! In-memory wizard session registry.
//!
//! Booking drafts live only in process memory for the lifetime of one
//! wizard session: they are created on form mount, discarded on abandon or
//! successful submit, and never written to the database mid-flow. A
//! background sweeper prunes sessions idle longer than the configured TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use mashwar_core::wizard::WizardState;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// How often the idle-session sweeper runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct SessionEntry {
    state: WizardState,
    last_activity: Instant,
}

/// Registry of active wizard sessions, keyed by session id.
pub struct WizardSessions {
    ttl: Duration,
    inner: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl WizardSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Create a fresh session at step 0, returning its id and initial
    /// state.
    pub async fn create(&self) -> (Uuid, WizardState) {
        let id = Uuid::new_v4();
        let state = WizardState::new();
        self.inner.write().await.insert(
            id,
            SessionEntry {
                state: state.clone(),
                last_activity: Instant::now(),
            },
        );
        (id, state)
    }

    /// Run a closure against a session's state, refreshing its activity
    /// timestamp. Returns `None` for unknown sessions.
    pub async fn with<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardState) -> R,
    ) -> Option<R> {
        let mut guard = self.inner.write().await;
        let entry = guard.get_mut(&id)?;
        entry.last_activity = Instant::now();
        Some(f(&mut entry.state))
    }

    /// Read-only snapshot of a session's state.
    pub async fn snapshot(&self, id: Uuid) -> Option<WizardState> {
        self.inner.read().await.get(&id).map(|e| e.state.clone())
    }

    /// Remove a session. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Drop sessions idle longer than the TTL. Returns how many were
    /// removed.
    pub async fn prune_idle(&self) -> usize {
        let mut guard = self.inner.write().await;
        let before = guard.len();
        guard.retain(|_, entry| entry.last_activity.elapsed() < self.ttl);
        before - guard.len()
    }

    /// Number of active sessions.
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Run the idle-session sweeper loop until `cancel` is triggered.
pub async fn run_sweeper(sessions: Arc<WizardSessions>, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Session sweeper started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session sweeper stopping");
                break;
            }
            _ = interval.tick() => {
                let pruned = sessions.prune_idle().await;
                if pruned > 0 {
                    tracing::info!(pruned, "Pruned idle wizard sessions");
                } else {
                    tracing::debug!("No idle wizard sessions to prune");
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
