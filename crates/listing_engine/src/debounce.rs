use std::sync::mpsc;
use std::time::Duration;

use listing_logging::listing_debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::EngineEvent;

struct PendingTimer {
    generation: u64,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Cancelable delayed task holding at most one pending timer.
///
/// Arming always cancels the previous timer first. A timer that already woke
/// up may still deliver its event after being superseded, so receivers must
/// compare the generation against the one they armed last.
pub struct Debouncer {
    runtime: Handle,
    event_tx: mpsc::Sender<EngineEvent>,
    pending: Option<PendingTimer>,
}

impl Debouncer {
    pub fn new(runtime: Handle, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            runtime,
            event_tx,
            pending: None,
        }
    }

    /// Emits `EngineEvent::DebounceElapsed { generation }` after `delay` unless
    /// canceled or re-armed first.
    pub fn arm(&mut self, generation: u64, delay: Duration) {
        self.cancel();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let event_tx = self.event_tx.clone();
        let task = self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = event_tx.send(EngineEvent::DebounceElapsed { generation });
                }
            }
        });

        self.pending = Some(PendingTimer {
            generation,
            cancel,
            task,
        });
    }

    /// Drops the pending timer. Returns its generation if it had not fired yet.
    pub fn cancel(&mut self) -> Option<u64> {
        let pending = self.pending.take()?;
        if pending.task.is_finished() {
            return None;
        }
        pending.cancel.cancel();
        listing_debug!("Debounce timer {} superseded", pending.generation);
        Some(pending.generation)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
