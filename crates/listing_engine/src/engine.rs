use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use listing_core::{ListingRequest, RequestId};
use listing_logging::listing_info;
use tokio::runtime::Runtime;

use crate::debounce::Debouncer;
use crate::fetch::{FetchSettings, ListingFetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build listing client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        request: ListingRequest,
    },
    ArmDebounce {
        generation: u64,
        delay: Duration,
    },
}

/// Command side of the background worker that owns the tokio runtime, the
/// Listing API client and the debounce timer. Dropping it stops the worker.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Event side of the worker. Reports `Disconnected` once the worker and every
/// task it spawned are gone.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<(Self, EngineEvents), EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn ListingFetcher>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let runtime = Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || run_worker(runtime, fetcher, cmd_rx, event_tx));

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    /// Starts a Listing API call. In-flight calls are never aborted.
    pub fn fetch(&self, request_id: RequestId, request: ListingRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            request,
        });
    }

    /// Replaces the pending debounce timer, if any.
    pub fn arm_debounce(&self, generation: u64, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ArmDebounce { generation, delay });
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, mpsc::RecvTimeoutError> {
        self.event_rx.recv_timeout(timeout)
    }
}

fn run_worker(
    runtime: Runtime,
    fetcher: Arc<dyn ListingFetcher>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let mut debouncer = Debouncer::new(runtime.handle().clone(), event_tx.clone());

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Fetch {
                request_id,
                request,
            } => {
                listing_info!(
                    "Fetch request_id={} page={} location={:?}",
                    request_id,
                    request.page,
                    request.location
                );
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = fetcher.fetch(&request).await;
                    let _ = event_tx.send(EngineEvent::ListingFetched { request_id, result });
                });
            }
            EngineCommand::ArmDebounce { generation, delay } => {
                debouncer.arm(generation, delay);
            }
        }
    }

    listing_info!("Engine worker stopping");
}
