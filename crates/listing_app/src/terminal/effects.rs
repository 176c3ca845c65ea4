use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use listing_core::{Effect, FetchFailure, Msg};
use listing_engine::{EngineError, EngineEvent, EngineEvents, EngineHandle, FetchSettings};
use listing_logging::{listing_debug, listing_info, listing_warn};

use super::app::Inbound;

const EVENT_POLL: Duration = Duration::from_millis(100);

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, inbox: mpsc::Sender<Inbound>) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        thread::spawn(move || forward_events(events, inbox));
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListings {
                    request_id,
                    request,
                } => self.engine.fetch(request_id, request),
                Effect::ArmDebounce { generation, delay } => {
                    listing_debug!("ArmDebounce generation={} delay={:?}", generation, delay);
                    self.engine.arm_debounce(generation, delay);
                }
            }
        }
    }
}

/// Pumps engine events into the dispatch inbox until either side goes away.
pub(crate) fn forward_events(events: EngineEvents, inbox: mpsc::Sender<Inbound>) {
    loop {
        match events.recv_timeout(EVENT_POLL) {
            Ok(event) => {
                if inbox.send(Inbound::Msg(map_event(event))).is_err() {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                listing_info!("Engine events closed");
                break;
            }
        }
    }
}

/// Translates an engine event into a controller message. Fetch failures are
/// logged here and reach the controller without their detail.
pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingFetched { request_id, result } => Msg::FetchCompleted {
            request_id,
            outcome: result.map_err(|err| {
                listing_warn!("Fetch request_id={} failed: {}", request_id, err);
                FetchFailure::new(err.to_string())
            }),
        },
        EngineEvent::DebounceElapsed { generation } => Msg::DebounceElapsed { generation },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use listing_core::{Job, ListingPage, Msg};
    use listing_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings};

    use super::{forward_events, map_event};

    #[test]
    fn successful_fetch_maps_to_completed_page() {
        let page = ListingPage {
            jobs: vec![Job::new("1", "Engineer")],
            total_pages: 2,
        };
        let msg = map_event(EngineEvent::ListingFetched {
            request_id: 4,
            result: Ok(page.clone()),
        });
        assert_eq!(
            msg,
            Msg::FetchCompleted {
                request_id: 4,
                outcome: Ok(page),
            }
        );
    }

    #[test]
    fn failed_fetch_collapses_to_single_failure_kind() {
        let msg = map_event(EngineEvent::ListingFetched {
            request_id: 2,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(502),
                message: "502 Bad Gateway".to_string(),
            }),
        });
        match msg {
            Msg::FetchCompleted {
                request_id,
                outcome: Err(failure),
            } => {
                assert_eq!(request_id, 2);
                assert_eq!(failure.message, "http status 502: 502 Bad Gateway");
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }

    #[test]
    fn timer_events_pass_through() {
        assert_eq!(
            map_event(EngineEvent::DebounceElapsed { generation: 3 }),
            Msg::DebounceElapsed { generation: 3 }
        );
    }

    #[test]
    fn forwarding_stops_once_the_engine_is_dropped() {
        let (engine, events) = EngineHandle::new(FetchSettings::default()).expect("engine");
        let (inbox_tx, inbox_rx) = mpsc::channel();
        drop(engine);

        forward_events(events, inbox_tx);
        assert!(inbox_rx.try_recv().is_err());
    }
}
