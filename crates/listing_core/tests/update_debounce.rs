use listing_core::{update, Effect, ListingRequest, ListingState, Msg, DEBOUNCE_DELAY};
use pretty_assertions::assert_eq;

fn init_logging() {
    listing_logging::initialize_for_tests();
}

fn type_filter(state: ListingState, text: &str) -> (ListingState, u64) {
    let (state, effects) = update(state, Msg::LocationFilterChanged(text.to_string()));
    match effects.as_slice() {
        [Effect::ArmDebounce { generation, delay }] => {
            assert_eq!(*delay, DEBOUNCE_DELAY);
            (state, *generation)
        }
        other => panic!("expected a single ArmDebounce, got {other:?}"),
    }
}

#[test]
fn filter_edit_arms_timer_without_fetching() {
    init_logging();
    let (mut state, _generation) = type_filter(ListingState::new(), "Aus");

    assert_eq!(state.location_filter(), "Aus");
    assert!(!state.is_loading());
    assert_eq!(state.last_issued_request(), 0);
    assert!(state.consume_dirty());
}

#[test]
fn burst_of_edits_coalesces_into_one_fetch_with_last_value() {
    init_logging();
    let state = ListingState::new();
    let (state, first) = type_filter(state, "A");
    let (state, second) = type_filter(state, "Au");
    let (state, third) = type_filter(state, "Austin");
    assert!(first < second && second < third);

    // Timers for superseded edits are ignored even if they still fire.
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: first });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: second });
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::DebounceElapsed { generation: third });
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            request_id: 1,
            request: ListingRequest::new(1, "Austin"),
        }]
    );
    assert!(state.is_loading());
    assert_eq!(state.pending_debounce(), None);
}

#[test]
fn settled_filter_resets_page_to_one() {
    init_logging();
    let (state, _) = update(ListingState::new(), Msg::PageRequested(4));
    assert_eq!(state.page(), 4);

    let (state, generation) = type_filter(state, "Berlin");
    // Page only resets once the edit settles.
    assert_eq!(state.page(), 4);

    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert_eq!(state.page(), 1);
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            request_id: 2,
            request: ListingRequest::new(1, "Berlin"),
        }]
    );
}

#[test]
fn timer_fires_only_once() {
    init_logging();
    let (state, generation) = type_filter(ListingState::new(), "Remote");
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert_eq!(effects.len(), 1);

    let (_state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert!(effects.is_empty());
}

#[test]
fn clearing_the_filter_fetches_without_location() {
    init_logging();
    let (state, generation) = type_filter(ListingState::new(), "Paris");
    let (state, _) = update(state, Msg::DebounceElapsed { generation });
    let (state, generation) = type_filter(state, "");
    let (_state, effects) = update(state, Msg::DebounceElapsed { generation });

    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            request_id: 2,
            request: ListingRequest {
                page: 1,
                limit: 10,
                location: None,
            },
        }]
    );
}
