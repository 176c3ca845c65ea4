use listing_core::{
    update, Effect, Job, ListingPage, ListingRequest, ListingState, Msg, PAGE_SIZE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    listing_logging::initialize_for_tests();
}

fn loaded_with_pages(total_pages: u32) -> ListingState {
    let (state, _) = update(ListingState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            request_id: 1,
            outcome: Ok(ListingPage {
                jobs: vec![Job::new("1", "Engineer")],
                total_pages,
            }),
        },
    );
    state
}

fn fetched_pages(effects: &[Effect]) -> Vec<u32> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchListings { request, .. } => Some(request.page),
            _ => None,
        })
        .collect()
}

#[test]
fn started_loads_first_page() {
    init_logging();
    let (state, effects) = update(ListingState::new(), Msg::Started);

    assert!(state.is_loading());
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            request_id: 1,
            request: ListingRequest::new(1, ""),
        }]
    );
}

#[test]
fn page_request_fetches_immediately() {
    init_logging();
    let state = loaded_with_pages(5);
    let (state, effects) = update(state, Msg::PageRequested(3));

    assert_eq!(state.page(), 3);
    assert!(state.is_loading());
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            request_id: 2,
            request: ListingRequest::new(3, ""),
        }]
    );
}

#[test]
fn page_zero_is_rejected() {
    init_logging();
    let state = loaded_with_pages(5);
    let before = state.clone();
    let (state, effects) = update(state, Msg::PageRequested(0));

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn page_size_is_fixed_regardless_of_filter() {
    init_logging();
    let (state, effects) = update(ListingState::new(), Msg::LocationFilterChanged("Austin".into()));
    let generation = match effects[0] {
        Effect::ArmDebounce { generation, .. } => generation,
        _ => unreachable!(),
    };
    let (state, _) = update(state, Msg::DebounceElapsed { generation });
    let (_state, effects) = update(state, Msg::PageRequested(2));

    match &effects[..] {
        [Effect::FetchListings { request, .. }] => {
            assert_eq!(request.limit, PAGE_SIZE);
            assert_eq!(request.query_string(), "page=2&limit=10&location=Austin");
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn next_and_previous_stay_within_bounds() {
    init_logging();
    let state = loaded_with_pages(2);

    let (state, effects) = update(state, Msg::PreviousPageClicked);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 1);

    let (state, effects) = update(state, Msg::NextPageClicked);
    assert_eq!(fetched_pages(&effects), vec![2]);

    let (state, effects) = update(state, Msg::NextPageClicked);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 2);

    let (state, effects) = update(state, Msg::PreviousPageClicked);
    assert_eq!(fetched_pages(&effects), vec![1]);
    assert_eq!(state.page(), 1);
}

#[test]
fn next_is_disabled_when_result_set_reports_zero_pages() {
    init_logging();
    let state = loaded_with_pages(0);
    let (state, effects) = update(state, Msg::NextPageClicked);

    assert!(effects.is_empty());
    assert!(!state.view().can_go_next);
}
