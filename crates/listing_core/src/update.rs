use crate::{Effect, ListingState, Msg, DEBOUNCE_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ListingState, msg: Msg) -> (ListingState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![state.begin_fetch()],
        Msg::LocationFilterChanged(text) => {
            // Arming replaces whatever timer is pending, so a burst of edits
            // ends in a single fetch.
            let generation = state.edit_location_filter(text);
            vec![Effect::ArmDebounce {
                generation,
                delay: DEBOUNCE_DELAY,
            }]
        }
        Msg::DebounceElapsed { generation } => {
            if state.settle_debounce(generation) {
                vec![state.begin_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::PageRequested(page) => {
            // Callers clamp to the known range; only zero is refused here.
            if page == 0 {
                return (state, Vec::new());
            }
            state.set_page(page);
            vec![state.begin_fetch()]
        }
        Msg::NextPageClicked => {
            let target = state.page().saturating_add(1).min(state.last_page());
            step_page(&mut state, target)
        }
        Msg::PreviousPageClicked => {
            let target = state.page().saturating_sub(1).max(1);
            step_page(&mut state, target)
        }
        Msg::FetchCompleted {
            request_id,
            outcome,
        } => {
            state.apply_fetch(request_id, outcome);
            Vec::new()
        }
        Msg::JobSelected(job) => {
            // Not checked against the current results.
            state.select_job(job);
            Vec::new()
        }
    };

    (state, effects)
}

fn step_page(state: &mut ListingState, target: u32) -> Vec<Effect> {
    if target == state.page() {
        return Vec::new();
    }
    state.set_page(target);
    vec![state.begin_fetch()]
}
