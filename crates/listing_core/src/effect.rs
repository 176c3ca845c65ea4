use std::time::Duration;

use crate::{ListingRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a Listing API call right away.
    FetchListings {
        request_id: RequestId,
        request: ListingRequest,
    },
    /// Replace any pending debounce timer with a new one.
    ArmDebounce { generation: u64, delay: Duration },
}
