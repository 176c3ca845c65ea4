use crate::{Job, ListingPage, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished starting up; load the first page.
    Started,
    /// User edited the location search box.
    LocationFilterChanged(String),
    /// The debounce timer armed for `generation` fired.
    DebounceElapsed { generation: u64 },
    /// User asked for a specific page.
    PageRequested(u32),
    /// User clicked Next.
    NextPageClicked,
    /// User clicked Previous.
    PreviousPageClicked,
    /// A Listing API call finished.
    FetchCompleted {
        request_id: RequestId,
        outcome: Result<ListingPage, FetchFailure>,
    },
    /// User picked a job from the list.
    JobSelected(Job),
}

/// A failed Listing API call. Network errors, bad statuses and malformed
/// bodies all collapse into this one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
