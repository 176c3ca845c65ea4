use std::time::Duration;

use listing_logging::listing_debug;

use crate::view_model::{JobDetailView, JobRowView, ListingViewModel};
use crate::{Effect, FetchFailure, Job, ListingPage, ListingRequest};

/// Sequence number tagged on every outgoing Listing API call.
pub type RequestId = u64;

/// Quiet interval after the last filter edit before a fetch goes out.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(700);

/// Parameters of the next fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub location_filter: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            location_filter: String::new(),
        }
    }
}

/// The most recently applied page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultState {
    pub jobs: Vec<Job>,
    pub total_pages: u32,
    pub loading: bool,
}

impl Default for ResultState {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            total_pages: 1,
            loading: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingState {
    query: QueryState,
    results: ResultState,
    selected_job: Option<Job>,
    last_issued: RequestId,
    last_completed: RequestId,
    debounce_generation: u64,
    pending_debounce: Option<u64>,
    dirty: bool,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ListingViewModel {
        let selected_id = self.selected_job.as_ref().map(|job| &job.job_id);
        let last_page = self.last_page();
        ListingViewModel {
            jobs: self
                .results
                .jobs
                .iter()
                .map(|job| JobRowView::from_job(job, Some(&job.job_id) == selected_id))
                .collect(),
            page: self.query.page,
            total_pages: self.results.total_pages,
            location_filter: self.query.location_filter.clone(),
            loading: self.results.loading,
            can_go_previous: self.query.page > 1,
            can_go_next: self.query.page < last_page,
            selected: self.selected_job.as_ref().map(JobDetailView::from_job),
        }
    }

    pub fn results(&self) -> &ResultState {
        &self.results
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn location_filter(&self) -> &str {
        &self.query.location_filter
    }

    pub fn jobs(&self) -> &[Job] {
        &self.results.jobs
    }

    pub fn total_pages(&self) -> u32 {
        self.results.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.results.loading
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.selected_job.as_ref()
    }

    /// Generation of the debounce timer the state is waiting on, if any.
    pub fn pending_debounce(&self) -> Option<u64> {
        self.pending_debounce
    }

    /// Id of the most recently issued fetch; 0 before the first one.
    pub fn last_issued_request(&self) -> RequestId {
        self.last_issued
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Highest page the Next button may reach. An empty result set still has page 1.
    pub(crate) fn last_page(&self) -> u32 {
        self.results.total_pages.max(1)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Records the new filter text and returns the generation of the timer to arm.
    pub(crate) fn edit_location_filter(&mut self, text: String) -> u64 {
        if self.query.location_filter != text {
            self.query.location_filter = text;
            self.mark_dirty();
        }
        self.debounce_generation += 1;
        self.pending_debounce = Some(self.debounce_generation);
        self.debounce_generation
    }

    /// Accepts the timer only if it is the latest one armed; resets to page 1 when it is.
    pub(crate) fn settle_debounce(&mut self, generation: u64) -> bool {
        if self.pending_debounce != Some(generation) {
            return false;
        }
        self.pending_debounce = None;
        self.set_page(1);
        true
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        if self.query.page != page {
            self.query.page = page;
            self.mark_dirty();
        }
    }

    /// Tags a request for the current query and flips the loading flag.
    pub(crate) fn begin_fetch(&mut self) -> Effect {
        self.last_issued += 1;
        if !self.results.loading {
            self.results.loading = true;
            self.mark_dirty();
        }
        Effect::FetchListings {
            request_id: self.last_issued,
            request: ListingRequest::new(self.query.page, &self.query.location_filter),
        }
    }

    /// Applies a completed fetch. A response at or below the newest completed
    /// request, success or failure, is stale and dropped. Failures keep the
    /// previous results on screen.
    pub(crate) fn apply_fetch(
        &mut self,
        request_id: RequestId,
        outcome: Result<ListingPage, FetchFailure>,
    ) {
        if request_id <= self.last_completed {
            listing_debug!(
                "Discarding stale response request_id={} (newest completed {})",
                request_id,
                self.last_completed
            );
            return;
        }
        self.last_completed = request_id;

        if let Ok(page) = outcome {
            self.results.jobs = page.jobs;
            self.results.total_pages = page.total_pages;
            self.mark_dirty();
        }
        if request_id == self.last_issued && self.results.loading {
            self.results.loading = false;
            self.mark_dirty();
        }
    }

    pub(crate) fn select_job(&mut self, job: Job) {
        if self.selected_job.as_ref() != Some(&job) {
            self.selected_job = Some(job);
            self.mark_dirty();
        }
    }
}
