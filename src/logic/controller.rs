//! Filter, pagination and result-list state machine.
//!
//! The controller never performs I/O. Operations that need the network return
//! a [`PageRequest`]; the runtime executes it and hands the matching
//! [`PageResponse`] back through [`QueryController::apply_response`].

use tracing::{debug, info, warn};

use super::query::{QueryFormat, build_filter_query, build_load_more_query};
use crate::state::{
    Character, FetchSlot, FilterField, FilterState, InvalidFilterValue, PageRequest, PageResponse,
};

/// Effect of applying a response to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Commit succeeded; the list now holds `count` records.
    Replaced {
        /// Records on the new page.
        count: usize,
    },
    /// Load more succeeded; `count` records were appended.
    Appended {
        /// Records appended.
        count: usize,
    },
    /// Commit failed; the list was cleared.
    Cleared,
    /// Load more failed; nothing changed.
    Unchanged,
    /// The response was superseded by a newer request and ignored.
    Stale,
}

/// Owns filters, pagination and the accumulated result list.
#[derive(Debug, Clone)]
pub struct QueryController {
    /// Editable filter values (not yet committed).
    filters: FilterState,
    /// Query string of the last commit.
    committed_query: String,
    /// Last page merged into `results`.
    current_page: u32,
    /// Accumulated records in fetch order.
    results: Vec<Character>,
    /// Whether the API reported another page.
    has_more: bool,
    /// Index into `results` of the record shown in the detail popup.
    detail: Option<usize>,
    /// Next request identifier to hand out.
    next_request_id: u64,
    /// Identifier of the in-flight commit, if any.
    pending_commit: Option<u64>,
    /// Identifier of the in-flight load more, if any.
    pending_load_more: Option<u64>,
    /// Bumped on every commit.
    generation: u64,
    /// Load-more query shape.
    format: QueryFormat,
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new(QueryFormat::default())
    }
}

impl QueryController {
    /// Create an empty controller using `format` for load-more queries.
    #[must_use]
    pub fn new(format: QueryFormat) -> Self {
        Self {
            filters: FilterState::default(),
            committed_query: String::new(),
            current_page: 1,
            results: Vec::new(),
            has_more: false,
            detail: None,
            next_request_id: 1,
            pending_commit: None,
            pending_load_more: None,
            generation: 0,
            format,
        }
    }

    /// Editable filter values.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Query string sent with the last commit.
    #[must_use]
    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    /// Last page merged into the result list.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Accumulated records.
    #[must_use]
    pub fn results(&self) -> &[Character] {
        &self.results
    }

    /// Whether the API reported another page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Current commit generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Load-more query shape in use.
    #[must_use]
    pub const fn format(&self) -> QueryFormat {
        self.format
    }

    /// Whether any request is awaiting its response.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending_commit.is_some() || self.pending_load_more.is_some()
    }

    /// What: Whether the "More" affordance should be offered.
    ///
    /// Output:
    /// - `true` only with a non-empty list, a reported next page and no commit
    ///   in flight.
    ///
    /// Details:
    /// - A pending commit is about to replace the list, so paging the old list
    ///   would append records from the wrong query.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.results.is_empty() && self.has_more && self.pending_commit.is_none()
    }

    /// What: Update one filter field without touching the network.
    ///
    /// Inputs:
    /// - `field`: Field to update
    /// - `value`: New value; empty clears it
    ///
    /// Output:
    /// - `Ok(())` or the validation error from [`FilterState::set`].
    ///
    /// # Errors
    /// - Returns `Err` for categorical values outside the enumeration.
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<(), InvalidFilterValue> {
        self.filters.set(field, value)
    }

    /// Hand out the next request identifier.
    const fn issue_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// What: Commit the current filters and request page 1.
    ///
    /// Output:
    /// - Page-1 [`PageRequest`] for the rebuilt committed query.
    ///
    /// Details:
    /// - Resets the page to 1 and starts a new generation so responses from
    ///   earlier commits or load-mores are discarded.
    /// - The existing list stays visible until the response arrives.
    pub fn apply_filters(&mut self) -> PageRequest {
        self.committed_query = build_filter_query(&self.filters);
        self.current_page = 1;
        self.generation += 1;
        let id = self.issue_id();
        self.pending_commit = Some(id);
        self.pending_load_more = None;
        info!(
            id,
            generation = self.generation,
            query = %self.committed_query,
            "committing filters"
        );
        PageRequest {
            id,
            generation: self.generation,
            slot: FetchSlot::Commit,
            page: 1,
            query: self.committed_query.clone(),
        }
    }

    /// What: Request the page after the current one under the committed filters.
    ///
    /// Output:
    /// - `Some(PageRequest)` when [`Self::can_load_more`] holds; `None` otherwise.
    ///
    /// Details:
    /// - The page counter only advances once the response is applied.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if !self.can_load_more() {
            debug!(
                results = self.results.len(),
                has_more = self.has_more,
                commit_pending = self.pending_commit.is_some(),
                "load more ignored"
            );
            return None;
        }
        let page = self.current_page + 1;
        let id = self.issue_id();
        self.pending_load_more = Some(id);
        let query = build_load_more_query(page, &self.committed_query, self.format);
        info!(id, page, query = %query, "loading more characters");
        Some(PageRequest {
            id,
            generation: self.generation,
            slot: FetchSlot::LoadMore,
            page,
            query,
        })
    }

    /// What: Merge a completed fetch into the state.
    ///
    /// Inputs:
    /// - `resp`: Response echoing its request's id, generation, slot and page
    ///
    /// Output:
    /// - [`ApplyOutcome`] describing what changed.
    ///
    /// Details:
    /// - Responses whose id is not the latest for their slot, or load-mores
    ///   from an older generation, are dropped.
    /// - Commit failure clears the list; load-more failure changes nothing.
    pub fn apply_response(&mut self, resp: PageResponse) -> ApplyOutcome {
        match resp.slot {
            FetchSlot::Commit => {
                if self.pending_commit != Some(resp.id) {
                    debug!(id = resp.id, "dropping stale commit response");
                    return ApplyOutcome::Stale;
                }
                self.pending_commit = None;
                self.detail = None;
                match resp.outcome {
                    Ok(page) => {
                        let count = page.results.len();
                        self.results = page.results;
                        self.current_page = 1;
                        self.has_more = page.has_next;
                        ApplyOutcome::Replaced { count }
                    }
                    Err(e) => {
                        warn!(error = %e, query = %self.committed_query, "error fetching characters");
                        self.results.clear();
                        self.has_more = false;
                        ApplyOutcome::Cleared
                    }
                }
            }
            FetchSlot::LoadMore => {
                if self.pending_load_more != Some(resp.id) || resp.generation != self.generation {
                    debug!(
                        id = resp.id,
                        generation = resp.generation,
                        "dropping stale load-more response"
                    );
                    return ApplyOutcome::Stale;
                }
                self.pending_load_more = None;
                match resp.outcome {
                    Ok(page) => {
                        let count = page.results.len();
                        self.results.extend(page.results);
                        self.current_page = resp.page;
                        self.has_more = page.has_next;
                        ApplyOutcome::Appended { count }
                    }
                    Err(e) => {
                        warn!(error = %e, page = resp.page, "error fetching more characters");
                        ApplyOutcome::Unchanged
                    }
                }
            }
        }
    }

    /// Show `index` in the detail popup. Returns `false` if out of range.
    pub fn open_detail(&mut self, index: usize) -> bool {
        if index < self.results.len() {
            self.detail = Some(index);
            true
        } else {
            false
        }
    }

    /// Hide the detail popup.
    pub const fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Record currently shown in the detail popup.
    #[must_use]
    pub fn detail(&self) -> Option<&Character> {
        self.detail.and_then(|i| self.results.get(i))
    }
}
