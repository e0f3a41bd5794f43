//! Selection table controller.
//!
//! [`SelectionTable`] is the state behind one paginated table: the loaded
//! page, the cross-page selection, the "select first N" input and the loading
//! flag. Create one per table and drop it with the table.
//!
//! Page loads are split into [`SelectionTable::begin_load`] and
//! [`SelectionTable::finish_load`] so a caller can keep handling events while
//! a fetch is in flight. Every request gets a token; only the response to the
//! most recently issued request is applied, so a slow response for an older
//! page can never overwrite a newer one. Commands issued during a fetch act on
//! the page that is still displayed.

use log::debug;
use log::error;

use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Page;
use crate::model::Record;
use crate::model::RecordId;
use crate::selection::SelectionCount;
use crate::selection::SelectionState;
use crate::selection::SelectionStore;
use crate::selection::apply_selection_change;
use crate::selection::derived_selection;
use crate::selection::deselect_all_on_page;
use crate::selection::select_all_on_page;
use crate::selection::select_first_n;
use crate::selection::select_first_n_from;
use crate::source::RecordSource;

/// A page request issued by [`SelectionTable::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    token: u64,
    page_number: u32,
}

impl PageRequest {
    /// Returns the request's sequence number.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Returns the requested 1-based page number.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }
}

/// What [`SelectionTable::finish_load`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page replaced the displayed one.
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
    /// The fetch failed; the previous page stays displayed.
    Failed,
}

/// Events the rendered table feeds back into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// The complete set of checked rows on the visible page.
    SelectionChanged(Vec<Record>),
    /// Select every row on the visible page.
    SelectAll,
    /// Deselect every row on the visible page.
    DeselectAll,
    /// The user edited the "select first N" input.
    SetCount(String),
    /// Select exactly the first N rows, N taken from the count input.
    SelectFirstN,
}

/// State of one paginated selection table.
#[derive(Debug, Default)]
pub struct SelectionTable {
    /// The displayed page (empty until the first load succeeds).
    page: Page,
    /// Selected ids across all pages.
    store: SelectionStore,
    /// Pending "select first N" input.
    count: SelectionCount,
    /// Last issued request token.
    last_token: u64,
    /// The request whose response will be applied, if one is in flight.
    pending: Option<PageRequest>,
}

impl SelectionTable {
    /// Create a table with no page loaded and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get the displayed page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Get the cross-page selection.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Get the "select first N" input.
    pub fn count(&self) -> &SelectionCount {
        &self.count
    }

    /// Check if a page fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Get the page number of the in-flight fetch, if any.
    pub fn requested_page(&self) -> Option<u32> {
        self.pending.map(|r| r.page_number)
    }

    /// Get the page number after the displayed one, if there is one.
    pub fn next_page_number(&self) -> Option<u32> {
        self.page.has_next().then(|| self.page.current_page() + 1)
    }

    /// Get the page number before the displayed one, if there is one.
    pub fn prev_page_number(&self) -> Option<u32> {
        self.page.has_prev().then(|| self.page.current_page() - 1)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Get the checked rows of the displayed page, in page order.
    pub fn derived_selection(&self) -> Vec<Record> {
        derived_selection(&self.page, &self.store)
    }

    /// Check if a row is checked.
    pub fn is_checked(&self, id: RecordId) -> bool {
        self.store.contains(id)
    }

    /// Get the number of selected records across all pages.
    pub fn selected_count(&self) -> usize {
        self.store.len()
    }

    /// Get the "Selected: N" label.
    pub fn selected_label(&self) -> String {
        format!("Selected: {}", self.store.len())
    }

    /// Get the descriptive selection state.
    pub fn state(&self) -> SelectionState {
        SelectionState::of(&self.page, &self.store)
    }

    // -------------------------------------------------------------------------
    // Page loading
    // -------------------------------------------------------------------------

    /// Issue a request for a page.
    ///
    /// Supersedes any request still in flight.
    pub fn begin_load(&mut self, page_number: u32) -> Result<PageRequest, Error> {
        if page_number == 0 {
            return Err(ValidationError::PageNumber(page_number).into());
        }
        self.last_token += 1;
        let request = PageRequest {
            token: self.last_token,
            page_number,
        };
        if let Some(previous) = self.pending.replace(request) {
            debug!(
                "Request #{} for page {} supersedes #{} for page {}",
                request.token, page_number, previous.token, previous.page_number
            );
        } else {
            debug!("Request #{} for page {}", request.token, page_number);
        }
        Ok(request)
    }

    /// Apply the response to a request.
    ///
    /// Responses to superseded requests are dropped. A failed fetch is logged
    /// and leaves the displayed page as it was.
    pub fn finish_load(
        &mut self,
        request: PageRequest,
        result: Result<Page, Error>,
    ) -> LoadOutcome {
        if self.pending != Some(request) {
            debug!(
                "Dropping stale response #{} for page {} (latest is #{})",
                request.token, request.page_number, self.last_token
            );
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(mut page) => {
                if page.current_page() == 0 {
                    page = page.with_current_page(request.page_number);
                }
                debug!(
                    "Loaded page {} with {} records",
                    page.current_page(),
                    page.len()
                );
                self.page = page;
                LoadOutcome::Applied
            }
            Err(err) => {
                error!("Failed to load page {}: {}", request.page_number, err);
                LoadOutcome::Failed
            }
        }
    }

    /// Fetch a page from `source` and apply it.
    ///
    /// Fetch failures are not returned; they show up as
    /// [`LoadOutcome::Failed`]. Only an invalid page number is an error.
    pub async fn load_page<S>(
        &mut self,
        source: &S,
        page_number: u32,
    ) -> Result<LoadOutcome, Error>
    where
        S: RecordSource + ?Sized,
    {
        let request = self.begin_load(page_number)?;
        let result = source.fetch_page(page_number).await;
        Ok(self.finish_load(request, result))
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Fold the visible page's checked rows into the selection.
    pub fn apply_selection_change(&mut self, checked: &[Record]) {
        apply_selection_change(&self.page, checked, &mut self.store);
    }

    /// Select every row on the visible page.
    pub fn select_all_on_page(&mut self) -> Vec<RecordId> {
        select_all_on_page(&self.page, &mut self.store)
    }

    /// Deselect every row on the visible page.
    pub fn deselect_all_on_page(&mut self) -> Vec<RecordId> {
        deselect_all_on_page(&self.page, &mut self.store)
    }

    /// Set the "select first N" input.
    pub fn set_count(&mut self, text: impl Into<String>) {
        self.count.set(text);
    }

    /// Select exactly the first `n` rows of the visible page.
    ///
    /// Clears the count input on success.
    pub fn select_first_n(&mut self, n: i64) -> Result<usize, Error> {
        let selected = select_first_n(&self.page, &mut self.store, n)?;
        self.count.clear();
        Ok(selected)
    }

    /// Select exactly the first N rows, N taken from the count input.
    pub fn select_first_n_from_input(&mut self) -> Result<usize, Error> {
        select_first_n_from(&self.page, &mut self.store, &mut self.count)
    }

    /// Dispatch a table event.
    pub fn handle(&mut self, event: TableEvent) -> Result<(), Error> {
        match event {
            TableEvent::SelectionChanged(checked) => self.apply_selection_change(&checked),
            TableEvent::SelectAll => {
                self.select_all_on_page();
            }
            TableEvent::DeselectAll => {
                self.deselect_all_on_page();
            }
            TableEvent::SetCount(text) => self.set_count(text),
            TableEvent::SelectFirstN => {
                self.select_first_n_from_input()?;
            }
        }
        Ok(())
    }
}
