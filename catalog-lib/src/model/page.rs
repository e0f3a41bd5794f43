//! Page type for paginated catalog results.

use serde::Deserialize;
use serde::Serialize;

use super::Record;
use super::RecordId;

/// One fetched batch of records with pagination information.
///
/// A page is ephemeral: navigating replaces it wholesale. Page numbers are
/// 1-based; a `current_page` of 0 means the source did not report one.
///
/// # Example
///
/// ```
/// use catalog_lib::model::{Page, Record};
///
/// let page = Page::new(vec![Record::new(1), Record::new(2)])
///     .with_current_page(1)
///     .with_page_size(2)
///     .with_total_count(5);
///
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.has_next());
/// assert!(page.contains(2));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PageResponse")]
pub struct Page {
    records: Vec<Record>,
    total_count: usize,
    page_size: usize,
    total_pages: usize,
    current_page: u32,
}

/// Page as sent by a remote source, where all metadata is optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageResponse {
    records: Vec<Record>,
    #[serde(default)]
    total_count: usize,
    #[serde(default)]
    page_size: usize,
    #[serde(default)]
    total_pages: Option<usize>,
    #[serde(default)]
    current_page: u32,
}

impl From<PageResponse> for Page {
    fn from(raw: PageResponse) -> Self {
        let total_pages = match raw.total_pages {
            Some(pages) if pages > 0 => pages,
            _ => Page::page_count(raw.total_count, raw.page_size),
        };
        Self {
            records: raw.records,
            total_count: raw.total_count,
            page_size: raw.page_size,
            total_pages,
            current_page: raw.current_page,
        }
    }
}

impl Page {
    /// Creates a new page holding `records`.
    ///
    /// The page size and total count default to the number of records.
    pub fn new(records: Vec<Record>) -> Self {
        let len = records.len();
        Self {
            records,
            total_count: len,
            page_size: len,
            total_pages: usize::from(len > 0),
            current_page: 0,
        }
    }

    /// Sets the total number of records across all pages.
    ///
    /// Recomputes the page count from the page size.
    pub fn with_total_count(mut self, count: usize) -> Self {
        self.total_count = count;
        self.total_pages = Self::page_count(count, self.page_size);
        self
    }

    /// Sets the page size.
    ///
    /// Recomputes the page count from the total count.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self.total_pages = Self::page_count(self.total_count, size);
        self
    }

    /// Overrides the page count reported by the source.
    pub fn with_total_pages(mut self, pages: usize) -> Self {
        self.total_pages = pages;
        self
    }

    /// Sets the 1-based page number.
    pub fn with_current_page(mut self, page: u32) -> Self {
        self.current_page = page;
        self
    }

    fn page_count(total: usize, size: usize) -> usize {
        if size == 0 { 0 } else { total.div_ceil(size) }
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the record ids in page order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(Record::id)
    }

    /// Returns `true` if a record with this id is on the page.
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Finds a record on the page by id.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns the total record count across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the 1-based page number (0 if unknown).
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there is a page after this one.
    pub fn has_next(&self) -> bool {
        (self.current_page as usize) < self.total_pages
    }

    /// Returns `true` if there is a page before this one.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}
