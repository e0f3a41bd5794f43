//! In-memory record source

use std::sync::Arc;

use async_trait::async_trait;

use super::DEFAULT_PAGE_SIZE;
use super::RecordSource;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Page;
use crate::model::Record;

/// Serves pages sliced from a fixed list of records.
///
/// Pages past the end are empty but still carry the catalog's totals.
///
/// # Example
///
/// ```
/// use catalog_lib::model::Record;
/// use catalog_lib::source::MemoryRecordSource;
///
/// let records = (1..=30).map(Record::new).collect();
/// let source = MemoryRecordSource::new(records).with_page_size(12);
/// assert_eq!(source.total_pages(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryRecordSource {
    records: Arc<Vec<Record>>,
    page_size: usize,
}

impl MemoryRecordSource {
    /// Creates a source over `records` with the default page size.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(records),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page size (at least 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Returns the number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of pages.
    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    /// Slices out a page synchronously.
    pub fn page(&self, page_number: u32) -> Result<Page, ValidationError> {
        if page_number == 0 {
            return Err(ValidationError::PageNumber(page_number));
        }
        let start = (page_number as usize - 1).saturating_mul(self.page_size);
        let records = self
            .records
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        Ok(Page::new(records)
            .with_page_size(self.page_size)
            .with_total_count(self.records.len())
            .with_current_page(page_number))
    }
}

#[async_trait]
impl RecordSource for MemoryRecordSource {
    async fn fetch_page(&self, page_number: u32) -> Result<Page, Error> {
        Ok(self.page(page_number)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(len: i64) -> MemoryRecordSource {
        MemoryRecordSource::new((1..=len).map(Record::new).collect()).with_page_size(12)
    }

    #[test]
    fn test_pages_are_sliced_in_order() {
        let source = catalog(30);
        let page = source.page(3).unwrap();
        assert_eq!(page.ids().collect::<Vec<_>>(), (25..=30).collect::<Vec<_>>());
        assert_eq!(page.total_count(), 30);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.current_page(), 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = catalog(5).page(4).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count(), 5);
    }

    #[tokio::test]
    async fn test_fetch_page_zero_is_invalid() {
        let err = catalog(5).fetch_page(0).await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_page_size_never_zero() {
        let source = MemoryRecordSource::new(vec![Record::new(1)]).with_page_size(0);
        assert_eq!(source.total_pages(), 1);
    }
}
