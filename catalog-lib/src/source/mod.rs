//! Record sources
//!
//! A [`RecordSource`] hands out one [`Page`] per page number. The table
//! controller is the only consumer; it owns the request ordering, so sources
//! stay stateless between calls.

mod config;
mod http;
mod memory;

pub use config::*;
pub use http::*;
pub use memory::*;

use async_trait::async_trait;

use crate::error::Error;
use crate::model::Page;

/// Trait for page providers.
///
/// Implementations fetch the page with the given 1-based number. A failure
/// is reported as an error and never retried; the caller decides what to keep
/// showing.
///
/// # Example
///
/// ```ignore
/// use catalog_lib::source::{HttpRecordSource, RecordSource, SourceConfig};
///
/// let source = HttpRecordSource::new(SourceConfig::new("https://shop.example/api/items"))?;
/// let page = source.fetch_page(1).await?;
/// println!("{} of {} records", page.len(), page.total_count());
/// ```
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches the page with the given 1-based number.
    async fn fetch_page(&self, page_number: u32) -> Result<Page, Error>;
}
