//! Catalog records and pages

mod page;
mod record;

pub use page::*;
pub use record::*;
