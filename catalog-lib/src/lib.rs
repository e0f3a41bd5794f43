//! Catalog selection library
//!
//! Cross-page record selection for a paginated, remotely sourced table. The
//! [`SelectionTable`] owns the loaded page and the selection; record sources
//! supply pages and the selection functions keep the two consistent.

pub mod error;
pub mod model;
pub mod selection;
pub mod source;

mod table;

pub use table::*;
