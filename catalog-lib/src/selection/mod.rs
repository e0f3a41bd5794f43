//! Cross-page selection state.
//!
//! The [`SelectionStore`] holds every selected record id, independent of which
//! [`Page`](crate::model::Page) is loaded. The free functions in this module
//! fold page-scoped UI events into the store and derive the checked rows of
//! the visible page from it.
//!
//! All operations are synchronous and total over sets; the only fallible
//! operation is [`select_first_n`], which validates its count before touching
//! the store.

mod bulk;
mod count;
mod reconcile;
mod state;
mod store;

pub use bulk::*;
pub use count::*;
pub use reconcile::*;
pub use state::*;
pub use store::*;
