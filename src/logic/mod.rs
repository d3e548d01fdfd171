//! Pure catalog logic: filtering, sorting, and pagination.
//!
//! Everything here is deterministic over `(items, filter state)` and owns no
//! state of its own; the event layer recomputes through
//! [`crate::state::AppState::recompute`] on every change.

mod filter;
mod page;

pub use filter::{apply_filters, available_tiers, category_matches, RESULT_CAP};
pub use page::{PAGE_SIZE, page_count, page_slice};
