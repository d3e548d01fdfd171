//! Item catalog management: remote fetch, normalization, and the TTL cache
//! envelope.
//!
//! The catalog is ingested once per session: the cache layer short-circuits
//! to the persisted envelope when it is fresh, otherwise the fetcher walks
//! the mirror list and the local snapshot, and the normalized result is
//! written back through the cache (full overwrite, no deltas).

mod cache;
mod fetch;
mod normalize;

pub use cache::{CACHE_TTL_MILLIS, CatalogCache, Clock, SystemClock};
pub use fetch::{ITEM_SOURCES, fetch_catalog};
pub use normalize::{RawItem, SENTINEL_PREFIX, normalize, normalize_all};

/// Host serving rendered item icons.
pub const RENDER_HOST: &str = "https://render.albiononline.com";

/// What: Build the render-service icon URL for an item.
///
/// Inputs:
/// - `id`: Catalog item identifier.
///
/// Output:
/// - Absolute PNG URL; shown as a link in the detail view (terminals do not
///   render bitmaps).
#[must_use]
pub fn item_image_url(id: &str) -> String {
    format!("{RENDER_HOST}/v1/item/{id}.png")
}
