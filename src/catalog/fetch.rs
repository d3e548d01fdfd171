//! Remote catalog retrieval: mirror list walk with local snapshot fallback.

use std::path::Path;

use tracing::{info, warn};

use crate::catalog::normalize::{RawItem, normalize_all};
use crate::net;
use crate::state::Item;

/// Candidate catalog sources, attempted in order.
///
/// Both serve the community `ao-bin-dumps` formatted item dump; the jsDelivr
/// mirror covers the occasional GitHub raw outage.
pub const ITEM_SOURCES: [&str; 2] = [
    "https://raw.githubusercontent.com/broderickhyman/ao-bin-dumps/master/formatted/items.json",
    "https://cdn.jsdelivr.net/gh/broderickhyman/ao-bin-dumps@master/formatted/items.json",
];

/// What: Fetch and normalize the item catalog.
///
/// Inputs:
/// - `fallback`: Path of a local snapshot tried after every mirror fails.
///
/// Output:
/// - `Ok(Vec<Item>)` from the first source yielding a non-empty array;
///   `Err` when every candidate and the local fallback are exhausted.
///
/// Details:
/// - Sources are attempted strictly in order; a failure is logged and falls
///   through to the next candidate. There is no retry loop and no backoff —
///   a failed cycle is terminal until the user reloads.
///
/// # Errors
/// - Every mirror failed (network, status, parse, or empty array) and the
///   local snapshot is absent, unreadable, or empty.
pub async fn fetch_catalog(fallback: &Path) -> net::Result<Vec<Item>> {
    for url in ITEM_SOURCES {
        match net::get_json::<Vec<RawItem>>(url).await {
            Ok(raw) if !raw.is_empty() => {
                info!(url, records = raw.len(), "catalog fetched");
                return Ok(normalize_all(&raw));
            }
            Ok(_) => warn!(url, "catalog source returned an empty array"),
            Err(e) => warn!(url, error = %e, "catalog source failed"),
        }
    }
    match load_local_snapshot(fallback) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!(path = %fallback.display(), error = %e, "local snapshot fallback failed");
            Err("all catalog sources exhausted".into())
        }
    }
}

/// What: Read and normalize the local snapshot file.
///
/// Inputs:
/// - `path`: Snapshot location (a plain dump of the upstream JSON array).
///
/// Output:
/// - `Ok(Vec<Item>)` when the file parses into a non-empty array.
///
/// # Errors
/// - Missing/unreadable file, malformed JSON, or an empty array.
fn load_local_snapshot(path: &Path) -> net::Result<Vec<Item>> {
    let body = std::fs::read_to_string(path)?;
    let raw: Vec<RawItem> = serde_json::from_str(&body)?;
    if raw.is_empty() {
        return Err("local snapshot holds an empty array".into());
    }
    info!(path = %path.display(), records = raw.len(), "catalog loaded from local snapshot");
    Ok(normalize_all(&raw))
}
