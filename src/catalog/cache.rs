//! TTL-boxed on-disk cache envelope for the normalized catalog.
//!
//! The cache is an explicit object with an injected clock rather than a
//! global keyed slot, so tests control expiry without real timers. One
//! envelope file, full overwrite on store, parse failure treated as a miss.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::state::Item;

/// Envelope validity window: 30 days, in milliseconds.
pub const CACHE_TTL_MILLIS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Time source for envelope validation.
pub trait Clock {
    /// Current time as epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock [`Clock`] used outside tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Persisted envelope: payload plus its capture timestamp.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
struct CacheEnvelope {
    /// Cached normalized items.
    data: Vec<Item>,
    /// Epoch milliseconds when the envelope was written.
    timestamp: i64,
}

/// On-disk catalog cache with injected clock and storage location.
#[derive(Debug)]
pub struct CatalogCache<C: Clock> {
    /// Envelope file location.
    path: PathBuf,
    /// Validity window in milliseconds.
    ttl_millis: i64,
    /// Injected time source.
    clock: C,
}

impl<C: Clock> CatalogCache<C> {
    /// Create a cache over `path` with the default 30-day TTL.
    pub fn new(path: PathBuf, clock: C) -> Self {
        Self {
            path,
            ttl_millis: CACHE_TTL_MILLIS,
            clock,
        }
    }

    /// Create a cache with an explicit TTL (tests and tooling).
    pub fn with_ttl(path: PathBuf, clock: C, ttl_millis: i64) -> Self {
        Self {
            path,
            ttl_millis,
            clock,
        }
    }

    /// What: Load the cached item list if the envelope is fresh.
    ///
    /// Inputs: none (reads `self.path`).
    ///
    /// Output:
    /// - `Some(Vec<Item>)` when the file exists, parses, and
    ///   `now - timestamp < ttl`; `None` otherwise.
    ///
    /// Details:
    /// - A missing or malformed envelope is a miss, never an error.
    #[must_use]
    pub fn load(&self) -> Option<Vec<Item>> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let envelope: CacheEnvelope = match serde_json::from_str(&content) {
            Ok(e) => e,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "malformed cache envelope, treating as miss");
                return None;
            }
        };
        let age = self.clock.now_millis() - envelope.timestamp;
        if age < self.ttl_millis {
            info!(
                path = %self.path.display(),
                items = envelope.data.len(),
                age_hours = age / 3_600_000,
                "catalog served from cache envelope"
            );
            Some(envelope.data)
        } else {
            debug!(
                path = %self.path.display(),
                age_hours = age / 3_600_000,
                "cache envelope expired"
            );
            None
        }
    }

    /// What: Persist the item list, overwriting any prior envelope.
    ///
    /// Inputs:
    /// - `items`: Normalized catalog to wrap with the current timestamp.
    ///
    /// Output:
    /// - Writes JSON to disk; failures are logged and swallowed so a broken
    ///   cache never interrupts the session.
    pub fn store(&self, items: &[Item]) {
        let envelope = CacheEnvelope {
            data: items.to_vec(),
            timestamp: self.clock.now_millis(),
        };
        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(path = %self.path.display(), error = %e, "failed to create cache directory");
            return;
        }
        match serde_json::to_string(&envelope) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), error = %e, "failed to write cache envelope");
                } else {
                    debug!(path = %self.path.display(), items = items.len(), "cache envelope written");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize cache envelope"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Deterministic clock advanced by hand in tests.
    struct FixedClock(Cell<i64>);

    impl Clock for &FixedClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            title_en: "Bow".to_string(),
            title_es: "Arco".to_string(),
            description_en: String::new(),
            description_es: String::new(),
            description_variable: None,
            tier: Some("T4".to_string()),
        }
    }

    /// What: Fresh envelope short-circuits; expired envelope misses
    ///
    /// - Input: Store at t=0, load at t=TTL-1 and again at t=TTL
    /// - Output: Hit inside the window, miss at and past the boundary
    #[test]
    fn cache_ttl_window_controls_hit_and_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        let clock = FixedClock(Cell::new(0));
        let cache = CatalogCache::new(dir.path().join("items_cache.json"), &clock);

        cache.store(&[item("T4_2H_BOW")]);
        clock.0.set(CACHE_TTL_MILLIS - 1);
        let hit = cache.load().expect("fresh envelope");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].id, "T4_2H_BOW");

        clock.0.set(CACHE_TTL_MILLIS);
        assert!(cache.load().is_none());
    }

    /// What: Malformed and missing envelopes are cache misses
    ///
    /// - Input: Garbage file contents; nonexistent path
    /// - Output: None for both, no panic
    #[test]
    fn cache_malformed_envelope_is_a_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("items_cache.json");
        std::fs::write(&path, "{not valid json").expect("write");
        let clock = FixedClock(Cell::new(0));
        let cache = CatalogCache::new(path, &clock);
        assert!(cache.load().is_none());

        let missing = CatalogCache::new(dir.path().join("absent.json"), &clock);
        assert!(missing.load().is_none());
    }

    /// What: Store overwrites the prior envelope wholesale
    ///
    /// - Input: Two stores with different payloads
    /// - Output: Load returns only the second payload
    #[test]
    fn cache_store_overwrites_prior_envelope() {
        let dir = tempfile::tempdir().expect("tempdir");
        let clock = FixedClock(Cell::new(1_000));
        let cache = CatalogCache::new(dir.path().join("items_cache.json"), &clock);

        cache.store(&[item("T4_2H_BOW"), item("T5_ORE")]);
        cache.store(&[item("T6_PLANKS")]);
        let got = cache.load().expect("fresh envelope");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, "T6_PLANKS");
    }
}
