//! Background workers: terminal event reader, catalog loader, and the market
//! query resolver.

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tracing::warn;

use crate::catalog::{CatalogCache, SystemClock, fetch_catalog};
use crate::state::{CatalogUpdate, PriceRequest, PriceResponse};

/// What: Forward terminal events into the async event loop.
///
/// Inputs:
/// - `tx`: Channel the loop selects on.
///
/// Output: Spawns a blocking reader thread; it ends when the receiver drops.
pub fn spawn_event_thread(tx: mpsc::UnboundedSender<CEvent>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "terminal event read failed");
                    break;
                }
            }
        }
    });
}

/// What: Load the catalog once: cache short-circuit, then mirror walk.
///
/// Inputs:
/// - `refresh`: When `true`, skip the cache read (`--refresh`).
/// - `tx`: Channel receiving exactly one [`CatalogUpdate`].
///
/// Output: Spawns the loader task. A fresh fetch is written back through the
/// cache; total exhaustion reports an empty list plus the terminal error.
pub fn spawn_catalog_worker(refresh: bool, tx: mpsc::UnboundedSender<CatalogUpdate>) {
    tokio::spawn(async move {
        let cache = CatalogCache::new(crate::paths::catalog_cache_file(), SystemClock);
        if !refresh && let Some(items) = cache.load() {
            let _ = tx.send(CatalogUpdate { items, from_cache: true, error: None });
            return;
        }
        match fetch_catalog(&crate::paths::fallback_items_file()).await {
            Ok(items) => {
                cache.store(&items);
                let _ = tx.send(CatalogUpdate { items, from_cache: false, error: None });
            }
            Err(e) => {
                let _ = tx.send(CatalogUpdate {
                    items: Vec::new(),
                    from_cache: false,
                    error: Some(e.to_string()),
                });
            }
        }
    });
}

/// What: Resolve market price queries as they arrive.
///
/// Inputs:
/// - `rx`: Requests from the event layer.
/// - `tx`: Responses back to the event loop.
///
/// Output: Spawns the dispatcher task. Each request is resolved on its own
/// task so a new query supersedes — without cancelling — any in-flight one;
/// the event loop's sequence check discards whichever lands stale.
pub fn spawn_market_worker(
    mut rx: mpsc::UnboundedReceiver<PriceRequest>,
    tx: mpsc::UnboundedSender<PriceResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = rx.recv().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let resp = match crate::market::fetch_history(
                    &req.item_id,
                    req.range,
                    req.location.as_deref(),
                )
                .await
                {
                    Ok(series) => PriceResponse { seq: req.seq, series: Some(series), error: None },
                    Err(e) => PriceResponse {
                        seq: req.seq,
                        series: None,
                        error: Some(e.to_string()),
                    },
                };
                let _ = tx.send(resp);
            });
        }
    });
}
