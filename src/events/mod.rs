//! Event handling layer for the TUI.
//!
//! `handle_event` dispatches a single terminal event to the active view's
//! key handler and reports whether the application should exit.

mod catalog;
mod detail;

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, PriceRequest, View};

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the reader thread.
/// - `app`: Mutable application state.
/// - `price_tx`: Channel to the market worker for detail-view queries.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    price_tx: &mpsc::UnboundedSender<PriceRequest>,
) -> bool {
    if let CEvent::Key(ke) = ev {
        if ke.kind != KeyEventKind::Press {
            return false;
        }
        // Ctrl+C always exits, regardless of focus or view.
        if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        return match app.view {
            View::Catalog => catalog::handle_key(app, &ke, price_tx),
            View::Detail => detail::handle_key(app, &ke, price_tx),
        };
    }
    false
}

/// What: Issue a price-history request for the current detail state.
///
/// Inputs:
/// - `app`: Mutable state (bumps `price_seq`, flags the detail as loading).
/// - `price_tx`: Channel to the market worker.
///
/// Output:
/// - Sends a [`PriceRequest`] carrying the new sequence number; responses
///   with an older sequence are dropped by the event loop.
pub(crate) fn request_prices(
    app: &mut AppState,
    price_tx: &mpsc::UnboundedSender<PriceRequest>,
) {
    app.price_seq += 1;
    let seq = app.price_seq;
    if let Some(d) = &mut app.detail {
        d.loading = true;
        let location = if d.location_idx == 0 {
            None
        } else {
            crate::market::LOCATIONS
                .get(d.location_idx - 1)
                .map(|s| (*s).to_string())
        };
        let _ = price_tx.send(PriceRequest {
            seq,
            item_id: d.item.id.clone(),
            range: d.range,
            location,
        });
    }
}
