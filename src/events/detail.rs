//! Key handling for the item detail view.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::market::LOCATIONS;
use crate::state::{AppState, PriceRequest, View};

/// What: Handle one key press in the detail view.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `ke`: Pressed key.
/// - `price_tx`: Channel to the market worker.
///
/// Output:
/// - Always `false` (the detail view never exits the application directly).
pub fn handle_key(
    app: &mut AppState,
    ke: &KeyEvent,
    price_tx: &mpsc::UnboundedSender<PriceRequest>,
) -> bool {
    // Ring size including the leading "all markets" slot.
    let ring = LOCATIONS.len() + 1;
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.detail = None;
            app.view = View::Catalog;
        }
        KeyCode::Char('r') => {
            if let Some(d) = &mut app.detail {
                d.range = d.range.toggled();
            }
            crate::events::request_prices(app, price_tx);
        }
        KeyCode::Left => {
            if let Some(d) = &mut app.detail {
                d.location_idx = (d.location_idx + ring - 1) % ring;
            }
            crate::events::request_prices(app, price_tx);
        }
        KeyCode::Right => {
            if let Some(d) = &mut app.detail {
                d.location_idx = (d.location_idx + 1) % ring;
            }
            crate::events::request_prices(app, price_tx);
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use crate::state::{DetailState, Item, PriceSeries, TimeRange};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn detail_app() -> AppState {
        let mut app = AppState::default();
        app.view = View::Detail;
        app.detail = Some(DetailState {
            item: Item {
                id: "T4_2H_BOW".into(),
                title_en: "Bow".into(),
                title_es: "Arco".into(),
                description_en: String::new(),
                description_es: String::new(),
                description_variable: None,
                tier: Some("T4".into()),
            },
            range: TimeRange::Day,
            location_idx: 0,
            series: PriceSeries::default(),
            loading: false,
        });
        app
    }

    /// What: Range toggle refetches with the other time-scale
    ///
    /// - Input: 'r' in the detail view
    /// - Output: Range flips to Week; a request with the new range is sent
    #[test]
    fn events_detail_range_toggle_refetches() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = detail_app();
        handle_key(&mut app, &key(KeyCode::Char('r')), &tx);
        let req = rx.try_recv().expect("request sent");
        assert_eq!(req.range, TimeRange::Week);
        assert_eq!(req.seq, 1);
    }

    /// What: Location ring wraps in both directions through "all markets"
    ///
    /// - Input: Left from slot 0, then Right twice
    /// - Output: Last city, then all-markets, then the first city
    #[test]
    fn events_detail_location_ring_wraps() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = detail_app();
        handle_key(&mut app, &key(KeyCode::Left), &tx);
        let req = rx.try_recv().expect("request sent");
        assert_eq!(req.location.as_deref(), Some("Brecilien"));
        handle_key(&mut app, &key(KeyCode::Right), &tx);
        assert!(rx.try_recv().expect("request sent").location.is_none());
        handle_key(&mut app, &key(KeyCode::Right), &tx);
        assert_eq!(
            rx.try_recv().expect("request sent").location.as_deref(),
            Some("Bridgewatch")
        );
    }

    /// What: Esc returns to the catalog and drops the detail state
    ///
    /// - Input: Esc in the detail view
    /// - Output: Catalog view, no detail, no request
    #[test]
    fn events_detail_escape_returns_to_catalog() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = detail_app();
        assert!(!handle_key(&mut app, &key(KeyCode::Esc), &tx));
        assert_eq!(app.view, View::Catalog);
        assert!(app.detail.is_none());
        assert!(rx.try_recv().is_err());
    }
}
