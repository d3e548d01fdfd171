//! Key handling for the catalog view.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::i18n::t_fmt1;
use crate::logic::page_count;
use crate::state::{AppState, Category, DetailState, Focus, PriceRequest, PriceSeries, TimeRange, View};

/// What: Handle one key press in the catalog view.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `ke`: Pressed key.
/// - `price_tx`: Channel to the market worker (used when a row is opened).
///
/// Output:
/// - `true` when the application should exit.
pub fn handle_key(
    app: &mut AppState,
    ke: &KeyEvent,
    price_tx: &mpsc::UnboundedSender<PriceRequest>,
) -> bool {
    if matches!(app.focus, Focus::Search) {
        return handle_search_key(app, ke);
    }

    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Results => Focus::Tiers,
                Focus::Tiers => Focus::Search,
                Focus::Search => Focus::Results,
            };
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            app.set_category(Category::ALL[idx]);
        }
        KeyCode::Char('l') => toggle_language(app),
        _ => match app.focus {
            Focus::Results => return handle_results_key(app, ke, price_tx),
            Focus::Tiers => handle_tiers_key(app, ke),
            Focus::Search => {}
        },
    }
    false
}

/// Search-input editing; printable keys build the query live.
fn handle_search_key(app: &mut AppState, ke: &KeyEvent) -> bool {
    match ke.code {
        KeyCode::Char(c) => {
            let mut text = app.input.clone();
            text.push(c);
            app.set_search(text);
        }
        KeyCode::Backspace => {
            let mut text = app.input.clone();
            text.pop();
            app.set_search(text);
        }
        KeyCode::Esc => app.set_search(String::new()),
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => app.focus = Focus::Results,
        _ => {}
    }
    false
}

/// Results-list navigation, paging, and opening the detail view.
fn handle_results_key(
    app: &mut AppState,
    ke: &KeyEvent,
    price_tx: &mpsc::UnboundedSender<PriceRequest>,
) -> bool {
    match ke.code {
        KeyCode::Up => {
            app.selected = app.selected.saturating_sub(1);
            app.list_state.select(Some(app.selected));
        }
        KeyCode::Down => {
            let len = app.current_page().len();
            if len > 0 {
                app.selected = (app.selected + 1).min(len - 1);
                app.list_state.select(Some(app.selected));
            }
        }
        KeyCode::Left | KeyCode::PageUp => {
            if app.page > 0 {
                app.page -= 1;
                app.selected = 0;
                app.recompute();
            }
        }
        KeyCode::Right | KeyCode::PageDown => {
            if app.page + 1 < page_count(app.filtered.len()) {
                app.page += 1;
                app.selected = 0;
                app.recompute();
            }
        }
        KeyCode::Esc => {
            // Clear every filter at once.
            app.selected_tiers.clear();
            app.set_search(String::new());
        }
        KeyCode::Enter => {
            if let Some(item) = app.current_page().get(app.selected).cloned() {
                app.detail = Some(DetailState {
                    item,
                    range: TimeRange::Day,
                    location_idx: 0,
                    series: PriceSeries::default(),
                    loading: true,
                });
                app.view = View::Detail;
                crate::events::request_prices(app, price_tx);
            }
        }
        _ => {}
    }
    false
}

/// Tier-panel cursor movement and selection.
fn handle_tiers_key(app: &mut AppState, ke: &KeyEvent) {
    match ke.code {
        KeyCode::Up => app.tier_cursor = app.tier_cursor.saturating_sub(1),
        KeyCode::Down => {
            if !app.available_tiers.is_empty() {
                app.tier_cursor = (app.tier_cursor + 1).min(app.available_tiers.len() - 1);
            }
        }
        KeyCode::Char(' ') => {
            if let Some(tier) = app.available_tiers.get(app.tier_cursor).cloned() {
                app.toggle_tier(&tier);
            }
        }
        KeyCode::Char('a') => {
            app.selected_tiers = app.available_tiers.clone();
            app.page = 0;
            app.recompute();
        }
        KeyCode::Char('c') => {
            app.selected_tiers.clear();
            app.page = 0;
            app.recompute();
        }
        KeyCode::Esc | KeyCode::Enter => app.focus = Focus::Results,
        _ => {}
    }
}

/// Flip the display language, persist it, and re-sort the results.
fn toggle_language(app: &mut AppState) {
    app.lang = app.lang.toggled();
    crate::settings::save_language(&crate::paths::settings_file(), app.lang);
    app.recompute();
    let tag = app.lang.as_tag().to_uppercase();
    app.notify(t_fmt1(app.lang, "toast.language_changed", tag));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use crate::state::{FilterMode, Item};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app_with_items(n: usize) -> AppState {
        let mut app = AppState::default();
        app.loading = false;
        app.items = (0..n)
            .map(|i| Item {
                id: format!("T4_ITEM_{i:03}"),
                title_en: format!("Item {i:03}"),
                title_es: format!("Item {i:03}"),
                description_en: String::new(),
                description_es: String::new(),
                description_variable: None,
                tier: Some("T4".into()),
            })
            .collect();
        app.available_tiers = crate::logic::available_tiers(&app.items);
        app.recompute();
        app
    }

    /// What: Typing in search focus builds the query; digits are text
    ///
    /// - Input: Chars '4' then Backspace under Search focus
    /// - Output: Filter follows the input instead of selecting a category
    #[test]
    fn events_catalog_search_typing_builds_query() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_items(3);
        app.focus = Focus::Search;
        assert!(!handle_key(&mut app, &key(KeyCode::Char('4')), &tx));
        assert!(matches!(app.filter, FilterMode::Search(_)));
        assert_eq!(app.input, "4");
        handle_key(&mut app, &key(KeyCode::Backspace), &tx);
        assert_eq!(app.filter, FilterMode::None);
    }

    /// What: Digit keys select categories outside search focus
    ///
    /// - Input: '3' with Results focus
    /// - Output: Resources category active, input cleared
    #[test]
    fn events_catalog_digit_selects_category() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_items(3);
        app.focus = Focus::Results;
        handle_key(&mut app, &key(KeyCode::Char('3')), &tx);
        assert_eq!(app.filter, FilterMode::Category(Category::Resources));
        assert!(app.input.is_empty());
    }

    /// What: Paging keys walk pages and Enter opens the detail view
    ///
    /// - Input: 40 items; Right then Enter under Results focus
    /// - Output: Page 1 selected row opens as detail with a pending request
    #[test]
    fn events_catalog_paging_and_open_detail() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = app_with_items(40);
        app.focus = Focus::Results;
        handle_key(&mut app, &key(KeyCode::Right), &tx);
        assert_eq!(app.page, 1);
        handle_key(&mut app, &key(KeyCode::Enter), &tx);
        assert_eq!(app.view, View::Detail);
        let req = rx.try_recv().expect("price request issued");
        assert_eq!(req.seq, 1);
        assert_eq!(req.item_id, app.detail.expect("detail set").item.id);
    }

    /// What: 'q' exits only outside search focus
    ///
    /// - Input: 'q' under Results focus and under Search focus
    /// - Output: Exit signal only for the former
    #[test]
    fn events_catalog_quit_respects_focus() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_items(1);
        app.focus = Focus::Results;
        assert!(handle_key(&mut app, &key(KeyCode::Char('q')), &tx));
        app.focus = Focus::Search;
        assert!(!handle_key(&mut app, &key(KeyCode::Char('q')), &tx));
        assert_eq!(app.input, "q");
    }

    /// What: Tier panel select-all and clear-all shortcuts
    ///
    /// - Input: 'a' then 'c' under Tiers focus
    /// - Output: All tiers selected, then none
    #[test]
    fn events_catalog_tier_bulk_shortcuts() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_items(5);
        app.focus = Focus::Tiers;
        handle_key(&mut app, &key(KeyCode::Char('a')), &tx);
        assert_eq!(app.selected_tiers, app.available_tiers);
        handle_key(&mut app, &key(KeyCode::Char('c')), &tx);
        assert!(app.selected_tiers.is_empty());
    }
}
