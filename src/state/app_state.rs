//! Central `AppState` container shared by the event, networking, and UI layers.

use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::state::types::{
    Category, FilterMode, Focus, Item, Lang, PriceSeries, TimeRange, View,
};

/// How long a status-line notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// State of the item detail view, created when a row is opened.
#[derive(Clone, Debug)]
pub struct DetailState {
    /// The item being inspected.
    pub item: Item,
    /// Selected chart range.
    pub range: TimeRange,
    /// Index into the location ring: 0 = all markets, 1..=N the fixed city list.
    pub location_idx: usize,
    /// Last applied price series (empty until the first response lands).
    pub series: PriceSeries,
    /// `true` while a price request is outstanding.
    pub loading: bool,
}

/// Transient status-line notice (non-blocking, auto-expiring).
#[derive(Clone, Debug)]
pub struct Notice {
    /// Translated message text.
    pub text: String,
    /// Instant after which the notice is dropped.
    pub expires_at: Instant,
}

/// Global application state.
///
/// Mutated only by the event loop in response to input and worker messages;
/// the filter pipeline derives `filtered` from `items` plus the filter fields.
#[derive(Debug)]
pub struct AppState {
    /// Active display language.
    pub lang: Lang,
    /// Which top-level view is rendered.
    pub view: View,
    /// Which catalog pane has keyboard focus.
    pub focus: Focus,
    /// Search input text as typed (mirrors `FilterMode::Search` when active).
    pub input: String,
    /// Active filter (search xor category xor none).
    pub filter: FilterMode,
    /// Tier tags currently selected in the filter panel.
    pub selected_tiers: Vec<String>,
    /// Distinct tiers present in the catalog, ascending.
    pub available_tiers: Vec<String>,
    /// Cursor into `available_tiers` for the filter panel.
    pub tier_cursor: usize,
    /// Full normalized catalog.
    pub items: Vec<Item>,
    /// Filter pipeline output: sorted and capped result set.
    pub filtered: Vec<Item>,
    /// Zero-based page into `filtered`.
    pub page: usize,
    /// Selected row within the current page.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// `true` until the catalog worker reports.
    pub loading: bool,
    /// Terminal catalog error (every source exhausted).
    pub catalog_error: Option<String>,
    /// `true` when the catalog came from the cache envelope.
    pub from_cache: bool,
    /// Detail view state when `view == View::Detail`.
    pub detail: Option<DetailState>,
    /// Monotonic sequence for price requests; only the matching response applies.
    pub price_seq: u64,
    /// Transient status-line notice.
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            lang: Lang::Es,
            view: View::Catalog,
            focus: Focus::Search,
            input: String::new(),
            filter: FilterMode::None,
            selected_tiers: Vec::new(),
            available_tiers: Vec::new(),
            tier_cursor: 0,
            items: Vec::new(),
            filtered: Vec::new(),
            page: 0,
            selected: 0,
            list_state: ListState::default(),
            loading: true,
            catalog_error: None,
            from_cache: false,
            detail: None,
            price_seq: 0,
            notice: None,
        }
    }
}

impl AppState {
    /// What: Re-run the filter pipeline and clamp pagination/selection.
    ///
    /// Inputs: none (operates on `items`, `filter`, `selected_tiers`, `lang`).
    ///
    /// Output: Updates `filtered`, clamps `page`/`selected`, and syncs
    /// `list_state`.
    pub fn recompute(&mut self) {
        self.filtered = crate::logic::apply_filters(
            &self.items,
            self.lang,
            &self.filter,
            &self.selected_tiers,
        );
        let pages = crate::logic::page_count(self.filtered.len());
        if self.page >= pages {
            self.page = pages.saturating_sub(1);
        }
        let page_len = self.current_page().len();
        if page_len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(page_len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Items of the current page (slice of `filtered`).
    #[must_use]
    pub fn current_page(&self) -> &[Item] {
        crate::logic::page_slice(&self.filtered, self.page)
    }

    /// What: Enter search mode with the given text, clearing any category.
    ///
    /// Inputs:
    /// - `text`: Current search input (may be empty, which clears the filter).
    ///
    /// Output: Updates `filter`/`input`, resets pagination, recomputes.
    pub fn set_search(&mut self, text: String) {
        self.input.clone_from(&text);
        self.filter = if text.trim().is_empty() {
            FilterMode::None
        } else {
            FilterMode::Search(text)
        };
        self.page = 0;
        self.selected = 0;
        self.recompute();
    }

    /// What: Select a category, clearing any search text.
    ///
    /// Inputs:
    /// - `category`: Category chosen from the header menu.
    ///
    /// Output: Updates `filter`, clears `input`, resets pagination, recomputes.
    pub fn set_category(&mut self, category: Category) {
        self.input.clear();
        self.filter = FilterMode::Category(category);
        self.page = 0;
        self.selected = 0;
        self.recompute();
    }

    /// What: Toggle a tier tag in the selection.
    ///
    /// Inputs:
    /// - `tier`: Tier tag (e.g. `T4`).
    ///
    /// Output: Adds or removes the tag, resets the page, recomputes.
    pub fn toggle_tier(&mut self, tier: &str) {
        if let Some(pos) = self.selected_tiers.iter().position(|t| t == tier) {
            self.selected_tiers.remove(pos);
        } else {
            self.selected_tiers.push(tier.to_string());
        }
        self.page = 0;
        self.recompute();
    }

    /// Show a transient status-line notice.
    pub fn notify(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    /// Drop the notice once its deadline passed.
    pub fn expire_notice(&mut self) {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| Instant::now() >= n.expires_at);
        if expired {
            self.notice = None;
        }
    }

    /// Resolved location name for the detail view's ring index, if any.
    #[must_use]
    pub fn detail_location(&self) -> Option<&'static str> {
        let d = self.detail.as_ref()?;
        if d.location_idx == 0 {
            None
        } else {
            crate::market::LOCATIONS.get(d.location_idx - 1).copied()
        }
    }
}
