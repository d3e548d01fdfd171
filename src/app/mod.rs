//! Application runtime: terminal lifecycle, background workers, and the
//! event loop that owns all UI state.

mod workers;

use std::time::Duration;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;
use tokio::sync::mpsc;

use crate::i18n::t;
use crate::state::{AppState, CatalogUpdate, Lang, PriceResponse, PriceSeries};
use crate::ui::ui;

/// Result type alias for runtime operations.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Session options resolved from the command line.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Bypass the cache envelope read and force a fresh fetch.
    pub refresh: bool,
    /// Session-only language override (not persisted).
    pub lang_override: Option<Lang>,
}

/// Put the terminal into raw/alternate-screen mode.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restore the terminal modes changed by [`setup_terminal`].
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// What: Run the Mercado TUI end-to-end.
///
/// Inputs:
/// - `opts`: Session options (`--refresh`, `--lang`).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   errors.
///
/// Details:
/// - State: loads persisted settings (language) and applies the CLI override.
/// - Background tasks: an event reader thread, one catalog worker (cache
///   short-circuit, then mirror walk), and the market worker resolving price
///   queries; all report over mpsc channels.
/// - Event loop: renders a frame, then waits on input, worker messages, and
///   a coarse tick used to expire status notices.
///
/// # Errors
/// - Terminal setup/draw/restore failures.
pub async fn run(opts: RunOptions) -> Result<()> {
    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = AppState::default();
    let settings = crate::settings::load(&crate::paths::settings_file());
    app.lang = opts.lang_override.unwrap_or_else(|| settings.lang());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    workers::spawn_event_thread(event_tx);

    let (catalog_tx, mut catalog_rx) = mpsc::unbounded_channel();
    workers::spawn_catalog_worker(opts.refresh, catalog_tx);

    let (price_req_tx, price_req_rx) = mpsc::unbounded_channel();
    let (price_res_tx, mut price_res_rx) = mpsc::unbounded_channel();
    workers::spawn_market_worker(price_req_rx, price_res_tx);

    let mut tick = tokio::time::interval(Duration::from_millis(250));

    let result = loop {
        if let Err(e) = terminal.draw(|f| ui(f, &mut app)) {
            break Err(e.into());
        }
        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &price_req_tx) {
                    break Ok(());
                }
            }
            Some(update) = catalog_rx.recv() => apply_catalog_update(&mut app, update),
            Some(resp) = price_res_rx.recv() => apply_price_response(&mut app, resp),
            _ = tick.tick() => app.expire_notice(),
        }
    };

    restore_terminal()?;
    result
}

/// What: Fold the catalog worker's report into UI state.
///
/// Inputs:
/// - `app`: Mutable state.
/// - `update`: Items plus provenance/error flags.
///
/// Output: Replaces the catalog wholesale, derives tiers, recomputes, and
/// raises the cache-provenance notice.
fn apply_catalog_update(app: &mut AppState, update: CatalogUpdate) {
    app.loading = false;
    app.from_cache = update.from_cache;
    app.catalog_error = update.error;
    app.items = update.items;
    app.available_tiers = crate::logic::available_tiers(&app.items);
    app.tier_cursor = 0;
    app.recompute();
    tracing::info!(
        items = app.items.len(),
        from_cache = app.from_cache,
        error = app.catalog_error.as_deref().unwrap_or(""),
        "catalog state applied"
    );
    if app.from_cache {
        let msg = t(app.lang, "toast.catalog_from_cache");
        app.notify(msg);
    }
}

/// What: Apply a market worker response, dropping stale sequences.
///
/// Inputs:
/// - `app`: Mutable state.
/// - `resp`: Series or error, tagged with its originating sequence.
///
/// Output: Replaces the detail series wholesale when the sequence is
/// current; empty or failed cycles raise the non-blocking notice instead.
fn apply_price_response(app: &mut AppState, resp: PriceResponse) {
    if resp.seq != app.price_seq {
        tracing::debug!(seq = resp.seq, latest = app.price_seq, "dropping stale price response");
        return;
    }
    if let Some(err) = &resp.error {
        tracing::warn!(error = %err, "price history fetch failed");
    }
    let mut raise_notice = false;
    if let Some(d) = &mut app.detail {
        d.loading = false;
        match resp.series {
            Some(series) if !series.is_empty() => d.series = series,
            _ => {
                d.series = PriceSeries::default();
                raise_notice = true;
            }
        }
    }
    if raise_notice {
        let msg = t(app.lang, "toast.no_price_data");
        app.notify(msg);
    }
}
