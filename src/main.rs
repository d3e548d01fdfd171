//! Mercado binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod catalog;
mod events;
mod i18n;
mod logic;
mod market;
mod net;
mod paths;
mod settings;
mod state;
mod theme;
mod ui;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct MercadoTimer;

impl tracing_subscriber::fmt::time::FormatTime for MercadoTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let parsed = args::Args::parse();
    let level = args::determine_log_level(&parsed);

    // Initialize tracing logger writing to ~/.config/mercado/logs/mercado.log
    {
        let mut log_path = paths::logs_dir();
        log_path.push("mercado.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.clone()));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(MercadoTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.clone()));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(MercadoTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    let opts = app::RunOptions {
        refresh: parsed.refresh,
        lang_override: parsed.lang.as_deref().and_then(state::Lang::from_tag),
    };
    if let Some(tag) = &parsed.lang
        && opts.lang_override.is_none()
    {
        tracing::warn!(tag, "unrecognized --lang value, keeping saved language");
    }

    tracing::info!(refresh = opts.refresh, "Mercado starting");
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Mercado exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn mercado_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::MercadoTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
