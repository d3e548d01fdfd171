//! Filesystem locations for configuration, cache, data, and logs.
//!
//! Follows the XDG layout: `~/.config/mercado` for settings and logs,
//! `~/.cache/mercado` for the catalog cache envelope, and
//! `~/.local/share/mercado` for the optional local item snapshot used as the
//! last-resort catalog source.

use std::env;
use std::path::{Path, PathBuf};

/// What: Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/mercado`, ensuring it exists.
///
/// Inputs: none
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("mercado");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for Mercado (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    // Prefer HOME ~/.config/mercado first
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    // Fallback: use XDG_CONFIG_HOME (or default to ~/.config) and ensure
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("mercado");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `~/.config/mercado/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Cache directory: `$XDG_CACHE_HOME/mercado` or `~/.cache/mercado` (ensured to exist).
#[must_use]
pub fn cache_dir() -> PathBuf {
    let base = xdg_base_dir("XDG_CACHE_HOME", &[".cache"]);
    let dir = base.join("mercado");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Data directory: `$XDG_DATA_HOME/mercado` or `~/.local/share/mercado` (ensured to exist).
#[must_use]
pub fn data_dir() -> PathBuf {
    let base = xdg_base_dir("XDG_DATA_HOME", &[".local", "share"]);
    let dir = base.join("mercado");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of the on-disk catalog cache envelope.
#[must_use]
pub fn catalog_cache_file() -> PathBuf {
    cache_dir().join("items_cache.json")
}

/// Path of the local item snapshot used when every mirror fails.
#[must_use]
pub fn fallback_items_file() -> PathBuf {
    data_dir().join("items.json")
}

/// Path of the settings file.
#[must_use]
pub fn settings_file() -> PathBuf {
    config_dir().join("settings.toml")
}
