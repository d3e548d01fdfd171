//! Persisted user settings (TOML file under the config directory).
//!
//! Currently a single concern: the selected display language, written
//! immediately when the user toggles it so the choice survives restarts.

use std::path::Path;

use tracing::{debug, warn};

use crate::state::Lang;

/// On-disk settings shape.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Selected display language tag (`en` / `es`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Settings {
    /// Resolved language, defaulting to Spanish like the original viewer.
    #[must_use]
    pub fn lang(&self) -> Lang {
        self.language
            .as_deref()
            .and_then(Lang::from_tag)
            .unwrap_or(Lang::Es)
    }
}

/// What: Load settings from `path`.
///
/// Inputs:
/// - `path`: Settings file location.
///
/// Output:
/// - Parsed settings; a missing or malformed file yields the defaults.
#[must_use]
pub fn load(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(body) => match toml::from_str(&body) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed settings file, using defaults");
                Settings::default()
            }
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no settings file, using defaults");
            Settings::default()
        }
    }
}

/// What: Persist settings to `path`.
///
/// Inputs:
/// - `path`: Settings file location.
/// - `settings`: Values to write.
///
/// Output:
/// - Writes TOML; failures are logged and swallowed (a read-only config dir
///   must not break the session).
pub fn save(path: &Path, settings: &Settings) {
    match toml::to_string_pretty(settings) {
        Ok(body) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = std::fs::write(path, body) {
                warn!(path = %path.display(), error = %e, "failed to write settings");
            }
        }
        Err(e) => warn!(error = %e, "failed to serialize settings"),
    }
}

/// Persist just the language selection.
pub fn save_language(path: &Path, lang: Lang) {
    let mut settings = load(path);
    settings.language = Some(lang.as_tag().to_string());
    save(path, &settings);
}
