use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use tracing::{debug, info, warn};

mod parse_settings;

pub use parse_settings::parse_settings;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Path to a `settings.conf`
///
/// Output:
/// - Parsed `Settings`; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            let unknown = parse_settings(&content, &mut out);
            if !unknown.is_empty() {
                warn!(path = %path.display(), keys = ?unknown, "ignoring unknown settings keys");
            }
            info!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG, once per process.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    SETTINGS
        .get_or_init(|| {
            resolve_settings_config_path().map_or_else(
                || {
                    debug!("no settings.conf found; using defaults");
                    Settings::default()
                },
                |path| load_settings_from(&path),
            )
        })
        .clone()
}
