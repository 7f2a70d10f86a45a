use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::Settings;

pub const SETTINGS_ENV: &str = "VENDORDESK_SETTINGS";
pub const FIXTURES_DIR_ENV: &str = "VENDORDESK_FIXTURES_DIR";
pub const LOG_LEVEL_ENV: &str = "VENDORDESK_LOG_LEVEL";

impl Settings {
    /// Settings file named by `VENDORDESK_SETTINGS` (if any), then environment overrides.
    pub fn load() -> Result<Self> {
        let settings = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Settings::from_file(Path::new(&path))?,
            None => Settings::default(),
        };
        Ok(settings.apply_overrides(|key| std::env::var(key).ok()))
    }

    /// A missing file falls back to defaults; a malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Read settings {}", path.display()));
            }
        };
        serde_json::from_str(&raw).with_context(|| format!("Parse settings {}", path.display()))
    }

    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(FIXTURES_DIR_ENV).filter(|d| !d.is_empty()) {
            self.fixtures_dir = Some(PathBuf::from(dir));
        }
        let level = lookup(LOG_LEVEL_ENV).or_else(|| lookup("RUST_LOG"));
        if let Some(level) = level.filter(|l| !l.is_empty()) {
            self.log_level = level;
        }
        self
    }
}
