//! Theme preference persistence.
//!
//! The only state that survives a session: a single `{"theme": "dark"|"light"}`
//! JSON file under the user's config directory. Read once at startup, written
//! on every toggle.

use crate::model::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prefs {
    pub theme: Theme,
}

impl Default for Prefs {
    fn default() -> Self {
        Self { theme: Theme::Dark }
    }
}

fn prefs_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("no config directory available")?;
    Ok(base.join("secfolio").join("prefs.json"))
}

/// Load preferences, falling back to the defaults when the file is absent or
/// unreadable. A corrupt preference file is not worth an error.
pub fn load() -> Prefs {
    prefs_path()
        .ok()
        .map(|p| load_from(&p))
        .unwrap_or_default()
}

pub fn load_from(path: &Path) -> Prefs {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

/// Persist preferences to the default location.
pub fn save(prefs: &Prefs) -> Result<PathBuf> {
    let path = prefs_path()?;
    save_to(prefs, &path)?;
    Ok(path)
}

pub fn save_to(prefs: &Prefs, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
