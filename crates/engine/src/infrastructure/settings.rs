//! Environment-driven engine settings.

use std::path::{Path, PathBuf};

/// Default location of the challenge catalog, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "challenges.json";

/// String-table key holding the victory banner text (entry 0).
pub const DEFAULT_VICTORY_TEXT_KEY: &str = "CuratedChallenges:VictoryScreenText";

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// JSON challenge catalog to load at startup.
    pub catalog_path: PathBuf,
    /// Localization key for the victory banner.
    pub victory_text_key: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            victory_text_key: DEFAULT_VICTORY_TEXT_KEY.to_string(),
        }
    }
}

impl EngineSettings {
    /// Read settings from the process environment.
    ///
    /// - `CURATED_CATALOG_PATH`
    /// - `CURATED_VICTORY_TEXT_KEY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup. Blank values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            catalog_path: read("CURATED_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            victory_text_key: read("CURATED_VICTORY_TEXT_KEY")
                .unwrap_or(defaults.victory_text_key),
        }
    }
}

/// Load `.env.local` then `.env` from `root`, if present. Variables already
/// set in the environment win.
pub fn load_dotenv_from(root: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = root.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load env file");
            }
        }
    }
}
