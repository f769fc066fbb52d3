//! JSON challenge catalog.
//!
//! Challenge content is configuration data. The catalog is a single JSON
//! document listing challenge definitions in registration order:
//!
//! ```json
//! {
//!   "challenges": [
//!     {
//!       "id": "Pauper",
//!       "name": "Pauper",
//!       "description": "Reach 999 gold.",
//!       "winConditions": [{ "type": "gold_threshold", "threshold": 999 }]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use curated_domain::{ChallengeDefinition, ChallengeRegistry, DomainError};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid challenge '{challenge}': {source}")]
    Invalid {
        challenge: String,
        #[source]
        source: DomainError,
    },
}

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCatalog {
    #[serde(default)]
    pub challenges: Vec<ChallengeDefinition>,
}

impl ChallengeCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validate every win condition and build the registry.
    pub fn into_registry(self) -> Result<ChallengeRegistry, CatalogError> {
        let mut registry = ChallengeRegistry::new();
        for challenge in self.challenges {
            let id = challenge.id().to_string();
            for condition in challenge.win_condition_logic() {
                condition.validate().map_err(|source| CatalogError::Invalid {
                    challenge: id.clone(),
                    source,
                })?;
            }
            registry
                .register(challenge)
                .map_err(|source| CatalogError::Invalid {
                    challenge: id,
                    source,
                })?;
        }

        tracing::debug!(challenges = registry.len(), "Challenge catalog validated");
        Ok(registry)
    }
}

/// Read, validate and register the catalog at `path`.
pub fn load_registry(path: &Path) -> Result<ChallengeRegistry, CatalogError> {
    let catalog = ChallengeCatalog::load(path)?;
    let registry = catalog.into_registry()?;
    tracing::info!(
        path = %path.display(),
        challenges = registry.len(),
        "Loaded challenge catalog"
    );
    Ok(registry)
}
