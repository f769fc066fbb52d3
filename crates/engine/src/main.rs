//! Curated Challenges engine - catalog check entry point.
//!
//! Loads and validates the challenge catalog the way the host game would at
//! startup, then lists what was registered. Given a room (`boss_treasure`,
//! `victory` or `true_victory`), also lists which conditions of each challenge
//! are checked on entering it. Usage:
//!
//! ```text
//! curated-engine [CATALOG_PATH] [ROOM]
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curated_domain::{RoomKind, TriggerContext};
use curated_engine::infrastructure::{
    catalog::load_registry,
    settings::{load_dotenv_from, EngineSettings},
};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine is usually run from `crates/engine`).
    load_dotenv_from(&repo_root());

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curated_engine=debug,curated_domain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let mut settings = EngineSettings::from_env();
    if let Some(path) = args.next() {
        settings.catalog_path = PathBuf::from(path);
    }
    let room = args.next().map(|arg| arg.parse::<RoomKind>()).transpose()?;

    tracing::info!(
        catalog = %settings.catalog_path.display(),
        victory_text_key = %settings.victory_text_key,
        "Checking challenge catalog"
    );

    let registry = load_registry(&settings.catalog_path).with_context(|| {
        format!(
            "challenge catalog {} failed to load",
            settings.catalog_path.display()
        )
    })?;

    for challenge in registry.iter() {
        let kinds: Vec<&str> = challenge
            .win_condition_logic()
            .iter()
            .map(|condition| condition.kind().as_str())
            .collect();
        tracing::info!(
            id = %challenge.id(),
            name = %challenge.name(),
            description = %challenge.description(),
            achievement = %challenge.id().achievement(),
            win_conditions = ?kinds,
            "Registered challenge"
        );
        if let Some(room) = room {
            let context = TriggerContext::for_room(room);
            let checked: Vec<&str> = challenge
                .win_condition_logic()
                .iter()
                .filter(|condition| context.admits(condition))
                .map(|condition| condition.kind().as_str())
                .collect();
            tracing::info!(id = %challenge.id(), room = %room, checked = ?checked, "Conditions checked in room");
        }
        if kinds.is_empty() {
            tracing::warn!(id = %challenge.id(), "Challenge has no win conditions and can never be won");
        }
    }

    tracing::info!(challenges = registry.len(), "Catalog OK");
    Ok(())
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}
