//! Application state and composition.

use std::sync::Arc;

use curated_domain::ChallengeRegistry;

use crate::infrastructure::{
    catalog::{load_registry, CatalogError},
    clock::SystemClock,
    ports::{
        AchievementPort, ClockPort, DungeonPort, LocalizationPort, PresentationPort, RunState,
    },
    settings::EngineSettings,
};
use crate::use_cases::{VictoryEvaluator, VictoryScreenTransition};

/// Everything the host game provides.
#[derive(Clone)]
pub struct HostPorts {
    pub run: Arc<dyn RunState>,
    pub achievements: Arc<dyn AchievementPort>,
    pub dungeon: Arc<dyn DungeonPort>,
    pub presentation: Arc<dyn PresentationPort>,
    pub localization: Arc<dyn LocalizationPort>,
}

/// Main application state.
pub struct App {
    pub registry: Arc<ChallengeRegistry>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub victory: Arc<VictoryEvaluator>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(registry: ChallengeRegistry, host: HostPorts, settings: &EngineSettings) -> Self {
        Self::with_clock(registry, host, settings, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(
        registry: ChallengeRegistry,
        host: HostPorts,
        settings: &EngineSettings,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let registry = Arc::new(registry);

        let screen = VictoryScreenTransition::new(
            host.presentation.clone(),
            host.localization.as_ref(),
            &settings.victory_text_key,
        );
        let victory = Arc::new(VictoryEvaluator::new(
            registry.clone(),
            host.run,
            host.achievements,
            host.dungeon,
            screen,
            clock,
        ));

        Self {
            registry,
            use_cases: UseCases { victory },
        }
    }

    /// Load the configured catalog and wire the app around it.
    pub fn from_settings(settings: &EngineSettings, host: HostPorts) -> Result<Self, CatalogError> {
        let registry = load_registry(&settings.catalog_path)?;
        Ok(Self::new(registry, host, settings))
    }
}
