//! Victory screen transition.

use std::sync::Arc;

use curated_domain::ScreenMode;

use crate::infrastructure::ports::{LocalizationPort, PresentationPort};

/// Banner shown when the string table has no victory text.
pub const FALLBACK_VICTORY_TEXT: &str = "Victory!";

/// Stops the run's audio and clock and switches to the victory screen.
pub struct VictoryScreenTransition {
    presentation: Arc<dyn PresentationPort>,
    banner_text: String,
}

impl VictoryScreenTransition {
    /// Resolve the banner text once, up front.
    pub fn new(
        presentation: Arc<dyn PresentationPort>,
        localization: &dyn LocalizationPort,
        text_key: &str,
    ) -> Self {
        let banner_text = localization.ui_text(text_key, 0).unwrap_or_else(|| {
            tracing::warn!(
                key = %text_key,
                fallback = FALLBACK_VICTORY_TEXT,
                "Victory banner text missing from string table"
            );
            FALLBACK_VICTORY_TEXT.to_string()
        });

        Self {
            presentation,
            banner_text,
        }
    }

    pub fn banner_text(&self) -> &str {
        &self.banner_text
    }

    pub fn open(&self) {
        let presentation = &self.presentation;
        presentation.silence_temp_bgm();
        presentation.silence_bgm();
        presentation.play_boss_stinger();
        presentation.stop_clock();
        presentation.open_victory_screen();
        presentation.set_screen(ScreenMode::Victory);
        presentation.show_banner(&self.banner_text);
    }
}
