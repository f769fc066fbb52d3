//! Victory evaluation use case.
//!
//! Decides whether the active challenge has been won and, if so, fires the
//! victory exactly once. There are two ways in:
//!
//! 1. **Room checks**: entering the boss treasure room, the victory room or the
//!    true victory room runs `check_victory_conditions`, which only considers
//!    conditions that apply at the active rooms.
//! 2. **Event checks**: right after a state change (card removed, gold or max HP
//!    changed, Circlet counter changed) the matching variant-filtered check
//!    re-evaluates only conditions of that variant, ignoring room flags.
//!
//! Both paths walk the challenge's conditions in definition order and stop at
//! the first satisfied one.
//!
//! # Completion guard
//!
//! The evaluator remembers which challenges were won this run. Any later
//! check or victory for the same challenge is a no-op until `reset_run`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashSet;
use tracing::{debug, info, instrument, warn};

use curated_domain::{
    circlet_count, deck_contains, AchievementId, ChallengeDefinition, ChallengeId,
    ChallengeRegistry, GameEvent, RoomPhase, TriggerContext, WinCondition, WinConditionKind,
};

use crate::infrastructure::ports::{AchievementPort, ClockPort, DungeonPort, RunState};

mod screen;


pub use screen::{VictoryScreenTransition, FALLBACK_VICTORY_TEXT};

/// Ascension level that additionally unlocks the `_A20` achievement.
pub const ASCENSION_VICTORY_LEVEL: u32 = 20;

// =============================================================================
// Result Types
// =============================================================================

/// A completed challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryRecord {
    pub challenge_id: ChallengeId,
    /// Achievements requested from the achievement subsystem, base id first
    pub achievements: Vec<AchievementId>,
    /// Variant of the condition that won, `None` for a direct `handle_victory`
    pub won_by: Option<WinConditionKind>,
    pub completed_at: DateTime<Utc>,
}

/// What an evaluation entry point decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VictoryOutcome {
    /// No challenge is registered under the id; nothing happened.
    ChallengeNotFound,
    /// No considered condition is satisfied.
    NotMet,
    /// The challenge was already won this run; nothing happened.
    AlreadyCompleted,
    /// The challenge was won by this call.
    Victory(VictoryRecord),
}

impl VictoryOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, VictoryOutcome::Victory(_))
    }
}

// =============================================================================
// Evaluator
// =============================================================================

/// Evaluates challenge win conditions and fires the victory transition.
pub struct VictoryEvaluator {
    registry: Arc<ChallengeRegistry>,
    run: Arc<dyn RunState>,
    achievements: Arc<dyn AchievementPort>,
    dungeon: Arc<dyn DungeonPort>,
    screen: VictoryScreenTransition,
    clock: Arc<dyn ClockPort>,
    completed: DashSet<ChallengeId>,
}

impl VictoryEvaluator {
    pub fn new(
        registry: Arc<ChallengeRegistry>,
        run: Arc<dyn RunState>,
        achievements: Arc<dyn AchievementPort>,
        dungeon: Arc<dyn DungeonPort>,
        screen: VictoryScreenTransition,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            registry,
            run,
            achievements,
            dungeon,
            screen,
            clock,
            completed: DashSet::new(),
        }
    }

    /// Room-triggered check.
    ///
    /// Considers each condition that applies at one of the active rooms, in
    /// definition order, and wins on the first satisfied one.
    #[instrument(skip(self))]
    pub fn check_victory_conditions(
        &self,
        challenge_id: &str,
        context: TriggerContext,
    ) -> VictoryOutcome {
        let challenge = match self.active_challenge(challenge_id) {
            Ok(challenge) => challenge,
            Err(outcome) => return outcome,
        };

        if context.is_empty() {
            debug!("No special room active, nothing to check");
            return VictoryOutcome::NotMet;
        }

        for condition in challenge.win_condition_logic() {
            if !context.admits(condition) {
                continue;
            }
            if self.evaluate(condition) {
                return self.complete(challenge.id(), Some(condition.kind()));
            }
        }

        VictoryOutcome::NotMet
    }

    /// Re-check card removal conditions after a card left the deck.
    pub fn check_remove_card_win_conditions(&self, challenge_id: &str) -> VictoryOutcome {
        self.check_variant(challenge_id, WinConditionKind::RemoveAllCards)
    }

    /// Re-check max HP conditions after max HP changed.
    pub fn check_max_hp_win_condition(&self, challenge_id: &str) -> VictoryOutcome {
        self.check_variant(challenge_id, WinConditionKind::MaxHp)
    }

    /// Re-check gold conditions after gold changed.
    pub fn check_gold_threshold_win_condition(&self, challenge_id: &str) -> VictoryOutcome {
        self.check_variant(challenge_id, WinConditionKind::GoldThreshold)
    }

    /// Re-check Circlet conditions after the Circlet counter changed.
    pub fn check_circlet_count_win_condition(&self, challenge_id: &str) -> VictoryOutcome {
        self.check_variant(challenge_id, WinConditionKind::CircletCount)
    }

    /// Variant-filtered check: room flags are ignored, and conditions of other
    /// variants are skipped without being evaluated.
    #[instrument(skip(self))]
    fn check_variant(&self, challenge_id: &str, kind: WinConditionKind) -> VictoryOutcome {
        let challenge = match self.active_challenge(challenge_id) {
            Ok(challenge) => challenge,
            Err(outcome) => return outcome,
        };

        for condition in challenge
            .win_condition_logic()
            .iter()
            .filter(|c| c.kind() == kind)
        {
            if let WinCondition::CircletCount { required_count } = condition {
                debug!(
                    required_count,
                    current = circlet_count(self.run.as_ref()),
                    "Checking Circlet count"
                );
            }
            if self.evaluate(condition) {
                return self.complete(challenge.id(), Some(kind));
            }
        }

        VictoryOutcome::NotMet
    }

    /// Route a gameplay event to the check that can be affected by it.
    #[instrument(skip(self))]
    pub fn handle_event(&self, challenge_id: &str, event: &GameEvent) -> VictoryOutcome {
        if let GameEvent::RoomEntered { room } = event {
            return self.check_victory_conditions(challenge_id, TriggerContext::for_room(*room));
        }

        match event.affected_kind() {
            Some(kind) => self.check_variant(challenge_id, kind),
            None => match self.active_challenge(challenge_id) {
                Ok(_) => VictoryOutcome::NotMet,
                Err(outcome) => outcome,
            },
        }
    }

    /// Fire the victory for a registered challenge.
    ///
    /// Unlocks the challenge achievement (and the `_A20` one on ascension 20),
    /// marks the current room complete and opens the victory screen. Repeated
    /// calls for the same challenge in one run do nothing.
    #[instrument(skip(self))]
    pub fn handle_victory(&self, challenge_id: &str) -> VictoryOutcome {
        let Some(challenge) = self.registry.get(challenge_id) else {
            warn!("Victory requested for an unregistered challenge");
            return VictoryOutcome::ChallengeNotFound;
        };
        self.complete(challenge.id(), None)
    }

    /// True iff any card in the master deck has the given id.
    pub fn check_deck_for_card(&self, card_id: &str) -> bool {
        deck_contains(self.run.as_ref(), card_id)
    }

    pub fn check_no_deck_for_card(&self, card_id: &str) -> bool {
        !self.check_deck_for_card(card_id)
    }

    /// Whether the challenge has been won during the current run.
    pub fn is_completed(&self, challenge_id: &str) -> bool {
        self.completed.contains(challenge_id)
    }

    /// Forget completed challenges; call when a new run starts.
    pub fn reset_run(&self) {
        debug!(cleared = self.completed.len(), "Resetting completed challenges");
        self.completed.clear();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn active_challenge(&self, challenge_id: &str) -> Result<&ChallengeDefinition, VictoryOutcome> {
        let Some(challenge) = self.registry.get(challenge_id) else {
            debug!("No challenge registered for id");
            return Err(VictoryOutcome::ChallengeNotFound);
        };
        if self.is_completed(challenge_id) {
            debug!("Challenge already completed this run");
            return Err(VictoryOutcome::AlreadyCompleted);
        }
        Ok(challenge)
    }

    fn evaluate(&self, condition: &WinCondition) -> bool {
        let satisfied = condition.is_satisfied(self.run.as_ref());
        debug!(condition = %condition.kind(), satisfied, "Evaluated win condition");
        satisfied
    }

    fn complete(
        &self,
        challenge_id: &ChallengeId,
        won_by: Option<WinConditionKind>,
    ) -> VictoryOutcome {
        if !self.completed.insert(challenge_id.clone()) {
            warn!(
                challenge_id = %challenge_id,
                "Challenge already completed this run, ignoring repeated victory"
            );
            return VictoryOutcome::AlreadyCompleted;
        }

        let mut achievements = vec![challenge_id.achievement()];
        if self.run.ascension_level() == ASCENSION_VICTORY_LEVEL {
            achievements.push(challenge_id.ascension_achievement());
        }
        for achievement in &achievements {
            self.achievements.unlock_achievement(achievement);
        }

        self.dungeon.set_room_phase(RoomPhase::Complete);
        self.screen.open();

        info!(
            challenge_id = %challenge_id,
            won_by = ?won_by,
            achievements = achievements.len(),
            "Challenge won"
        );

        VictoryOutcome::Victory(VictoryRecord {
            challenge_id: challenge_id.clone(),
            achievements,
            won_by,
            completed_at: self.clock.now(),
        })
    }
}
