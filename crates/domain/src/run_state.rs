//! Read-only view of the current run.
//!
//! Win conditions query the host game through this trait at evaluation
//! time. Nothing is cached: every call reflects the live run.

use crate::{CardId, RelicId};

/// Live, read-only queries against the player's current run.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RunState: Send + Sync {
    /// Current ascension level (0 when not playing ascension).
    fn ascension_level(&self) -> u32;

    /// Current act number, starting at 1.
    fn act_num(&self) -> u32;

    fn max_hp(&self) -> i32;

    fn gold(&self) -> i32;

    /// Counter of the given relic, or `None` when the player does not own it.
    fn relic_counter(&self, relic: &RelicId) -> Option<i32>;

    /// Ids of every card in the master deck, in deck order.
    fn master_deck(&self) -> Vec<CardId>;
}

/// True iff any card in the master deck has the given id.
pub fn deck_contains(state: &dyn RunState, card: &str) -> bool {
    state.master_deck().iter().any(|c| c.as_str() == card)
}
