//! In-memory host game.
//!
//! Implements the run view and every host port on one struct, recording the
//! side effects in call order so flow tests can assert on the full sequence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use curated_domain::{
    AchievementId, CardId, ChallengeRegistry, RelicId, RoomPhase, RunState, ScreenMode,
};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::{
    AchievementPort, DungeonPort, LocalizationPort, PresentationPort,
};
use crate::infrastructure::settings::DEFAULT_VICTORY_TEXT_KEY;
use crate::use_cases::victory::{VictoryEvaluator, VictoryScreenTransition};

pub const FAKE_BANNER_TEXT: &str = "Challenge Complete!";

/// Mutable run values behind the fake.
#[derive(Debug, Clone, Default)]
pub struct RunSnapshot {
    pub ascension_level: u32,
    pub act_num: u32,
    pub max_hp: i32,
    pub gold: i32,
    pub relic_counters: HashMap<RelicId, i32>,
    pub deck: Vec<CardId>,
}

impl RunSnapshot {
    /// A fresh Ironclad run in act 1.
    pub fn starting_run() -> Self {
        let mut deck: Vec<CardId> = Vec::new();
        deck.extend((0..5).map(|_| CardId::new("Strike_R")));
        deck.extend((0..4).map(|_| CardId::new("Defend_R")));
        deck.push(CardId::new("Bash"));

        Self {
            ascension_level: 0,
            act_num: 1,
            max_hp: 80,
            gold: 99,
            relic_counters: HashMap::new(),
            deck,
        }
    }
}

/// Side effect observed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Unlock(String),
    RoomPhase(RoomPhase),
    SilenceTempBgm,
    SilenceBgm,
    BossStinger,
    StopClock,
    OpenVictoryScreen,
    Screen(ScreenMode),
    Banner(String),
}

#[derive(Default)]
pub struct FakeHost {
    run: Mutex<RunSnapshot>,
    calls: Mutex<Vec<HostCall>>,
    strings: HashMap<String, String>,
}

impl FakeHost {
    pub fn new() -> Arc<Self> {
        Self::with_run(RunSnapshot::starting_run())
    }

    pub fn with_run(run: RunSnapshot) -> Arc<Self> {
        let mut strings = HashMap::new();
        strings.insert(
            DEFAULT_VICTORY_TEXT_KEY.to_string(),
            FAKE_BANNER_TEXT.to_string(),
        );
        Arc::new(Self {
            run: Mutex::new(run),
            calls: Mutex::new(Vec::new()),
            strings,
        })
    }

    /// Host whose string table is empty.
    pub fn without_strings() -> Arc<Self> {
        Arc::new(Self {
            run: Mutex::new(RunSnapshot::starting_run()),
            ..Self::default()
        })
    }

    pub fn update(&self, f: impl FnOnce(&mut RunSnapshot)) {
        let mut run = self.run.lock().expect("run lock poisoned");
        f(&mut run);
    }

    pub fn remove_card(&self, card: &str) {
        self.update(|run| {
            if let Some(pos) = run.deck.iter().position(|c| c.as_str() == card) {
                run.deck.remove(pos);
            }
        });
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn unlocked(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Unlock(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().expect("calls lock poisoned").clear();
    }

    /// Evaluator wired to this host with a fixed clock.
    pub fn evaluator(self: &Arc<Self>, registry: Arc<ChallengeRegistry>) -> VictoryEvaluator {
        let screen = VictoryScreenTransition::new(
            self.clone(),
            &**self,
            DEFAULT_VICTORY_TEXT_KEY,
        );
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
        VictoryEvaluator::new(
            registry,
            self.clone(),
            self.clone(),
            self.clone(),
            screen,
            Arc::new(clock),
        )
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().expect("calls lock poisoned").push(call);
    }

    fn snapshot(&self) -> RunSnapshot {
        self.run.lock().expect("run lock poisoned").clone()
    }
}

impl RunState for FakeHost {
    fn ascension_level(&self) -> u32 {
        self.snapshot().ascension_level
    }

    fn act_num(&self) -> u32 {
        self.snapshot().act_num
    }

    fn max_hp(&self) -> i32 {
        self.snapshot().max_hp
    }

    fn gold(&self) -> i32 {
        self.snapshot().gold
    }

    fn relic_counter(&self, relic: &RelicId) -> Option<i32> {
        self.snapshot().relic_counters.get(relic).copied()
    }

    fn master_deck(&self) -> Vec<CardId> {
        self.snapshot().deck
    }
}

impl AchievementPort for FakeHost {
    fn unlock_achievement(&self, id: &AchievementId) {
        self.record(HostCall::Unlock(id.to_string()));
    }
}

impl DungeonPort for FakeHost {
    fn set_room_phase(&self, phase: RoomPhase) {
        self.record(HostCall::RoomPhase(phase));
    }
}

impl PresentationPort for FakeHost {
    fn silence_temp_bgm(&self) {
        self.record(HostCall::SilenceTempBgm);
    }

    fn silence_bgm(&self) {
        self.record(HostCall::SilenceBgm);
    }

    fn play_boss_stinger(&self) {
        self.record(HostCall::BossStinger);
    }

    fn stop_clock(&self) {
        self.record(HostCall::StopClock);
    }

    fn open_victory_screen(&self) {
        self.record(HostCall::OpenVictoryScreen);
    }

    fn set_screen(&self, mode: ScreenMode) {
        self.record(HostCall::Screen(mode));
    }

    fn show_banner(&self, text: &str) {
        self.record(HostCall::Banner(text.to_string()));
    }
}

impl LocalizationPort for FakeHost {
    fn ui_text(&self, key: &str, index: usize) -> Option<String> {
        if index != 0 {
            return None;
        }
        self.strings.get(key).cloned()
    }
}
