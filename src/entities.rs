/// All game entity types — pure data, no logic.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ── Fruit ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FruitKind {
    Apple,
    Watermelon,
    Cherry,
    Grapes,
    Orange,
}

impl FruitKind {
    pub const ALL: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Watermelon,
        FruitKind::Cherry,
        FruitKind::Grapes,
        FruitKind::Orange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Watermelon => "watermelon",
            FruitKind::Cherry => "cherry",
            FruitKind::Grapes => "grapes",
            FruitKind::Orange => "orange",
        }
    }
}

impl fmt::Display for FruitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of one spawned fruit visual.  Handed out by the presentation
/// side; the session only echoes it back when asking for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FruitId(pub u64);

/// Parameters for a new falling fruit.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnIntent {
    pub kind: FruitKind,
    /// Horizontal start position as a fraction of the play-area width, in `[0, 1)`.
    pub x: f32,
    /// Time the fruit takes to fall through the whole play area.
    pub fall_duration: Duration,
}

// ── Round ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the first `start()`.
    Idle,
    Running,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Wrong,
}

/// Mutable per-round counters.  Replaced wholesale by `start()`, never
/// carried over between rounds.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    pub score: u32,
    pub wrong_count: u32,
    /// `None` only while idle.
    pub target: Option<FruitKind>,
    pub phase: Phase,
}

impl RoundState {
    pub fn idle() -> Self {
        RoundState {
            score: 0,
            wrong_count: 0,
            target: None,
            phase: Phase::Idle,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        RoundState::idle()
    }
}

// ── Reward ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardTier {
    TryAgain,
    GoodJob,
    GreatWork,
    Excellent,
}

impl RewardTier {
    pub fn text(self) -> &'static str {
        match self {
            RewardTier::TryAgain => "Try Again!",
            RewardTier::GoodJob => "Good Job!",
            RewardTier::GreatWork => "Great Work!",
            RewardTier::Excellent => "Excellent!",
        }
    }
}
