/// Pure game-rule functions.
///
/// Nothing here touches session state; every function maps its inputs (and,
/// where needed, an injected RNG) to a value.  Callers control determinism by
/// passing a seeded RNG.

use std::time::Duration;

use rand::Rng;

use crate::config::{FruitCatalog, SpawnRange};
use crate::entities::{FruitKind, RewardTier, SpawnIntent};

// ── Reward table ─────────────────────────────────────────────────────────────

pub fn reward_tier(score: u32) -> RewardTier {
    match score {
        0..=4 => RewardTier::TryAgain,
        5..=9 => RewardTier::GoodJob,
        10..=14 => RewardTier::GreatWork,
        _ => RewardTier::Excellent,
    }
}

// ── Random draws ─────────────────────────────────────────────────────────────

/// Uniform draw from the catalog.  Repeats are allowed.
pub fn draw_fruit(catalog: &FruitCatalog, rng: &mut impl Rng) -> FruitKind {
    let kinds = catalog.kinds();
    kinds[rng.gen_range(0..kinds.len())]
}

/// Roll a fresh falling fruit: random kind, random column, random fall time
/// in `[min, max)` seconds.
pub fn roll_spawn(
    catalog: &FruitCatalog,
    fall_duration: &SpawnRange<f32>,
    rng: &mut impl Rng,
) -> SpawnIntent {
    let kind = draw_fruit(catalog, rng);
    let x = rng.gen::<f32>();
    let seconds = rng.gen_range(fall_duration.min..fall_duration.max);
    SpawnIntent {
        kind,
        x,
        fall_duration: Duration::from_secs_f32(seconds),
    }
}

// ── Round end ────────────────────────────────────────────────────────────────

pub fn threshold_reached(wrong_count: u32, max_wrong_selections: u32) -> bool {
    wrong_count >= max_wrong_selections
}
