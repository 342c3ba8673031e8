/// The round state machine.
///
/// `GameSession` owns the counters, the target fruit and the two periodic
/// timers.  Inbound events are plain method calls; every visible effect goes
/// out through a `Presentation`.  Events that make no sense in the current
/// phase are dropped.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::compute::{draw_fruit, reward_tier, roll_spawn, threshold_reached};
use crate::config::{FruitCatalog, GameConfig};
use crate::entities::{FruitId, FruitKind, Phase, RoundState, SoundCue};
use crate::error::ConfigError;
use crate::presentation::Presentation;
use crate::timer::PeriodicTimer;

pub const WRONG_SELECTION_TEXT: &str = "Wrong Selection!";

#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    catalog: FruitCatalog,
    round: RoundState,
    spawn_timer: PeriodicTimer,
    rotate_timer: PeriodicTimer,
    exited: bool,
}

impl GameSession {
    /// Fails fast on an invalid config (empty catalog, out-of-range timing).
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = FruitCatalog::new(config.fruits.clone())?;
        Ok(GameSession {
            spawn_timer: PeriodicTimer::new(config.spawn_period()),
            rotate_timer: PeriodicTimer::new(config.rotate_period()),
            catalog,
            config,
            round: RoundState::idle(),
            exited: false,
        })
    }

    // ── Read access ─────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn wrong_count(&self) -> u32 {
        self.round.wrong_count
    }

    pub fn target(&self) -> Option<FruitKind> {
        self.round.target
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn spawn_timer(&self) -> &PeriodicTimer {
        &self.spawn_timer
    }

    pub fn rotate_timer(&self) -> &PeriodicTimer {
        &self.rotate_timer
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// `Idle | Ended → Running`.  Ignored while a round is already running.
    pub fn start(&mut self, rng: &mut impl Rng, out: &mut impl Presentation) {
        if self.round.phase == Phase::Running {
            trace!("start ignored: round already running");
            return;
        }
        self.round = RoundState {
            phase: Phase::Running,
            ..RoundState::idle()
        };
        out.clear_visuals();
        out.update_score_display(0);
        out.update_wrong_count_display(0);

        self.spawn_timer.start();
        self.rotate_timer.start();

        info!("round started");
        self.roll_target(rng, out);
    }

    /// Feed elapsed time to both timers and dispatch whatever ticks came due.
    /// Spawn ticks go first when both are due in the same call.
    pub fn advance(&mut self, dt: Duration, rng: &mut impl Rng, out: &mut impl Presentation) {
        let spawns = self.spawn_timer.advance(dt);
        let rotations = self.rotate_timer.advance(dt);
        for _ in 0..spawns {
            self.on_spawn_tick(rng, out);
        }
        for _ in 0..rotations {
            self.on_rotate_tick(rng, out);
        }
    }

    // ── Timer events ────────────────────────────────────────────────────────

    pub fn on_spawn_tick(&mut self, rng: &mut impl Rng, out: &mut impl Presentation) {
        if self.round.phase != Phase::Running {
            trace!(phase = ?self.round.phase, "spawn tick ignored");
            return;
        }
        let spawn = roll_spawn(&self.catalog, &self.config.fall_duration, rng);
        trace!(kind = %spawn.kind, x = spawn.x, fall = ?spawn.fall_duration, "spawn");
        out.spawn_visual(spawn);
    }

    pub fn on_rotate_tick(&mut self, rng: &mut impl Rng, out: &mut impl Presentation) {
        if self.round.phase != Phase::Running {
            trace!(phase = ?self.round.phase, "rotate tick ignored");
            return;
        }
        self.roll_target(rng, out);
    }

    // ── Input events ────────────────────────────────────────────────────────

    pub fn on_fruit_clicked(
        &mut self,
        kind: FruitKind,
        id: FruitId,
        rng: &mut impl Rng,
        out: &mut impl Presentation,
    ) {
        if self.round.phase != Phase::Running {
            trace!(phase = ?self.round.phase, "fruit click ignored");
            return;
        }
        if self.round.target != Some(kind) {
            debug!(clicked = %kind, "clicked a fruit that is not the target");
            self.register_wrong(out);
            return;
        }

        self.round.score += 1;
        out.remove_visual(id);
        out.update_score_display(self.round.score);
        out.play_sound(SoundCue::Correct);
        debug!(score = self.round.score, "correct selection");

        // Re-roll right away.  The rotate timer keeps its own schedule.
        // The highlight lands on the new name and lasts until the next change.
        self.roll_target(rng, out);
        out.highlight_target_correct();
    }

    /// A click that hit neither a fruit nor a control.
    pub fn on_misc_click(&mut self, out: &mut impl Presentation) {
        if self.round.phase != Phase::Running {
            trace!(phase = ?self.round.phase, "misc click ignored");
            return;
        }
        self.register_wrong(out);
    }

    pub fn on_quit_clicked(&mut self, out: &mut impl Presentation) {
        info!(phase = ?self.round.phase, score = self.round.score, "quit requested");
        self.spawn_timer.stop();
        self.rotate_timer.stop();
        self.exited = true;
        out.exit_session();
    }

    pub fn on_play_again_clicked(&mut self, rng: &mut impl Rng, out: &mut impl Presentation) {
        if self.round.phase != Phase::Ended {
            trace!(phase = ?self.round.phase, "play again ignored");
            return;
        }
        self.start(rng, out);
    }

    // ── Internals ───────────────────────────────────────────────────────────

    fn roll_target(&mut self, rng: &mut impl Rng, out: &mut impl Presentation) {
        let kind = draw_fruit(&self.catalog, rng);
        self.round.target = Some(kind);
        debug!(fruit = %kind, "target changed");
        out.update_target_display(kind);
    }

    fn register_wrong(&mut self, out: &mut impl Presentation) {
        self.round.wrong_count += 1;
        out.update_wrong_count_display(self.round.wrong_count);
        out.play_sound(SoundCue::Wrong);
        out.show_transient_message(WRONG_SELECTION_TEXT, self.config.wrong_message_time());

        if threshold_reached(self.round.wrong_count, self.config.max_wrong_selections) {
            self.end_round(out);
        }
    }

    fn end_round(&mut self, out: &mut impl Presentation) {
        self.round.phase = Phase::Ended;
        self.spawn_timer.stop();
        self.rotate_timer.stop();

        let reward = reward_tier(self.round.score);
        info!(
            score = self.round.score,
            wrong = self.round.wrong_count,
            reward = reward.text(),
            "round ended"
        );
        out.clear_visuals();
        out.show_end_screen(self.round.score, reward.text());
    }
}
