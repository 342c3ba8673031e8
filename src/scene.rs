/// What is on screen, independent of how it gets drawn.
///
/// `Scene` is the presentation side of the game: it receives the session's
/// intents, owns every live fruit and overlay, ages them as time passes and
/// answers "what did the player click on".  The terminal renderer only reads
/// it.

use std::time::Duration;

use crate::entities::{FruitId, FruitKind, SoundCue, SpawnIntent};
use crate::presentation::Presentation;

/// Every fruit sprite is this many cells wide.
pub const FRUIT_WIDTH: u16 = 3;
pub const QUIT_LABEL: &str = "[ Quit ]";
pub const PLAY_AGAIN_LABEL: &str = "[ Play Again ]";
pub const MAX_WRONG_TEXT: &str = "Game Over! You reached max wrong selections.";

/// Length of the grow-then-shrink pulse on a correct pick.
pub const HIGHLIGHT_PULSE: Duration = Duration::from_millis(400);
/// Half-period of the pulsing game-over title.
pub const END_TITLE_PULSE: Duration = Duration::from_millis(500);

// ── Scene objects ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnedFruit {
    pub id: FruitId,
    pub kind: FruitKind,
    /// Fraction of the play-area width, `[0, 1)`.
    pub x: f32,
    pub fall_duration: Duration,
    pub age: Duration,
}

impl SpawnedFruit {
    /// How far down the play area the fruit is, `0.0` at the top.
    pub fn progress(&self) -> f32 {
        if self.fall_duration.is_zero() {
            return 1.0;
        }
        (self.age.as_secs_f32() / self.fall_duration.as_secs_f32()).min(1.0)
    }

    pub fn has_fallen_out(&self) -> bool {
        self.age >= self.fall_duration
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransientMessage {
    pub text: String,
    pub remaining: Duration,
    pub total: Duration,
}

impl TransientMessage {
    /// Fades linearly from 1.0 to 0.0 over its lifetime.
    pub fn alpha(&self) -> f32 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f32() / self.total.as_secs_f32()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EndScreen {
    pub final_score: u32,
    pub reward: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetHighlight {
    /// Time left in the scale pulse.  The colour stays until the target changes.
    pub pulse_remaining: Duration,
}

/// Result of hit-testing a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    Fruit(FruitId, FruitKind),
    Quit,
    PlayAgain,
    Nothing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        row == self.row && col >= self.col && col < self.col.saturating_add(self.width)
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Where things live on a `width × height` terminal.
///
///   row 0        target label, score
///   row 1        top border
///   rows 2..h-2  play area
///   row h-2      bottom border
///   row h-1      wrong count, quit button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
}

impl Layout {
    pub fn new(width: u16, height: u16) -> Self {
        Layout { width, height }
    }

    pub fn play_top(&self) -> u16 {
        2
    }

    /// Last row fruit may occupy.
    pub fn play_bottom(&self) -> u16 {
        self.height.saturating_sub(3).max(self.play_top())
    }

    pub fn fruit_col(&self, fruit: &SpawnedFruit) -> u16 {
        let span = self.width.saturating_sub(2 + FRUIT_WIDTH);
        1 + (fruit.x.clamp(0.0, 1.0) * span as f32) as u16
    }

    pub fn fruit_row(&self, fruit: &SpawnedFruit) -> u16 {
        let span = self.play_bottom() - self.play_top();
        self.play_top() + (fruit.progress() * span as f32).round() as u16
    }

    pub fn fruit_rect(&self, fruit: &SpawnedFruit) -> Rect {
        Rect {
            col: self.fruit_col(fruit),
            row: self.fruit_row(fruit),
            width: FRUIT_WIDTH,
        }
    }

    pub fn quit_button(&self) -> Rect {
        let width = QUIT_LABEL.len() as u16;
        Rect {
            col: self.width.saturating_sub(width + 1),
            row: self.height.saturating_sub(1),
            width,
        }
    }

    /// First row of the four-line end screen block.
    pub fn end_screen_top(&self) -> u16 {
        (self.height / 2).saturating_sub(3)
    }

    pub fn play_again_button(&self) -> Rect {
        let width = PLAY_AGAIN_LABEL.len() as u16;
        Rect {
            col: (self.width / 2).saturating_sub(width / 2),
            row: self.end_screen_top() + 5,
            width,
        }
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Scene {
    next_id: u64,
    pub fruits: Vec<SpawnedFruit>,
    pub target: Option<FruitKind>,
    pub highlight: Option<TargetHighlight>,
    pub score: u32,
    pub wrong_count: u32,
    pub messages: Vec<TransientMessage>,
    pub end_screen: Option<EndScreen>,
    /// Total time the scene has been advanced, drives looping effects.
    pub clock: Duration,
    sounds: Vec<SoundCue>,
    exit_requested: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Sound cues queued since the last call.
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }

    /// Age everything by `dt`; fruit that fell out and faded messages go away.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;

        for fruit in &mut self.fruits {
            fruit.age += dt;
        }
        self.fruits.retain(|f| !f.has_fallen_out());

        for msg in &mut self.messages {
            msg.remaining = msg.remaining.saturating_sub(dt);
        }
        self.messages.retain(|m| !m.remaining.is_zero());

        if let Some(h) = &mut self.highlight {
            h.pulse_remaining = h.pulse_remaining.saturating_sub(dt);
        }
    }

    /// Scale factor of the target label: 1.0 → 1.2 → 1.0 across the pulse.
    pub fn target_scale(&self) -> f32 {
        match &self.highlight {
            Some(h) if !h.pulse_remaining.is_zero() => {
                let total = HIGHLIGHT_PULSE.as_secs_f32();
                let half = total / 2.0;
                let left = h.pulse_remaining.as_secs_f32();
                let t = if left > half {
                    (total - left) / half
                } else {
                    left / half
                };
                1.0 + 0.2 * t.clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Whether the pulsing game-over title is in its enlarged half.
    pub fn end_title_enlarged(&self) -> bool {
        (self.clock.as_millis() / END_TITLE_PULSE.as_millis()) % 2 == 0
    }

    /// Topmost thing under `(col, row)`.  Fruit spawned later sit on top.
    pub fn hit_test(&self, col: u16, row: u16, layout: &Layout) -> Hit {
        if let Some(fruit) = self
            .fruits
            .iter()
            .rev()
            .find(|f| layout.fruit_rect(f).contains(col, row))
        {
            return Hit::Fruit(fruit.id, fruit.kind);
        }
        if layout.quit_button().contains(col, row) {
            return Hit::Quit;
        }
        if self.end_screen.is_some() && layout.play_again_button().contains(col, row) {
            return Hit::PlayAgain;
        }
        Hit::Nothing
    }
}

impl Presentation for Scene {
    fn spawn_visual(&mut self, spawn: SpawnIntent) {
        self.next_id += 1;
        self.fruits.push(SpawnedFruit {
            id: FruitId(self.next_id),
            kind: spawn.kind,
            x: spawn.x,
            fall_duration: spawn.fall_duration,
            age: Duration::ZERO,
        });
    }

    fn remove_visual(&mut self, id: FruitId) {
        self.fruits.retain(|f| f.id != id);
    }

    fn clear_visuals(&mut self) {
        self.fruits.clear();
        self.messages.clear();
        self.end_screen = None;
    }

    fn update_target_display(&mut self, kind: FruitKind) {
        self.target = Some(kind);
        self.highlight = None;
    }

    fn highlight_target_correct(&mut self) {
        self.highlight = Some(TargetHighlight {
            pulse_remaining: HIGHLIGHT_PULSE,
        });
    }

    fn show_transient_message(&mut self, text: &str, duration: Duration) {
        self.messages.push(TransientMessage {
            text: text.to_string(),
            remaining: duration,
            total: duration,
        });
    }

    fn update_score_display(&mut self, score: u32) {
        self.score = score;
    }

    fn update_wrong_count_display(&mut self, count: u32) {
        self.wrong_count = count;
    }

    fn show_end_screen(&mut self, final_score: u32, reward: &str) {
        self.end_screen = Some(EndScreen {
            final_score,
            reward: reward.to_string(),
        });
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    fn exit_session(&mut self) {
        self.exit_requested = true;
    }
}
