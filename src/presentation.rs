/// Outbound side of the session: everything it asks the screen and speakers
/// to do.  Calls are fire-and-forget; nothing flows back through here.

use std::time::Duration;

use crate::entities::{FruitId, FruitKind, SoundCue, SpawnIntent};

pub trait Presentation {
    fn spawn_visual(&mut self, spawn: SpawnIntent);
    fn remove_visual(&mut self, id: FruitId);
    /// Drop every fruit visual, the end screen and any transient messages.
    fn clear_visuals(&mut self);
    fn update_target_display(&mut self, kind: FruitKind);
    fn highlight_target_correct(&mut self);
    fn show_transient_message(&mut self, text: &str, duration: Duration);
    fn update_score_display(&mut self, score: u32);
    fn update_wrong_count_display(&mut self, count: u32);
    fn show_end_screen(&mut self, final_score: u32, reward: &str);
    fn play_sound(&mut self, cue: SoundCue);
    fn exit_session(&mut self);
}

/// One `Presentation` call captured as data.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    SpawnVisual(SpawnIntent),
    RemoveVisual(FruitId),
    ClearVisuals,
    UpdateTargetDisplay(FruitKind),
    HighlightTargetCorrect,
    ShowTransientMessage { text: String, duration: Duration },
    UpdateScoreDisplay(u32),
    UpdateWrongCountDisplay(u32),
    ShowEndScreen { final_score: u32, reward: String },
    PlaySound(SoundCue),
    ExitSession,
}

/// Records every call in order.
impl Presentation for Vec<Intent> {
    fn spawn_visual(&mut self, spawn: SpawnIntent) {
        self.push(Intent::SpawnVisual(spawn));
    }

    fn remove_visual(&mut self, id: FruitId) {
        self.push(Intent::RemoveVisual(id));
    }

    fn clear_visuals(&mut self) {
        self.push(Intent::ClearVisuals);
    }

    fn update_target_display(&mut self, kind: FruitKind) {
        self.push(Intent::UpdateTargetDisplay(kind));
    }

    fn highlight_target_correct(&mut self) {
        self.push(Intent::HighlightTargetCorrect);
    }

    fn show_transient_message(&mut self, text: &str, duration: Duration) {
        self.push(Intent::ShowTransientMessage {
            text: text.to_string(),
            duration,
        });
    }

    fn update_score_display(&mut self, score: u32) {
        self.push(Intent::UpdateScoreDisplay(score));
    }

    fn update_wrong_count_display(&mut self, count: u32) {
        self.push(Intent::UpdateWrongCountDisplay(count));
    }

    fn show_end_screen(&mut self, final_score: u32, reward: &str) {
        self.push(Intent::ShowEndScreen {
            final_score,
            reward: reward.to_string(),
        });
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.push(Intent::PlaySound(cue));
    }

    fn exit_session(&mut self) {
        self.push(Intent::ExitSession);
    }
}
