/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// scene.  No game logic is performed; this module only translates the
/// scene into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use fruit_picker::entities::{FruitKind, SoundCue};
use fruit_picker::scene::{
    Layout, Scene, SpawnedFruit, MAX_WRONG_TEXT, PLAY_AGAIN_LABEL, QUIT_LABEL,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_LABEL: Color = Color::White;
const C_TARGET_HIGHLIGHT: Color = Color::Green;
const C_MESSAGE: Color = Color::Red;
const C_MESSAGE_FADING: Color = Color::DarkRed;
const C_QUIT: Color = Color::Red;
const C_PLAY_AGAIN: Color = Color::Green;
const C_REWARD: Color = Color::Yellow;

fn fruit_sprite(kind: FruitKind) -> (&'static str, Color) {
    match kind {
        FruitKind::Apple => ("(●)", Color::Red),
        FruitKind::Watermelon => ("<≡>", Color::Green),
        FruitKind::Cherry => ("°∂°", Color::DarkRed),
        FruitKind::Grapes => ("∴∴∴", Color::Magenta),
        FruitKind::Orange => ("(◎)", Color::DarkYellow),
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, scene: &Scene, layout: &Layout) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, layout)?;
    draw_hud(out, scene, layout)?;

    for fruit in &scene.fruits {
        draw_fruit(out, fruit, layout)?;
    }
    for (i, msg) in scene.messages.iter().enumerate() {
        let color = if msg.alpha() > 0.5 { C_MESSAGE } else { C_MESSAGE_FADING };
        let row = (layout.height / 2).saturating_sub(i as u16);
        draw_centered(out, &msg.text, row, layout, color)?;
    }

    draw_footer(out, scene, layout)?;

    if scene.end_screen.is_some() {
        draw_end_screen(out, scene, layout)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, layout.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// No audio device here: both cues ring the terminal bell.
pub fn play_sounds<W: Write>(out: &mut W, cues: &[SoundCue]) -> std::io::Result<()> {
    if !cues.is_empty() {
        out.queue(Print('\x07'))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let w = layout.width as usize;
    let h = layout.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(layout.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, scene: &Scene, layout: &Layout) -> std::io::Result<()> {
    // Target fruit — left.  Green after a correct pick, bold while pulsing.
    let target = match scene.target {
        Some(kind) => format!("Fruit: {}", kind),
        None => "Fruit: -".to_string(),
    };
    out.queue(cursor::MoveTo(1, 0))?;
    if scene.highlight.is_some() {
        out.queue(style::SetForegroundColor(C_TARGET_HIGHLIGHT))?;
    } else {
        out.queue(style::SetForegroundColor(C_LABEL))?;
    }
    if scene.target_scale() > 1.1 {
        out.queue(style::SetAttribute(Attribute::Bold))?;
        out.queue(Print(target.to_uppercase()))?;
        out.queue(style::SetAttribute(Attribute::Reset))?;
    } else {
        out.queue(Print(&target))?;
    }

    // Score — right
    let score = format!("Score: {}", scene.score);
    let sx = layout.width.saturating_sub(score.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_LABEL))?;
    out.queue(Print(score))?;

    Ok(())
}

// ── Footer (last row) ─────────────────────────────────────────────────────────

fn draw_footer<W: Write>(out: &mut W, scene: &Scene, layout: &Layout) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, layout.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_LABEL))?;
    out.queue(Print(format!("Wrong: {}", scene.wrong_count)))?;

    let quit = layout.quit_button();
    out.queue(cursor::MoveTo(quit.col, quit.row))?;
    out.queue(style::SetForegroundColor(C_QUIT))?;
    out.queue(Print(QUIT_LABEL))?;
    Ok(())
}

// ── Fruit ─────────────────────────────────────────────────────────────────────

fn draw_fruit<W: Write>(out: &mut W, fruit: &SpawnedFruit, layout: &Layout) -> std::io::Result<()> {
    let (glyph, color) = fruit_sprite(fruit.kind);
    out.queue(cursor::MoveTo(layout.fruit_col(fruit), layout.fruit_row(fruit)))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_end_screen<W: Write>(out: &mut W, scene: &Scene, layout: &Layout) -> std::io::Result<()> {
    let Some(end) = &scene.end_screen else {
        return Ok(());
    };
    let top = layout.end_screen_top();

    let title = format!("Game Over! Final Score: {}", end.final_score);
    if scene.end_title_enlarged() {
        out.queue(style::SetAttribute(Attribute::Bold))?;
    }
    draw_centered(out, &title, top, layout, C_LABEL)?;
    out.queue(style::SetAttribute(Attribute::Reset))?;

    draw_centered(out, MAX_WRONG_TEXT, top + 2, layout, C_MESSAGE)?;
    draw_centered(out, &end.reward, top + 3, layout, C_REWARD)?;

    let button = layout.play_again_button();
    out.queue(cursor::MoveTo(button.col, button.row))?;
    out.queue(style::SetForegroundColor(C_PLAY_AGAIN))?;
    out.queue(Print(PLAY_AGAIN_LABEL))?;

    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    text: &str,
    row: u16,
    layout: &Layout,
    color: Color,
) -> std::io::Result<()> {
    let col = (layout.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
