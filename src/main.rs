mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use fruit_picker::config::GameConfig;
use fruit_picker::scene::{Hit, Layout, Scene};
use fruit_picker::session::GameSession;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Picked up from the working directory when `--config` is not given.
const LOCAL_CONFIG: &str = "fruit_picker.ron";

#[derive(Parser, Debug)]
#[command(name = "fruit_picker", about = "Click the falling fruit that matches the name on top")]
struct Args {
    /// RON file with the game rules (default: ./fruit_picker.ron if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the RNG for a reproducible fruit sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write logs (the terminal itself is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("fruit_picker.log"));
    let file = File::create(&path)
        .with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

// ── Input → session events ───────────────────────────────────────────────────

fn dispatch_click(
    session: &mut GameSession,
    scene: &mut Scene,
    rng: &mut StdRng,
    layout: &Layout,
    column: u16,
    row: u16,
) {
    match scene.hit_test(column, row, layout) {
        Hit::Fruit(id, kind) => session.on_fruit_clicked(kind, id, rng, scene),
        Hit::Quit => session.on_quit_clicked(scene),
        Hit::PlayAgain => session.on_play_again_clicked(rng, scene),
        Hit::Nothing => session.on_misc_click(scene),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the session asks to exit.  Every event is handled to
/// completion on this thread before the next one is looked at.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut layout = Layout::new(width, height);
    let mut scene = Scene::new();
    session.start(rng, &mut scene);

    let mut last = Instant::now();
    loop {
        let frame_start = Instant::now();
        let dt = frame_start - last;
        last = frame_start;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        session.on_quit_clicked(&mut scene);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        session.on_quit_clicked(&mut scene);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        session.on_play_again_clicked(rng, &mut scene);
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => dispatch_click(session, &mut scene, rng, &layout, column, row),
                Event::Resize(w, h) => layout = Layout::new(w, h),
                _ => {}
            }
            if session.has_exited() {
                break;
            }
        }

        if session.has_exited() || scene.exit_requested() {
            return Ok(());
        }

        scene.advance(dt);
        session.advance(dt, rng, &mut scene);

        display::play_sounds(out, &scene.drain_sounds())?;
        display::render(out, &scene, &layout)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_path = init_logging(args.log_file)?;

    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => match GameConfig::load_if_present(LOCAL_CONFIG)
            .with_context(|| format!("load config {}", LOCAL_CONFIG))?
        {
            Some(cfg) => {
                info!(path = LOCAL_CONFIG, "using local config");
                cfg
            }
            None => {
                debug!("no local {}, using built-in rules", LOCAL_CONFIG);
                GameConfig::default()
            }
        },
    };
    let mut session = GameSession::new(config).context("invalid game config")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(log = %log_path.display(), seed = ?args.seed, "starting fruit picker");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                warn!(error = %e, "input reader stopped");
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &mut rng, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(score = session.score(), "exited");
    result.context("terminal I/O failed")
}
