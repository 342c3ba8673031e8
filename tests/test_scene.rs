use fruit_picker::config::GameConfig;
use fruit_picker::entities::*;
use fruit_picker::presentation::Presentation;
use fruit_picker::scene::*;
use fruit_picker::session::GameSession;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn layout() -> Layout {
    Layout::new(40, 20)
}

fn spawn(kind: FruitKind, x: f32, secs: u64) -> SpawnIntent {
    SpawnIntent {
        kind,
        x,
        fall_duration: Duration::from_secs(secs),
    }
}

// ── layout ────────────────────────────────────────────────────────────────────

#[test]
fn layout_regions() {
    let l = layout();
    assert_eq!(l.play_top(), 2);
    assert_eq!(l.play_bottom(), 17);
    assert_eq!(l.quit_button(), Rect { col: 31, row: 19, width: 8 });
    assert_eq!(l.play_again_button(), Rect { col: 13, row: 12, width: 14 });
}

#[test]
fn fruit_moves_down_as_it_ages() {
    let l = layout();
    let mut scene = Scene::new();
    scene.spawn_visual(spawn(FruitKind::Apple, 0.5, 4));

    assert_eq!(l.fruit_row(&scene.fruits[0]), 2);
    assert_eq!(l.fruit_col(&scene.fruits[0]), 18);

    scene.advance(Duration::from_secs(2));
    assert_eq!(l.fruit_row(&scene.fruits[0]), 10);
}

// ── presentation intents ──────────────────────────────────────────────────────

#[test]
fn spawn_assigns_fresh_ids() {
    let mut scene = Scene::new();
    scene.spawn_visual(spawn(FruitKind::Apple, 0.1, 3));
    scene.spawn_visual(spawn(FruitKind::Cherry, 0.2, 3));
    assert_eq!(scene.fruits.len(), 2);
    assert_ne!(scene.fruits[0].id, scene.fruits[1].id);

    let first = scene.fruits[0].id;
    scene.remove_visual(first);
    assert_eq!(scene.fruits.len(), 1);
    assert_eq!(scene.fruits[0].kind, FruitKind::Cherry);
}

#[test]
fn fruit_removed_after_falling_out() {
    let mut scene = Scene::new();
    scene.spawn_visual(spawn(FruitKind::Grapes, 0.3, 2));
    scene.advance(Duration::from_millis(1_999));
    assert_eq!(scene.fruits.len(), 1);
    scene.advance(Duration::from_millis(1));
    assert!(scene.fruits.is_empty());
}

#[test]
fn transient_message_fades_then_expires() {
    let mut scene = Scene::new();
    scene.show_transient_message("Wrong Selection!", Duration::from_secs(1));
    assert_eq!(scene.messages[0].alpha(), 1.0);

    scene.advance(Duration::from_millis(500));
    assert!((scene.messages[0].alpha() - 0.5).abs() < 1e-6);

    scene.advance(Duration::from_millis(500));
    assert!(scene.messages.is_empty());
}

#[test]
fn highlight_pulses_until_target_changes() {
    let mut scene = Scene::new();
    scene.update_target_display(FruitKind::Orange);
    assert_eq!(scene.target_scale(), 1.0);

    scene.highlight_target_correct();
    scene.advance(Duration::from_millis(200));
    assert!((scene.target_scale() - 1.2).abs() < 1e-3);

    scene.advance(Duration::from_millis(300));
    assert_eq!(scene.target_scale(), 1.0);
    assert!(scene.highlight.is_some(), "colour outlives the pulse");

    scene.update_target_display(FruitKind::Apple);
    assert!(scene.highlight.is_none());
    assert_eq!(scene.target, Some(FruitKind::Apple));
}

#[test]
fn clear_visuals_drops_everything_transient() {
    let mut scene = Scene::new();
    scene.spawn_visual(spawn(FruitKind::Apple, 0.1, 3));
    scene.show_transient_message("Wrong Selection!", Duration::from_secs(1));
    scene.show_end_screen(3, "Try Again!");
    scene.update_score_display(3);

    scene.clear_visuals();
    assert!(scene.fruits.is_empty());
    assert!(scene.messages.is_empty());
    assert!(scene.end_screen.is_none());
    assert_eq!(scene.score, 3);
}

#[test]
fn sounds_are_drained_once() {
    let mut scene = Scene::new();
    scene.play_sound(SoundCue::Correct);
    scene.play_sound(SoundCue::Wrong);
    assert_eq!(scene.drain_sounds(), vec![SoundCue::Correct, SoundCue::Wrong]);
    assert!(scene.drain_sounds().is_empty());
}

// ── hit testing ───────────────────────────────────────────────────────────────

#[test]
fn hit_test_finds_fruit_under_cursor() {
    let l = layout();
    let mut scene = Scene::new();
    scene.spawn_visual(spawn(FruitKind::Watermelon, 0.0, 3));
    let id = scene.fruits[0].id;

    // Sprite spans columns 1..4 on row 2.
    assert_eq!(scene.hit_test(1, 2, &l), Hit::Fruit(id, FruitKind::Watermelon));
    assert_eq!(scene.hit_test(3, 2, &l), Hit::Fruit(id, FruitKind::Watermelon));
    assert_eq!(scene.hit_test(4, 2, &l), Hit::Nothing);
    assert_eq!(scene.hit_test(1, 3, &l), Hit::Nothing);
}

#[test]
fn hit_test_prefers_newest_fruit() {
    let l = layout();
    let mut scene = Scene::new();
    scene.spawn_visual(spawn(FruitKind::Apple, 0.0, 3));
    scene.spawn_visual(spawn(FruitKind::Cherry, 0.0, 3));
    let newest = scene.fruits[1].id;
    assert_eq!(scene.hit_test(2, 2, &l), Hit::Fruit(newest, FruitKind::Cherry));
}

#[test]
fn hit_test_controls() {
    let l = layout();
    let mut scene = Scene::new();
    assert_eq!(scene.hit_test(31, 19, &l), Hit::Quit);
    assert_eq!(scene.hit_test(38, 19, &l), Hit::Quit);
    assert_eq!(scene.hit_test(30, 19, &l), Hit::Nothing);

    // The play-again button only exists on the end screen.
    assert_eq!(scene.hit_test(15, 12, &l), Hit::Nothing);
    scene.show_end_screen(0, "Try Again!");
    assert_eq!(scene.hit_test(15, 12, &l), Hit::PlayAgain);
}

// ── session driving a scene ───────────────────────────────────────────────────

#[test]
fn clicking_spawned_target_scores() {
    let config = GameConfig {
        fruits: vec![FruitKind::Cherry],
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut scene = Scene::new();
    let l = layout();

    session.start(&mut rng, &mut scene);
    assert_eq!(scene.target, Some(FruitKind::Cherry));

    session.advance(Duration::from_millis(500), &mut rng, &mut scene);
    assert_eq!(scene.fruits.len(), 1);
    let rect = l.fruit_rect(&scene.fruits[0]);

    match scene.hit_test(rect.col, rect.row, &l) {
        Hit::Fruit(id, kind) => session.on_fruit_clicked(kind, id, &mut rng, &mut scene),
        other => panic!("expected the cherry, got {:?}", other),
    }

    assert_eq!(session.score(), 1);
    assert_eq!(scene.score, 1);
    assert!(scene.fruits.is_empty());
    assert!(scene.highlight.is_some());
    assert_eq!(scene.drain_sounds(), vec![SoundCue::Correct]);
}

#[test]
fn end_screen_then_play_again_through_scene() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut scene = Scene::new();
    let l = layout();

    session.start(&mut rng, &mut scene);
    session.advance(Duration::from_secs(2), &mut rng, &mut scene);
    assert!(!scene.fruits.is_empty());

    for _ in 0..5 {
        session.on_misc_click(&mut scene);
    }
    assert_eq!(scene.wrong_count, 5);
    assert!(scene.fruits.is_empty());
    let end = scene.end_screen.clone().expect("end screen shown");
    assert_eq!(end.final_score, 0);
    assert_eq!(end.reward, "Try Again!");

    let button = l.play_again_button();
    assert_eq!(scene.hit_test(button.col, button.row, &l), Hit::PlayAgain);
    session.on_play_again_clicked(&mut rng, &mut scene);

    assert_eq!(session.phase(), Phase::Running);
    assert!(scene.end_screen.is_none());
    assert_eq!(scene.wrong_count, 0);
    assert_eq!(scene.score, 0);
}

#[test]
fn quit_sets_exit_flag() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let mut scene = Scene::new();
    session.on_quit_clicked(&mut scene);
    assert!(scene.exit_requested());
}
