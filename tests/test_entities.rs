use fruit_picker::entities::*;

#[test]
fn fruit_names_are_lowercase() {
    let names: Vec<&str> = FruitKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, ["apple", "watermelon", "cherry", "grapes", "orange"]);
    assert_eq!(FruitKind::Grapes.to_string(), "grapes");
}

#[test]
fn entity_copy_and_eq() {
    assert_eq!(FruitKind::Apple, FruitKind::Apple);
    assert_ne!(FruitKind::Apple, FruitKind::Orange);
    assert_eq!(Phase::Running, Phase::Running);
    assert_ne!(Phase::Running, Phase::Ended);
    assert_ne!(SoundCue::Correct, SoundCue::Wrong);
    assert_eq!(FruitId(7), FruitId(7));
}

#[test]
fn idle_round_is_zeroed() {
    let round = RoundState::idle();
    assert_eq!(round.score, 0);
    assert_eq!(round.wrong_count, 0);
    assert_eq!(round.target, None);
    assert_eq!(round.phase, Phase::Idle);
    assert_eq!(RoundState::default(), round);
}

#[test]
fn round_state_clone_is_independent() {
    let original = RoundState::idle();
    let mut cloned = original.clone();
    cloned.score = 9;
    cloned.target = Some(FruitKind::Cherry);
    assert_eq!(original.score, 0);
    assert_eq!(original.target, None);
}
