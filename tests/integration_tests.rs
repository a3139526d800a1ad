//! End-to-end session tests through the public facade.

use serenity_tower::core::{PlaceOutcome, Session};
use serenity_tower::types::{GameAction, Phase, BASE_SPEED, BLOCK_HEIGHT, CONTAINER_WIDTH};

#[test]
fn test_full_run_lifecycle() {
    let mut session = Session::new(42);
    assert_eq!(session.phase(), Phase::NotStarted);

    // First place starts the run.
    assert!(session.apply_action(GameAction::Place));
    assert_eq!(session.phase(), Phase::Running);

    // Build a few floors with perfect drops onto the centered base.
    for expected_score in 1..=5 {
        assert_eq!(
            session.place_at(124.0),
            PlaceOutcome::Placed { snapped: true }
        );
        assert_eq!(session.score(), expected_score);
    }

    // Miss past the tower to finish the run.
    assert_eq!(session.place_at(440.0), PlaceOutcome::Miss);
    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.score(), 5);

    // Inputs are dead after game over except restart.
    assert!(!session.apply_action(GameAction::Place));
    assert!(!session.tick());
    assert!(session.apply_action(GameAction::Restart));
    assert_eq!(session.phase(), Phase::NotStarted);
    assert_eq!(session.score(), 0);
    assert_eq!(session.speed(), BASE_SPEED);
}

#[test]
fn test_ticking_never_escapes_the_container() {
    let mut session = Session::new(7);
    session.apply_action(GameAction::Place);

    for i in 0..5000 {
        session.tick();
        let block = session.current().expect("block in motion");
        assert!(block.x >= 0.0, "tick {i}: x went negative");
        assert!(
            block.x + block.width <= CONTAINER_WIDTH,
            "tick {i}: block escaped right wall"
        );
        // Occasionally place to raise the speed and shrink the block.
        if i % 500 == 499 {
            session.place_at(124.0);
        }
    }
}

#[test]
fn test_tower_rows_stay_contiguous_across_compaction() {
    let mut session = Session::new(3);
    session.apply_action(GameAction::Place);

    for _ in 0..40 {
        assert_eq!(
            session.place_at(124.0),
            PlaceOutcome::Placed { snapped: true }
        );
        for pair in session.stack().windows(2) {
            assert_eq!(pair[1].y - pair[0].y, BLOCK_HEIGHT);
        }
        let top = session.stack().last().expect("non-empty stack");
        let current = session.current().expect("block in motion");
        assert_eq!(current.y, top.y + BLOCK_HEIGHT);
    }
}

#[test]
fn test_compaction_preserves_x_and_width() {
    let mut session = Session::new(9);
    session.apply_action(GameAction::Place);

    // Mixed-width tower: two trims against the base, then snapped drops
    // until the next placement will land past the camera line.
    assert_eq!(
        session.place_at(130.0),
        PlaceOutcome::Placed { snapped: false }
    );
    assert_eq!(
        session.place_at(150.0),
        PlaceOutcome::Placed { snapped: false }
    );
    while session.current().expect("block in motion").y < 420.0 {
        let top_x = session.stack().last().expect("non-empty stack").x;
        assert_eq!(
            session.place_at(top_x),
            PlaceOutcome::Placed { snapped: true }
        );
    }

    let before = session.stack().to_vec();
    let top = *before.last().expect("non-empty stack");
    assert_eq!(
        session.place_at(top.x),
        PlaceOutcome::Placed { snapped: true }
    );

    // The shift only moves rows down: order, x and width all survive.
    let after = session.stack();
    assert_eq!(after.len(), before.len() + 1);
    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(new.x, old.x);
        assert_eq!(new.width, old.width);
        assert_eq!(new.y, old.y - BLOCK_HEIGHT);
    }
    let placed = after.last().expect("non-empty stack");
    assert_eq!(placed.x, top.x);
    assert_eq!(placed.width, top.width);
    assert_eq!(placed.y, 420.0 - BLOCK_HEIGHT);
}

#[test]
fn test_trimmed_width_carries_to_next_block() {
    let mut session = Session::new(11);
    session.apply_action(GameAction::Place);

    // Offset drop: [174, 374) against the base [124, 324) keeps [174, 324).
    assert_eq!(
        session.place_at(174.0),
        PlaceOutcome::Placed { snapped: false }
    );
    let placed = session.stack().last().expect("placed block");
    assert_eq!(placed.x, 174.0);
    assert_eq!(placed.width, 150.0);

    let next = session.current().expect("next block");
    assert_eq!(next.width, 150.0);
    assert!(next.x == 0.0 || next.x == CONTAINER_WIDTH - 150.0);
}

#[test]
fn test_identical_seeds_play_identical_games() {
    let script = |session: &mut Session| {
        session.apply_action(GameAction::Place);
        for _ in 0..10 {
            for _ in 0..37 {
                session.tick();
            }
            session.place_current();
        }
        (session.phase(), session.score(), session.stack().to_vec())
    };

    let mut a = Session::new(2024);
    let mut b = Session::new(2024);
    assert_eq!(script(&mut a), script(&mut b));
}
