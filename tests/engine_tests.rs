//! End-to-end tests of the command surface against scripted dice.
//!
//! These walk whole turns and games through the public API only, the way a
//! UI would drive the engine.

use pig_dice::core::{GameConfig, GameMode, PlayerId, ScriptedDice};
use pig_dice::engine::{CommandError, TurnEngine};
use pig_dice::events::GameEvent;

fn scripted(faces: impl IntoIterator<Item = u8>) -> TurnEngine<ScriptedDice> {
    TurnEngine::with_dice(GameConfig::new(), ScriptedDice::new(faces))
}

/// A hold that lands on 94, then a (3,4) roll and a winning hold at 101.
#[test]
fn test_hold_past_threshold_wins() {
    // Seat 0 banks 94 in one long turn: eight (6,5) rolls and one (2,4).
    let mut faces = Vec::new();
    for _ in 0..8 {
        faces.extend([6, 5]);
    }
    faces.extend([2, 4]);
    // Seat 1 takes a short turn, then seat 0 rolls (3,4) and holds.
    faces.extend([1, 2]);
    faces.extend([3, 4]);

    let mut engine = scripted(faces);

    for _ in 0..9 {
        engine.roll().unwrap();
    }
    assert_eq!(engine.state().active().current_score(), 94);
    engine.hold().unwrap();
    assert_eq!(engine.state()[PlayerId::new(0)].total_score(), 94);
    assert!(engine.state().game_active);

    // Seat 1's turn.
    assert_eq!(engine.state().active_player, PlayerId::new(1));
    engine.roll().unwrap();
    engine.hold().unwrap();

    // Seat 0: 3+4 = 7, hold reaches 101.
    let outcome = engine.roll().unwrap();
    assert!(!outcome.is_double);
    assert_eq!(engine.state().active().current_score(), 7);
    engine.hold().unwrap();

    assert!(!engine.state().game_active);
    assert_eq!(engine.state()[PlayerId::new(0)].total_score(), 101);
    assert_eq!(engine.state().active_player, PlayerId::new(0));

    let game_over = engine
        .take_events()
        .into_iter()
        .find_map(|event| match event {
            GameEvent::GameOver {
                winner,
                winning_total,
            } => Some((winner, winning_total)),
            _ => None,
        });
    assert_eq!(game_over, Some((PlayerId::new(0), 101)));
}

/// Twelve unbanked points, then a (5,5) double: all gone, turn switches.
#[test]
fn test_double_wipes_twelve_points() {
    let mut engine = scripted([5, 3, 3, 1, 5, 5]);

    engine.roll().unwrap();
    engine.roll().unwrap();
    assert_eq!(engine.state().active().current_score(), 12);

    let outcome = engine.roll().unwrap();
    assert!(outcome.is_double);

    assert_eq!(engine.state()[PlayerId::new(0)].current_score(), 0);
    assert_eq!(engine.state()[PlayerId::new(0)].total_score(), 0);
    assert_eq!(engine.state().active_player, PlayerId::new(1));
}

#[test]
fn test_turns_alternate_on_holds() {
    let mut engine = scripted([1, 2, 3, 4, 1, 3]);

    engine.roll().unwrap();
    engine.hold().unwrap();
    assert_eq!(engine.state().active_player, PlayerId::new(1));

    engine.roll().unwrap();
    engine.hold().unwrap();
    assert_eq!(engine.state().active_player, PlayerId::new(0));

    engine.roll().unwrap();
    engine.hold().unwrap();
    assert_eq!(engine.state().active_player, PlayerId::new(1));

    assert_eq!(engine.state()[PlayerId::new(0)].total_score(), 3 + 4);
    assert_eq!(engine.state()[PlayerId::new(1)].total_score(), 7);
}

#[test]
fn test_hold_without_rolling_changes_nothing() {
    let mut engine = scripted([2, 3]);

    assert_eq!(engine.hold(), Err(CommandError::NothingToHold));
    assert_eq!(engine.state().active_player, PlayerId::new(0));
    assert_eq!(engine.state().turn_number, 1);

    // The game continues normally afterwards.
    engine.roll().unwrap();
    engine.hold().unwrap();
    assert_eq!(engine.state().active_player, PlayerId::new(1));
}

#[test]
fn test_hold_after_double_is_rejected() {
    let mut engine = scripted([4, 4]);

    engine.roll().unwrap();
    // Seat 1 is now active with nothing banked this turn.
    assert_eq!(engine.state().active_player, PlayerId::new(1));
    assert_eq!(engine.hold(), Err(CommandError::NothingToHold));
}

#[test]
fn test_game_over_freezes_state_until_reset() {
    let config = GameConfig::new().with_win_threshold(7);
    let mut engine = TurnEngine::with_dice(config, ScriptedDice::new([3, 4, 2, 5]));

    engine.roll().unwrap();
    engine.hold().unwrap();
    assert!(!engine.state().game_active);

    let frozen = engine.state().clone();
    assert!(engine.roll().is_err());
    assert!(engine.hold().is_err());
    assert_eq!(engine.state(), &frozen);

    engine.new_game(GameMode::HumanVsHuman);
    assert!(engine.state().game_active);
    engine.roll().unwrap();
    assert_eq!(engine.state().active().current_score(), 7);
}

#[test]
fn test_snapshots_track_every_command() {
    let mut engine = scripted([2, 6, 1, 4]);

    engine.roll().unwrap();
    engine.roll().unwrap();
    engine.hold().unwrap();

    let snapshots: Vec<_> = engine
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::StateChanged(snapshot) => Some(snapshot),
            _ => None,
        })
        .collect();

    // One snapshot per command, each reflecting the state at that point.
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].active().current_score(), 8);
    assert_eq!(snapshots[1].active().current_score(), 13);
    assert_eq!(snapshots[2].active_player, PlayerId::new(1));
    assert_eq!(snapshots[2][PlayerId::new(0)].total_score(), 13);
}

#[test]
fn test_full_game_runs_to_completion() {
    let mut engine = TurnEngine::with_seed(GameConfig::new(), 1337);

    let mut commands = 0;
    const MAX_COMMANDS: usize = 10_000;

    while engine.state().game_active && commands < MAX_COMMANDS {
        // Bank at 20 or more, otherwise keep rolling.
        if engine.state().active().current_score() >= 20 {
            engine.hold().unwrap();
        } else {
            engine.roll().unwrap();
        }
        commands += 1;
    }

    assert!(!engine.state().game_active, "game should finish");

    let winner = engine.state().active_player;
    let loser = winner.opponent();
    assert!(engine.state()[winner].total_score() >= 100);
    assert!(engine.state()[loser].total_score() < 100);
}

#[test]
fn test_seeded_games_replay_identically() {
    let play = |seed: u64| {
        let mut engine = TurnEngine::with_seed(GameConfig::new(), seed);
        while engine.state().game_active {
            if engine.state().active().current_score() >= 15 {
                engine.hold().unwrap();
            } else {
                engine.roll().unwrap();
            }
        }
        engine.state().clone()
    };

    assert_eq!(play(99), play(99));
}
