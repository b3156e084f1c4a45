//! End-to-end tests for the replay kernel through the public API.

use tictactoe_replay::{Action, GameStatus, Mark, MoveError, Position, Replay};

fn pos(index: usize) -> Position {
    Position::from_index(index).unwrap()
}

fn play_all(replay: &mut Replay, indices: &[usize]) {
    for &index in indices {
        replay.dispatch(Action::Play(pos(index)));
    }
}

#[test]
fn test_scripted_win_and_highlight() {
    // X@0, O@3, X@1, O@4, X@2: top row for X.
    let mut game = Replay::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert!(game.is_winning_cell(pos(0)));
    assert!(game.is_winning_cell(pos(1)));
    assert!(game.is_winning_cell(pos(2)));
    assert!(!game.is_winning_cell(pos(3)));
    assert!(!game.is_winning_cell(pos(4)));
}

#[test]
fn test_full_game_without_winner_is_draw() {
    let mut game = Replay::new();
    play_all(&mut game, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.len(), 10);
}

#[test]
fn test_terminal_board_ignores_further_plays() {
    let mut game = Replay::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let snapshot = game.clone();

    play_all(&mut game, &[5, 6, 7, 8]);
    assert_eq!(game, snapshot);
}

#[test]
fn test_jump_then_play_discards_future_steps() {
    let mut game = Replay::new();
    play_all(&mut game, &[0, 4, 8, 1]);
    assert_eq!(game.len(), 5);

    game.dispatch(Action::JumpTo(2));
    game.dispatch(Action::Play(pos(5)));

    assert_eq!(game.len(), 4);
    let mut probe = game.clone();
    assert_eq!(probe.try_jump_to(4), Err(MoveError::StepOutOfRange(4)));
    assert_eq!(probe.try_jump_to(5), Err(MoveError::StepOutOfRange(5)));
}

#[test]
fn test_move_list_after_truncation() {
    let mut game = Replay::new();
    play_all(&mut game, &[0, 4, 8]);
    game.dispatch(Action::JumpTo(1));
    game.dispatch(Action::Play(pos(6)));

    let rows = game.history_rows();
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);

    let locations: Vec<&str> = rows.iter().map(|r| r.location).collect();
    assert_eq!(locations, ["", "Top-Left", "Bottom-Left"]);

    assert!(rows[2].is_current);
    assert_eq!(rows.iter().filter(|r| r.is_current).count(), 1);
}

#[test]
fn test_parity_drives_next_mark_after_jumps() {
    let mut game = Replay::new();
    play_all(&mut game, &[0, 4, 8, 1]);

    game.dispatch(Action::JumpTo(0));
    assert_eq!(game.status(), GameStatus::NextTurn(Mark::X));
    game.dispatch(Action::JumpTo(3));
    assert_eq!(game.status(), GameStatus::NextTurn(Mark::O));
    game.dispatch(Action::JumpTo(4));
    assert_eq!(game.status(), GameStatus::NextTurn(Mark::X));
}

#[test]
fn test_replay_state_survives_serialization() {
    let mut game = Replay::new();
    play_all(&mut game, &[4, 0, 8]);
    game.dispatch(Action::JumpTo(2));

    let json = serde_json::to_string(&game).unwrap();
    let restored: Replay = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.cursor(), 2);
}
