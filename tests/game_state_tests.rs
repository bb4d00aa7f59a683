use gomoku::{GameState, Mark, MoveError, MoveOutcome, Role, GRID_SIZE};

#[test]
fn test_first_move_places_x_and_toggles_turn() {
    let mut game = GameState::new(true);
    assert_eq!(game.current_player().mark, Mark::X);
    assert_eq!(game.current_player().role, Role::Host);

    assert_eq!(game.make_move(7, 7).unwrap(), MoveOutcome::Placed);
    assert_eq!(game.board().get(7, 7), Some(Mark::X));
    assert_eq!(game.current_player().mark, Mark::O);
    assert_eq!(game.current_player().role, Role::Guest);
}

#[test]
fn test_guest_first_mover_gets_x() {
    let game = GameState::new(false);
    assert_eq!(game.current_player().mark, Mark::X);
    assert_eq!(game.current_player().role, Role::Guest);
    assert_eq!(game.player_with_role(Role::Host).mark, Mark::O);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = GameState::new(true);
    game.make_move(3, 3).unwrap();

    assert_eq!(game.make_move(3, 3).unwrap_err(), MoveError::Occupied);
    assert_eq!(game.board().get(3, 3), Some(Mark::X));
    assert_eq!(game.current_player().mark, Mark::O);
    assert_eq!(game.moves_played(), 1);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = GameState::new(true);
    assert_eq!(
        game.make_move(GRID_SIZE, 0).unwrap_err(),
        MoveError::OutOfBounds
    );
    assert_eq!(
        game.make_move(0, GRID_SIZE).unwrap_err(),
        MoveError::OutOfBounds
    );
    assert_eq!(game.current_player().mark, Mark::X);
    assert_eq!(game.moves_played(), 0);
}

/// Interleave X's winning run with O moves on a distant row.
fn play_row_win(game: &mut GameState, row: usize) -> MoveOutcome {
    for i in 0..4 {
        assert_eq!(game.make_move(row, i).unwrap(), MoveOutcome::Placed);
        assert_eq!(game.make_move(14, i).unwrap(), MoveOutcome::Placed);
    }
    game.make_move(row, 4).unwrap()
}

#[test]
fn test_horizontal_win() {
    let mut game = GameState::new(true);
    assert_eq!(play_row_win(&mut game, 0), MoveOutcome::PlacedAndWon);
    assert_eq!(game.winner().unwrap().mark, Mark::X);
}

#[test]
fn test_vertical_win() {
    let mut game = GameState::new(true);
    for i in 0..4 {
        game.make_move(i, 2).unwrap();
        game.make_move(i, 14).unwrap();
    }
    assert_eq!(game.make_move(4, 2).unwrap(), MoveOutcome::PlacedAndWon);
    assert_eq!(game.winner().unwrap().mark, Mark::X);
}

#[test]
fn test_diagonal_down_right_win() {
    let mut game = GameState::new(true);
    for i in 0..4 {
        game.make_move(i, i).unwrap();
        game.make_move(14, i).unwrap();
    }
    assert_eq!(game.make_move(4, 4).unwrap(), MoveOutcome::PlacedAndWon);
    assert_eq!(game.winner().unwrap().mark, Mark::X);
}

#[test]
fn test_diagonal_down_left_win() {
    let mut game = GameState::new(true);
    for i in 0..4 {
        game.make_move(i, 8 - i).unwrap();
        game.make_move(14, i).unwrap();
    }
    assert_eq!(game.make_move(4, 4).unwrap(), MoveOutcome::PlacedAndWon);
    assert_eq!(game.winner().unwrap().mark, Mark::X);
}

#[test]
fn test_win_detected_when_gap_is_filled_mid_run() {
    // X owns (6,5),(6,6),(6,8),(6,9); placing (6,7) completes the five even
    // though it is not at either end of the run.
    let mut game = GameState::new(true);
    for (i, c) in [5, 6, 8, 9].into_iter().enumerate() {
        game.make_move(6, c).unwrap();
        game.make_move(14, i).unwrap();
    }
    assert_eq!(game.make_move(6, 7).unwrap(), MoveOutcome::PlacedAndWon);
    assert_eq!(game.winner().unwrap().mark, Mark::X);
}

#[test]
fn test_four_in_a_row_is_not_a_win() {
    let mut game = GameState::new(true);
    for i in 0..3 {
        game.make_move(0, i).unwrap();
        game.make_move(14, i).unwrap();
    }
    assert_eq!(game.make_move(0, 3).unwrap(), MoveOutcome::Placed);
    assert!(game.winner().is_none());
}

#[test]
fn test_run_blocked_by_opponent_is_not_a_win() {
    // O sits at (0,5); X's run 0..=4 on row 0 still wins, but a run 1..=4
    // capped at both ends does not reach five.
    let mut game = GameState::new(true);
    game.make_move(1, 0).unwrap(); // X
    game.make_move(0, 0).unwrap(); // O caps the left end
    for i in 1..4 {
        game.make_move(0, i).unwrap(); // X builds row 0
        game.make_move(14, i).unwrap(); // O elsewhere
    }
    game.make_move(0, 4).unwrap(); // X: four contiguous, capped left
    assert!(game.winner().is_none());
    game.make_move(0, 5).unwrap(); // O caps the right end
    assert!(game.winner().is_none());
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut game = GameState::new(true);
    play_row_win(&mut game, 0);
    assert!(game.winner().is_some());
    let moves_before = game.moves_played();

    assert_eq!(game.make_move(10, 10).unwrap_err(), MoveError::GameOver);
    assert_eq!(game.make_move(0, 0).unwrap_err(), MoveError::GameOver);
    assert_eq!(game.board().get(10, 10), None);
    assert_eq!(game.moves_played(), moves_before);
    assert_eq!(game.winner().unwrap().mark, Mark::X);
}

#[test]
fn test_win_does_not_advance_turn() {
    let mut game = GameState::new(true);
    play_row_win(&mut game, 0);
    // Winner stays the current player; the turn never passed.
    assert_eq!(game.current_player().mark, Mark::X);
}
