//! Tests for the tic-tac-toe game model.

use tictactoe_cli::{Axis, Game, GameError, GameStatus, Player, Position, Square, rules};

/// Plays `cells` in order, stopping early if the game ends.
fn play(cells: &[(usize, usize)]) -> Game {
    let mut game = Game::new();
    for &(row, column) in cells {
        game.apply_move(row, column).expect("move should be legal");
        if game.is_done() {
            break;
        }
    }
    game
}

#[test]
fn test_turn_number_counts_accepted_moves() {
    // Walk every rotation of the row-major order until each game ends.
    let all: Vec<Position> = Position::all().collect();
    for start in 0..all.len() {
        let mut game = Game::new();
        let mut accepted = 0;
        for pos in all.iter().cycle().skip(start).take(all.len()) {
            let before = game.current_player();
            let status = game.apply_move(pos.row(), pos.column()).unwrap();
            accepted += 1;
            if status.is_done() {
                assert_eq!(game.turn_number(), accepted);
                break;
            }
            assert_eq!(game.turn_number(), accepted + 1);
            assert_ne!(game.current_player(), before);
        }
    }
}

#[test]
fn test_occupied_square_is_never_overwritten() {
    let mut game = Game::new();
    game.apply_move(1, 1).unwrap();

    let result = game.apply_move(1, 1);
    assert_eq!(
        result,
        Err(GameError::SquareOccupied {
            position: Position::new(1, 1).unwrap(),
            occupant: Player::X,
        })
    );
    assert_eq!(game.cell_at(1, 1), Ok(Square::Occupied(Player::X)));
    assert_eq!(game.turn_number(), 2);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_cell_at_out_of_range() {
    let game = Game::new();
    assert_eq!(
        game.cell_at(3, 0),
        Err(GameError::OutOfRange {
            axis: Axis::Row,
            value: 3
        })
    );
    assert_eq!(
        game.cell_at(0, 3),
        Err(GameError::OutOfRange {
            axis: Axis::Column,
            value: 3
        })
    );
    assert_eq!(game.row_count(), 3);
    assert_eq!(game.column_count(), 3);
}

#[test]
fn test_top_row_win() {
    let game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.turn_number(), 5);
    assert!(game.is_winner(Player::X));
    assert!(!game.is_winner(Player::O));
}

#[test]
fn test_column_win_for_o() {
    let game = play(&[(0, 0), (0, 2), (1, 1), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.turn_number(), 6);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let game = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.is_tie());
    assert_eq!(game.winner(), None);
    assert!(rules::is_full(game.board()));
}

#[test]
fn test_win_on_last_square_beats_tie() {
    let game = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.turn_number(), 9);
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.clone();

    assert_eq!(game.apply_move(2, 2), Err(GameError::GameOver));
    assert_eq!(game.quit(), Err(GameError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_quit_ends_game_without_result() {
    let mut game = play(&[(0, 0), (1, 1)]);
    game.quit().unwrap();
    assert!(game.is_done());
    assert_eq!(game.status(), GameStatus::Abandoned);
    assert_eq!(game.winner(), None);
    assert_eq!(game.apply_move(2, 2), Err(GameError::GameOver));
}

#[test]
fn test_set_cell_rejects_wrong_player() {
    let mut game = Game::new();
    game.set_cell(0, 0, Player::X).unwrap();
    assert_eq!(
        game.set_cell(0, 1, Player::X),
        Err(GameError::WrongPlayer {
            expected: Player::O,
            found: Player::X
        })
    );
    assert_eq!(game.turn_number(), 2);
}
