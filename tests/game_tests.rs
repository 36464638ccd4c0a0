use tictactoe::{Board, Cell, GameError, GameOutcome, GameState, MoveRecord, PlayerId, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const E: Cell = Cell::Empty;
const X: Cell = Cell::UserMark;
const O: Cell = Cell::ComputerMark;

fn game_from(cells: [[Cell; 3]; 3]) -> GameState {
    GameState::with_board(Board::from_cells(cells))
}

#[test]
fn test_size_is_fixed() {
    assert_eq!(GameState::new().size(), 3);
    assert_eq!(game_from([[X, O, X], [O, X, O], [O, X, O]]).size(), BOARD_SIZE);
}

#[test]
fn test_new_game_is_empty() {
    let game = GameState::new();
    assert_eq!(game.board(), Board::new());
    assert!(game.move_history().is_empty());
    assert_eq!(game.free_cells().len(), 9);
    assert_eq!(game.check_game(), GameOutcome::Continue);
}

#[test]
fn test_accept_user_move_records_and_marks() {
    let mut game = GameState::new();
    game.accept_user_move(1, 2).unwrap();
    assert_eq!(game.board().get(1, 2).unwrap(), Cell::UserMark);
    assert_eq!(
        game.move_history(),
        &[MoveRecord {
            actor: PlayerId::User,
            x: 1,
            y: 2
        }]
    );
}

#[test]
fn test_accept_user_move_twice_is_rejected() {
    let mut game = GameState::new();
    game.accept_user_move(0, 0).unwrap();
    let before = game.board();
    assert_eq!(game.accept_user_move(0, 0).unwrap_err(), GameError::InvalidMove);
    assert_eq!(game.move_history().len(), 1);
    assert_eq!(game.board(), before);
}

#[test]
fn test_user_move_on_computer_cell_is_rejected() {
    let mut game = game_from([[O, E, E], [E, E, E], [E, E, E]]);
    assert_eq!(game.accept_user_move(0, 0).unwrap_err(), GameError::InvalidMove);
    assert!(game.move_history().is_empty());
}

#[test]
fn test_out_of_bounds_user_move() {
    let mut game = GameState::new();
    assert_eq!(
        game.accept_user_move(3, 0).unwrap_err(),
        GameError::OutOfBounds { x: 3, y: 0 }
    );
    assert_eq!(
        game.accept_user_move(0, usize::MAX).unwrap_err(),
        GameError::OutOfBounds { x: 0, y: usize::MAX }
    );
    assert!(game.move_history().is_empty());
    assert_eq!(game.board(), Board::new());
}

#[test]
fn test_computer_move_on_full_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = game_from([[X, O, X], [O, X, O], [O, X, O]]);
    assert_eq!(
        game.create_computer_move(&mut rng).unwrap_err(),
        GameError::NoMovesAvailable
    );
    assert!(game.move_history().is_empty());
}

#[test]
fn test_computer_move_fills_only_free_cell() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = game_from([[X, O, X], [O, E, O], [O, X, O]]);
        assert_eq!(game.create_computer_move(&mut rng).unwrap(), (1, 1));
        assert_eq!(game.board().get(1, 1).unwrap(), Cell::ComputerMark);
        assert_eq!(
            game.move_history(),
            &[MoveRecord {
                actor: PlayerId::Computer,
                x: 1,
                y: 1
            }]
        );
    }
}

#[test]
fn test_computer_move_never_overwrites() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut game = GameState::new();
    game.accept_user_move(1, 1).unwrap();
    for _ in 0..8 {
        let (x, y) = game.create_computer_move(&mut rng).unwrap();
        assert_ne!((x, y), (1, 1));
    }
    assert_eq!(game.board().get(1, 1).unwrap(), Cell::UserMark);
    assert!(game.free_cells().is_empty());
    assert_eq!(
        game.create_computer_move(&mut rng).unwrap_err(),
        GameError::NoMovesAvailable
    );
}

#[test]
fn test_clear_resets_board_and_history() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = game_from([[X, E, E], [E, O, E], [E, E, E]]);
    game.accept_user_move(2, 2).unwrap();
    game.create_computer_move(&mut rng).unwrap();
    game.clear();
    assert!(game.move_history().is_empty());
    assert_eq!(game.board(), Board::new());
    assert_eq!(game.free_cells().len(), 9);
}

#[test]
fn test_board_snapshot_is_independent() {
    let mut game = GameState::new();
    let snapshot = game.board();
    game.accept_user_move(0, 0).unwrap();
    assert_eq!(snapshot.get(0, 0).unwrap(), Cell::Empty);

    let other = GameState::new();
    assert_eq!(other.board().get(0, 0).unwrap(), Cell::Empty);
}

#[test]
fn test_free_cells_tracks_current_board() {
    let mut game = GameState::new();
    game.accept_user_move(0, 1).unwrap();
    game.accept_user_move(2, 0).unwrap();
    let free = game.free_cells();
    assert_eq!(free.len(), 7);
    assert!(!free.contains(&(0, 1)));
    assert!(!free.contains(&(2, 0)));
    assert_eq!(free[0], (0, 0));
    assert_eq!(free[1], (0, 2));
}

#[test]
fn test_is_winner_lines() {
    let row = game_from([[E, E, E], [X, X, X], [O, O, E]]);
    let col = game_from([[O, X, E], [O, X, E], [E, X, E]]);
    let diag = game_from([[X, O, E], [O, X, E], [E, E, X]]);
    let anti = game_from([[O, E, X], [O, X, E], [X, E, E]]);
    for game in [&row, &col, &diag, &anti] {
        assert!(game.is_winner(PlayerId::User));
        assert!(!game.is_winner(PlayerId::Computer));
    }

    let none = game_from([[X, O, X], [X, O, O], [O, X, X]]);
    assert!(!none.is_winner(PlayerId::User));
    assert!(!none.is_winner(PlayerId::Computer));
}

#[test]
fn test_user_three_in_a_row() {
    let mut game = GameState::new();
    game.accept_user_move(0, 0).unwrap();
    game.accept_user_move(0, 1).unwrap();
    game.accept_user_move(0, 2).unwrap();
    assert!(game.is_winner(PlayerId::User));
    assert_eq!(game.check_game(), GameOutcome::UserWon);
}

#[test]
fn test_computer_win() {
    let game = game_from([[X, X, O], [E, O, X], [O, E, E]]);
    assert_eq!(game.check_game(), GameOutcome::ComputerWon);
}

#[test]
fn test_user_win_on_full_board() {
    let game = game_from([[X, X, X], [O, O, X], [X, O, O]]);
    assert_eq!(game.check_game(), GameOutcome::UserWon);
}

#[test]
fn test_user_win_reported_before_computer_win() {
    let game = game_from([[X, X, X], [O, O, O], [E, E, E]]);
    assert_eq!(game.check_game(), GameOutcome::UserWon);
}

#[test]
fn test_draw() {
    // X O X
    // X O O
    // O X X
    let mut game = game_from([[E, O, E], [E, O, O], [O, E, E]]);
    for (x, y) in [(0, 0), (0, 2), (1, 0), (2, 1)] {
        game.accept_user_move(x, y).unwrap();
        assert_eq!(game.check_game(), GameOutcome::Continue);
    }
    game.accept_user_move(2, 2).unwrap();
    assert!(game.free_cells().is_empty());
    assert_eq!(game.check_game(), GameOutcome::Draw);
}

#[test]
fn test_draw_with_last_cell_taken_by_computer() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut game = game_from([[X, O, X], [X, X, O], [O, X, E]]);
    assert_eq!(game.check_game(), GameOutcome::Continue);
    assert_eq!(game.create_computer_move(&mut rng).unwrap(), (2, 2));
    assert_eq!(game.check_game(), GameOutcome::Draw);
}

#[test]
fn test_moves_allowed_after_game_over() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = GameState::new();
    game.accept_user_move(0, 0).unwrap();
    game.accept_user_move(1, 1).unwrap();
    game.accept_user_move(2, 2).unwrap();
    assert!(game.check_game().is_terminal());

    game.accept_user_move(2, 0).unwrap();
    game.create_computer_move(&mut rng).unwrap();
    assert_eq!(game.move_history().len(), 5);
    assert_eq!(game.check_game(), GameOutcome::UserWon);
}

#[test]
fn test_outcome_messages() {
    assert_eq!(GameOutcome::UserWon.to_string(), "user won!");
    assert_eq!(GameOutcome::ComputerWon.to_string(), "computer won!");
    assert_eq!(GameOutcome::Draw.to_string(), "nobody won :–(");
    assert_eq!(GameOutcome::Continue.to_string(), "continue");
    assert_eq!(GameError::InvalidMove.to_string(), "cell is already taken");
    assert_eq!(GameError::NoMovesAvailable.to_string(), "no cells available");
}
