use proptest::prelude::*;
use tictactoe::models::constants::{NUM_CELLS, WINNING_LINES};
use tictactoe::{Board, BoardError, Cell, GameEngine, Outcome, Player, Status};

/// A board cell as generated: empty, X or O.
fn cell_strategy() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(true)), Just(Some(false))]
}

fn build_board(cells: &[Option<bool>]) -> Board {
    let human = Player::human("Alice");
    let computer = Player::computer();
    let mut board = Board::new();
    for (i, cell) in cells.iter().enumerate() {
        match cell {
            Some(true) => board.place(i, &human).unwrap(),
            Some(false) => board.place(i, &computer).unwrap(),
            None => {}
        }
    }
    board
}

fn running_engine(seed: u64, board: Board) -> GameEngine {
    let mut engine = GameEngine::new(seed);
    engine.begin_round(Player::human("Alice"));
    *engine.board_mut() = board;
    engine
}

/// Straightforward reference: first line in scan order, X before O.
fn expected_outcome(board: &Board) -> Option<Outcome> {
    for line in WINNING_LINES {
        let owner = |symbol| line.iter().all(|&i| board.cells()[i].placeholder() == symbol);
        if owner('X') {
            return Some(Outcome::Won);
        }
        if owner('O') {
            return Some(Outcome::Lost);
        }
    }
    board.is_full().then_some(Outcome::Draw)
}

proptest! {
    /// Property: placing on an empty cell changes exactly that cell
    #[test]
    fn place_changes_only_target(
        cells in prop::collection::vec(cell_strategy(), NUM_CELLS),
        index in 0..NUM_CELLS,
    ) {
        let mut board = build_board(&cells);
        let before = board.clone();
        let result = board.place(index, &Player::human("Alice"));

        if before.cells()[index].is_empty() {
            prop_assert!(result.is_ok());
            for i in 0..NUM_CELLS {
                if i == index {
                    prop_assert_eq!(board.cells()[i].placeholder(), 'X');
                } else {
                    prop_assert_eq!(&board.cells()[i], &before.cells()[i]);
                }
            }
        } else {
            prop_assert_eq!(result, Err(BoardError::CellTaken(index)));
            prop_assert_eq!(board, before);
        }
    }

    /// Property: the computer only ever fills a previously empty cell
    #[test]
    fn computer_move_targets_empty_cell(
        seed in any::<u64>(),
        cells in prop::collection::vec(cell_strategy(), NUM_CELLS),
    ) {
        let board = build_board(&cells);
        let empty_before = board.empty_indices();
        let mut engine = running_engine(seed, board.clone());

        match engine.computer_move() {
            Some(index) => {
                prop_assert!(empty_before.contains(&index));
                prop_assert!(matches!(&engine.board().cells()[index], Cell::Filled(p) if p.symbol() == 'O'));
                prop_assert_eq!(engine.board().empty_indices().len(), empty_before.len() - 1);
            }
            None => {
                prop_assert!(empty_before.is_empty());
                prop_assert_eq!(engine.board(), &board);
            }
        }
    }

    /// Property: outcome evaluation matches the line scan and moves to GameOver
    #[test]
    fn outcome_matches_line_scan(
        cells in prop::collection::vec(cell_strategy(), NUM_CELLS),
    ) {
        let board = build_board(&cells);
        let expected = expected_outcome(&board);
        let mut engine = running_engine(0, board);

        prop_assert_eq!(engine.evaluate_outcome(), expected);
        let status = if expected.is_some() { Status::GameOver } else { Status::Running };
        prop_assert_eq!(engine.status(), status);
    }

    /// Property: any sequence of human moves keeps the board consistent
    #[test]
    fn random_play_keeps_board_consistent(
        seed in any::<u64>(),
        moves in prop::collection::vec(0..NUM_CELLS, 1..20),
    ) {
        let mut engine = GameEngine::new(seed);
        engine.begin_round(Player::human("Alice"));

        for index in moves {
            if engine.status() != Status::Running {
                break;
            }
            let xs = engine.board().indices_marked('X').len();
            let os = engine.board().indices_marked('O').len();
            match engine.play_turn(index) {
                Ok(_) => {
                    prop_assert_eq!(engine.board().indices_marked('X').len(), xs + 1);
                    prop_assert!(engine.board().indices_marked('O').len() <= os + 1);
                }
                Err(err) => {
                    prop_assert_eq!(err, BoardError::CellTaken(index));
                    prop_assert_eq!(engine.board().indices_marked('O').len(), os);
                }
            }
            let xs = engine.board().indices_marked('X').len();
            let os = engine.board().indices_marked('O').len();
            prop_assert!(xs == os || xs == os + 1);
        }
    }
}
