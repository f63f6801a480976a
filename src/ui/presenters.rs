use crate::io::OutputWriter;
use crate::models::board::Board;
use crate::models::constants::BOARD_SIZE;
use crate::models::player::Player;
use crate::models::status::Outcome;

const FRAME: &str = "-------------";

pub struct BoardPresenter;

impl BoardPresenter {
    /// Draw the grid, one framed row per line:
    ///
    /// ```text
    /// -------------
    /// | X | _ | O |
    /// -------------
    /// ```
    pub fn show_board(board: &Board, output: &mut dyn OutputWriter) {
        output.writeln(FRAME);
        for row in 0..BOARD_SIZE {
            output.writeln(&Self::format_row(board, row));
            output.writeln(FRAME);
        }
    }

    fn format_row(board: &Board, row: usize) -> String {
        let [a, b, c] = board.row(row);
        format!("| {} | {} | {} |", a, b, c)
    }
}

pub struct GamePresenter;

impl GamePresenter {
    pub fn show_welcome(output: &mut dyn OutputWriter) {
        output.writeln("*** TIC TAC TOE ***");
        output.writeln("");
        output.writeln("YOU PLAY X AGAINST THE COMPUTER, WHO PLAYS O.");
        output.writeln("CELLS ARE NUMBERED 0 TO 8, LEFT TO RIGHT, TOP TO BOTTOM:");
        output.writeln(FRAME);
        for row in 0..BOARD_SIZE {
            let start = row * BOARD_SIZE;
            output.writeln(&format!("| {} | {} | {} |", start, start + 1, start + 2));
            output.writeln(FRAME);
        }
        output.writeln("THREE IN A ROW, COLUMN OR DIAGONAL WINS.");
        output.writeln("");
    }

    pub fn show_turn(player: &Player, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{}, YOUR TURN. YOU ARE {}.",
            player.name(),
            player.symbol()
        ));
    }

    pub fn show_outcome(outcome: Outcome, player: &Player, output: &mut dyn OutputWriter) {
        let line = match outcome {
            Outcome::Won => format!("Congratulations {}, You Won!", player.name()),
            Outcome::Lost => format!("Sorry {}, You Lost!", player.name()),
            Outcome::Draw => "DRAW!".to_string(),
        };
        output.writeln(&line);
    }

    pub fn show_cell_taken(output: &mut dyn OutputWriter) {
        output.writeln("Cell Taken, Choose Another.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;

    #[test]
    fn empty_board_renders_placeholders() {
        let mut output = MockOutput::new();
        BoardPresenter::show_board(&Board::new(), &mut output);

        assert_eq!(
            output.messages,
            vec![
                FRAME,
                "| _ | _ | _ |",
                FRAME,
                "| _ | _ | _ |",
                FRAME,
                "| _ | _ | _ |",
                FRAME,
            ]
        );
        assert!(output.messages.iter().all(|line| line.len() == 13));
    }

    #[test]
    fn filled_cells_render_symbols() {
        let mut board = Board::new();
        board.place(0, &Player::human("Alice")).unwrap();
        board.place(8, &Player::computer()).unwrap();

        let mut output = MockOutput::new();
        BoardPresenter::show_board(&board, &mut output);
        assert_eq!(output.messages[1], "| X | _ | _ |");
        assert_eq!(output.messages[5], "| _ | _ | O |");
    }

    #[test]
    fn outcome_lines() {
        let alice = Player::human("Alice");
        let mut output = MockOutput::new();
        GamePresenter::show_outcome(Outcome::Won, &alice, &mut output);
        GamePresenter::show_outcome(Outcome::Lost, &alice, &mut output);
        GamePresenter::show_outcome(Outcome::Draw, &alice, &mut output);

        assert_eq!(
            output.messages,
            vec![
                "Congratulations Alice, You Won!",
                "Sorry Alice, You Lost!",
                "DRAW!",
            ]
        );
    }
}
