//! Text rendering of the board.

use crate::games::tictactoe::{Board, Position, SIZE};
use std::io::{self, Write};

const COLUMN_SEPARATOR: &str = " | ";
const ROW_SEPARATOR: char = '-';

/// Renders the board as a labelled table, without a trailing newline.
///
/// ```text
///   | 1 | 2 | 3
/// -------------
/// A | X |   |  
/// ```
pub fn render_board(board: &Board) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(SIZE + 1);

    let header = std::iter::once(" ".to_string())
        .chain((1..=SIZE).map(|column| column.to_string()))
        .collect();
    rows.push(header);

    for (index, squares) in board.rows().iter().enumerate() {
        let label = Position::from_parts(index, 0).row_label().to_string();
        let row = std::iter::once(label)
            .chain(squares.iter().map(ToString::to_string))
            .collect();
        rows.push(row);
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|cells| cells.join(COLUMN_SEPARATOR))
        .collect();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let separator = format!("\n{}\n", ROW_SEPARATOR.to_string().repeat(width));

    lines.join(separator.as_str())
}

/// Writes the board followed by a newline and a blank line.
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out, "{}", render_board(board))?;
    writeln!(out)
}
