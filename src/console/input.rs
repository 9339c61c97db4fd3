//! Move text interpretation.

use crate::games::tictactoe::{Position, SIZE};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Command that ends the session without a result.
pub const EXIT_COMMAND: &str = "exit";

/// What a line of player input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Player typed `exit` (any case).
    Quit,
    /// Nothing but whitespace; prompt again.
    Empty,
    /// A square on the board.
    Space(Position),
    /// Text that does not name a square.
    Invalid(ParseError),
}

/// Why move text failed to name a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Scanning stopped at this character before both coordinates were read.
    #[display("unexpected {_0:?}")]
    Unexpected(#[error(not(source))] char),
    /// No row letter was found.
    #[display("missing row letter")]
    MissingRow,
    /// No column digit was found.
    #[display("missing column digit")]
    MissingColumn,
}

/// Classifies one line of player input.
#[instrument]
pub fn classify(line: &str) -> MoveInput {
    let text = line.trim();
    if text.eq_ignore_ascii_case(EXIT_COMMAND) {
        MoveInput::Quit
    } else if text.is_empty() {
        MoveInput::Empty
    } else {
        match parse_position(text) {
            Ok(position) => MoveInput::Space(position),
            Err(e) => {
                debug!(error = %e, "Move text rejected");
                MoveInput::Invalid(e)
            }
        }
    }
}

/// Parses a row letter and column digit in either order, e.g. `a1` or `1A`.
///
/// Whitespace is skipped. Scanning stops at the first character that is
/// neither a fresh row letter nor a fresh column digit; the text is valid
/// if both coordinates were read by then.
pub fn parse_position(text: &str) -> Result<Position, ParseError> {
    let mut row: Option<usize> = None;
    let mut column: Option<usize> = None;
    let mut stopped_at = None;

    for c in text.chars().filter(|c| !c.is_whitespace()) {
        let lower = c.to_ascii_lowercase();
        match lower {
            '1'..='3' if column.is_none() => column = Some(lower as usize - '1' as usize),
            'a'..='c' if row.is_none() => row = Some(lower as usize - 'a' as usize),
            _ => {
                stopped_at = Some(c);
                break;
            }
        }
    }

    match (row, column) {
        (Some(row), Some(column)) => {
            debug_assert!(row < SIZE && column < SIZE);
            Ok(Position::from_parts(row, column))
        }
        _ => Err(match (stopped_at, row) {
            (Some(c), _) => ParseError::Unexpected(c),
            (None, None) => ParseError::MissingRow,
            (None, Some(_)) => ParseError::MissingColumn,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, column: usize) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(parse_position("a1"), Ok(pos(0, 0)));
        assert_eq!(parse_position("1a"), Ok(pos(0, 0)));
        assert_eq!(parse_position("C3"), Ok(pos(2, 2)));
        assert_eq!(parse_position("2 b"), Ok(pos(1, 1)));
    }

    #[test]
    fn test_rejected_text() {
        assert_eq!(parse_position("aa"), Err(ParseError::Unexpected('a')));
        assert_eq!(parse_position("11"), Err(ParseError::Unexpected('1')));
        assert_eq!(parse_position("a"), Err(ParseError::MissingColumn));
        assert_eq!(parse_position("1"), Err(ParseError::MissingRow));
        assert_eq!(parse_position("d1"), Err(ParseError::Unexpected('d')));
        assert_eq!(parse_position("4a"), Err(ParseError::Unexpected('4')));
        assert_eq!(parse_position("ax1"), Err(ParseError::Unexpected('x')));
    }

    #[test]
    fn test_parse_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ParseError::Unexpected('d'));
        assert_eq!(err.to_string(), "unexpected 'd'");
        assert!(err.source().is_none());
        assert_eq!(ParseError::MissingRow.to_string(), "missing row letter");
    }

    #[test]
    fn test_trailing_text_after_both_coordinates() {
        assert_eq!(parse_position("b2!"), Ok(pos(1, 1)));
        assert_eq!(parse_position("b2 3"), Ok(pos(1, 1)));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("  EXIT \n"), MoveInput::Quit);
        assert_eq!(classify("   \n"), MoveInput::Empty);
        assert_eq!(classify(" 3c\n"), MoveInput::Space(pos(2, 2)));
        assert_eq!(
            classify("exit now"),
            MoveInput::Invalid(ParseError::Unexpected('e'))
        );
    }
}
