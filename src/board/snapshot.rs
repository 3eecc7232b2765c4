//! Board snapshots exchanged with the display layer.
//!
//! Each display cell holds either nothing or a piece code: `W`/`B` followed by
//! a case-insensitive piece name (`Wpawn`, `BKnight`, ...). Ingestion is total:
//! a cell whose code cannot be decoded is read as empty.

use std::fmt;

use super::error::{PieceCodeError, SnapshotError};
use super::{Board, Color, Piece, Square};

const EMPTY_CELL: &str = ".";

/// Decode a piece code such as `Wknight` or `Bqueen`.
pub fn parse_piece_code(code: &str) -> Result<(Color, Piece), PieceCodeError> {
    let code = code.trim();
    let mut chars = code.chars();
    let first = chars.next().ok_or(PieceCodeError::Empty)?;
    let color = Color::from_code_char(first).ok_or(PieceCodeError::InvalidColor { char: first })?;
    let name = chars.as_str();
    let piece = Piece::from_name(name).ok_or_else(|| PieceCodeError::InvalidKind {
        name: name.to_string(),
    })?;
    Ok((color, piece))
}

/// Encode a piece as its display code, e.g. `(White, Rook)` -> `Wrook`.
#[must_use]
pub fn piece_code(color: Color, piece: Piece) -> String {
    format!("{}{}", color.code_char(), piece.name())
}

fn decode_cell(square: Square, code: &str) -> Option<(Color, Piece)> {
    let code = code.trim();
    if code.is_empty() || code == EMPTY_CELL {
        return None;
    }
    match parse_piece_code(code) {
        Ok(piece) => Some(piece),
        Err(err) => {
            log::warn!("treating {square} as empty: {err}");
            None
        }
    }
}

impl Board {
    /// Build a board by reading the code of every one of the 64 cells.
    ///
    /// Empty and undecodable codes both produce an empty square.
    pub fn from_codes<F, S>(mut cell: F) -> Board
    where
        F: FnMut(Square) -> S,
        S: AsRef<str>,
    {
        let mut board = Board::empty();
        for square in Square::all() {
            if let Some((color, piece)) = decode_cell(square, cell(square).as_ref()) {
                board.set_piece(square, color, piece);
            }
        }
        board
    }

    /// Parse an 8x8 text grid, row 8 first, `.` marking an empty cell.
    ///
    /// Blank lines are skipped. Cell codes are decoded leniently as in
    /// [`Board::from_codes`], but the grid shape must be exact.
    pub fn from_grid(text: &str) -> Result<Board, SnapshotError> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().collect())
            .collect();

        if rows.len() != 8 {
            return Err(SnapshotError::RowCount { found: rows.len() });
        }
        for (i, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(SnapshotError::ColumnCount {
                    row: 8 - i,
                    found: cells.len(),
                });
            }
        }

        Ok(Board::from_codes(|sq| {
            rows[8 - sq.row() as usize][sq.col() as usize - 1]
        }))
    }

    /// Code of the piece on `square`, or an empty string.
    #[must_use]
    pub fn code_at(&self, square: Square) -> String {
        self.piece_at(square)
            .map(|(color, piece)| piece_code(color, piece))
            .unwrap_or_default()
    }

    /// Render in the format read by [`Board::from_grid`].
    #[must_use]
    pub fn to_grid(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            let cells: Vec<String> = (1..=8)
                .filter_map(|col| Square::new(row, col))
                .map(|sq| match self.piece_at(sq) {
                    Some((color, piece)) => format!("{:<7}", piece_code(color, piece)),
                    None => format!("{EMPTY_CELL:<7}"),
                })
                .collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}
