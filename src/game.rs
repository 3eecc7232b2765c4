//! Positions, game status and the select-then-move interaction flow.
//!
//! The board rules only answer two facts about a side: whether it is in check
//! and whether it has any legal move. `Position::status` combines them into a
//! [`GameStatus`]. Turn and selection state are explicit values passed in and
//! returned, so a display layer can stay a thin renderer over them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, MoveError, Square};

/// Classification of a position for its side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Not in check, has a legal move.
    Ongoing,
    /// In check, has a legal move.
    Check,
    /// In check with no legal move.
    Checkmate { winner: Color },
    /// Not in check, no legal move.
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// A board together with the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    #[must_use]
    pub const fn new(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
        }
    }

    /// Standard opening position, White to move.
    #[must_use]
    pub fn starting() -> Self {
        Position::new(Board::new(), Color::White)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.board.is_in_check(side);
        let status = match (in_check, self.board.side_has_any_legal_move(side)) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate {
                winner: side.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
        };
        log::debug!("{side} to move: {status:?}");
        status
    }

    /// Legal destinations from `from`, empty unless the side to move owns that piece.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        if self.board.color_at(from) == Some(self.side_to_move) {
            self.board.legal_moves(from)
        } else {
            Vec::new()
        }
    }

    /// Every legal move of the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves_for(self.side_to_move)
    }

    /// Play a legal move and hand the turn to the opponent.
    pub fn play(&self, mv: Move) -> Result<Position, MoveError> {
        let (color, piece) = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySource { square: mv.from })?;
        if color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: mv.from,
                side_to_move: self.side_to_move,
            });
        }
        if !self.board.legal_moves(mv.from).contains(&mv.to) {
            return Err(MoveError::Illegal {
                from: mv.from,
                to: mv.to,
            });
        }

        log::debug!("{color} plays {mv}");
        Ok(Position::new(
            self.board.apply_move(mv, (color, piece)),
            color.opponent(),
        ))
    }

    /// React to a click on `square` given the current selection.
    ///
    /// Clicking one of the selected piece's targets plays the move. Clicking a
    /// piece of the side to move that has a legal move selects it. Anything
    /// else clears the selection.
    #[must_use]
    pub fn click(&self, selection: Option<&Selection>, square: Square) -> ClickOutcome {
        if let Some(selected) = selection {
            if selected.targets.contains(&square) {
                let mv = Move::new(selected.from, square);
                return match self.play(mv) {
                    Ok(position) => {
                        let status = position.status();
                        ClickOutcome::Moved {
                            mv,
                            position,
                            status,
                        }
                    }
                    Err(err) => {
                        log::debug!("stale selection: {err}");
                        ClickOutcome::Cleared
                    }
                };
            }
        }

        let targets = self.legal_moves(square);
        if targets.is_empty() {
            ClickOutcome::Cleared
        } else {
            ClickOutcome::Selected(Selection {
                from: square,
                targets,
            })
        }
    }
}

impl fmt::Display for Position {
    /// The status line shown to players, e.g. `White is in check!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side_to_move;
        match self.status() {
            GameStatus::Ongoing => write!(f, "{side}'s turn"),
            GameStatus::Check => write!(f, "{side} is in check!"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate! {winner} wins!"),
            GameStatus::Stalemate => write!(f, "Stalemate!"),
        }
    }
}

/// A selected piece and the squares it may move to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    pub from: Square,
    pub targets: Vec<Square>,
}

/// Result of [`Position::click`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected; highlight `from` and its targets.
    Selected(Selection),
    /// A move was played; `position` has the opponent to move.
    Moved {
        mv: Move,
        position: Position,
        status: GameStatus,
    },
    /// Nothing selected.
    Cleared,
}
