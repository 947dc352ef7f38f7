//! Contains the `BoardState` structure for the `Board`. Helps to preserve
//! the previous state of the board without needing to re-compute
//! information.
//!
//! As the [`BoardState`] is automatically created for each position of the
//! [`Board`], there is little need for interacting directly with this
//! module.
//!
//! [`BoardState`]: struct.BoardState.html
//! [`Board`]: ../struct.Board.html

use super::castle_rights::Castling;
use crate::core::bitboard::BitBoard;
use crate::core::piece_move::BitMove;
use crate::core::sq::{NO_SQ, SQ};
use crate::core::Piece;
use crate::helper::zobrist::Key;

/// Holds useful information concerning the current state of the [`Board`].
///
/// This is information computed upon making a move, needed to undo that
/// move and to answer pin/check queries cheaply. The board holds one
/// `BoardState` per ply in a preallocated stack.
///
/// [`Board`]: ../struct.Board.html
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoardState {
    /// Own pieces absolutely pinned to the side-to-move's king.
    pub pinned: BitBoard,
    /// Enemy pieces currently giving check to the side-to-move's king.
    pub checkers: BitBoard,
    /// The castling rights for the current board.
    pub castling: Castling,
    /// The square a pawn may capture onto en passant, `NO_SQ` if none.
    pub ep_square: SQ,
    /// The piece captured by the move that produced this state, if any.
    pub captured: Piece,
    /// The move that produced this state. `BitMove::null()` at the root.
    pub prev_move: BitMove,
    /// The Zobrist fingerprint of the position.
    pub key: Key,
}

impl BoardState {
    /// Constructs a blank `BoardState`.
    pub const fn blank() -> BoardState {
        BoardState {
            pinned: BitBoard::EMPTY,
            checkers: BitBoard::EMPTY,
            castling: Castling::empty_set(),
            ep_square: NO_SQ,
            captured: Piece::None,
            prev_move: BitMove::null(),
            key: Key::ZERO,
        }
    }

    /// Returns if this position has an en-passant square.
    #[inline(always)]
    pub fn has_ep(&self) -> bool {
        self.ep_square.is_okay()
    }
}
