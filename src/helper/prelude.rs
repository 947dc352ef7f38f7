//! Default functions for accessing the statically computed lookup tables.
//!
//! # Safety
//!
//! The tables must be initialized through [`init_statics`] before any other
//! function here is called. `Board` construction does this automatically,
//! so with normal use there is nothing to arrange.
//!
//! [`init_statics`]: fn.init_statics.html

use super::boards;
use super::magic;
use super::zobrist;

use crate::core::bitboard::BitBoard;
use crate::core::sq::SQ;
use crate::core::{Piece, Player};

pub use super::zobrist::Key;

use std::sync::atomic::{compiler_fence, fence, Ordering};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the static structures. Guaranteed to only run once.
#[cold]
pub fn init_statics() {
    INIT.call_once(|| {
        compiler_fence(Ordering::SeqCst);
        fence(Ordering::SeqCst);
        zobrist::init_zobrist();
        magic::init_magics();
        compiler_fence(Ordering::SeqCst);
        boards::init_boards();
        fence(Ordering::SeqCst);
        compiler_fence(Ordering::SeqCst);
    });
}

// MAGIC FUNCTIONS

/// Generate bishop attacks `BitBoard` from a square and all occupied
/// squares on the board. The result includes squares holding pieces of both
/// sides; intersect with a target mask as needed.
#[inline(always)]
pub fn bishop_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::bishop_attacks(occupied.0, sq.0))
}

/// Generate rook attacks `BitBoard` from a square and all occupied squares
/// on the board. The result includes squares holding pieces of both sides;
/// intersect with a target mask as needed.
#[inline(always)]
pub fn rook_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::rook_attacks(occupied.0, sq.0))
}

// BOARD FUNCTIONS

/// Generate knight moves `BitBoard` from a source square.
#[inline(always)]
pub fn knight_moves(sq: SQ) -> BitBoard {
    BitBoard(boards::knight_moves(sq))
}

/// Generate king moves `BitBoard` from a source square.
#[inline(always)]
pub fn king_moves(sq: SQ) -> BitBoard {
    BitBoard(boards::king_moves(sq))
}

/// Pawn attacks `BitBoard` from a given square, per player.
#[inline(always)]
pub fn pawn_attacks_from(sq: SQ, player: Player) -> BitBoard {
    BitBoard(boards::pawn_attacks_from(sq, player))
}

/// Get the `BitBoard` of squares between two squares, not including the
/// squares, if they share a queen ray.
#[inline(always)]
pub fn between_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    BitBoard(boards::between_bb(sq_one, sq_two))
}

/// The |Δsquare| ray step code between two aligned squares: 1 along a rank,
/// 8 along a file, 7 or 9 along a diagonal, 0 if not aligned.
#[inline(always)]
pub fn ray_direction(sq_one: SQ, sq_two: SQ) -> u8 {
    boards::ray_direction(sq_one, sq_two)
}

/// The full A1-H8 diagonal through a square, excluding the square.
#[inline(always)]
pub fn diagonal_bb(sq: SQ) -> BitBoard {
    BitBoard(boards::diagonal_bb(sq))
}

/// The full A8-H1 antidiagonal through a square, excluding the square.
#[inline(always)]
pub fn antidiagonal_bb(sq: SQ) -> BitBoard {
    BitBoard(boards::antidiagonal_bb(sq))
}

/// The full file through a square, excluding the square.
#[inline(always)]
pub fn file_line_bb(sq: SQ) -> BitBoard {
    BitBoard(boards::file_line_bb(sq))
}

/// The full rank through a square, excluding the square.
#[inline(always)]
pub fn rank_line_bb(sq: SQ) -> BitBoard {
    BitBoard(boards::rank_line_bb(sq))
}

/// The horizontally adjacent squares of a square on rank 4 or 5, else 0.
#[inline(always)]
pub fn ep_adjacent_bb(sq: SQ) -> BitBoard {
    BitBoard(boards::ep_adjacent_bb(sq))
}

// ZOBRIST FUNCTIONS

/// Returns the Zobrist key of the given side to move.
#[inline(always)]
pub fn z_player(player: Player) -> Key {
    zobrist::z_player(player)
}

/// Returns the Zobrist key of a colored piece on a square.
#[inline(always)]
pub fn z_square(sq: SQ, piece: Piece) -> Key {
    zobrist::z_square(sq, piece)
}

/// Returns the Zobrist key of a castling-rights combination.
#[inline(always)]
pub fn z_castling(castling: u8) -> Key {
    zobrist::z_castling(castling)
}

/// Returns the Zobrist key of an en-passant square, including the sentinel.
#[inline(always)]
pub fn z_ep(sq: SQ) -> Key {
    zobrist::z_ep(sq)
}

/// Returns the side-to-move flip key.
#[inline(always)]
pub fn z_play() -> Key {
    zobrist::z_play()
}
