//! A magic-bitboard perft engine.
//!
//! This crate enumerates the leaf nodes of the full legal-move tree of a
//! chess position — the standard correctness and performance benchmark for
//! move generators. It contains the board representation & associated
//! machinery (bitboards, magic-number slider attacks, Zobrist keys,
//! make/unmake) together with a depth-first walker that can memoize subtree
//! counts in a bucketed transposition table.
//!
//! # Examples
//!
//! Counting the leaves of the starting position:
//!
//! ```
//! use magpie::board::perft::perft;
//! use magpie::Board;
//!
//! let mut board = Board::start_pos();
//! assert_eq!(perft(&mut board, 3), 8_902);
//! ```
//!
//! Seeding an arbitrary position from a FEN string:
//!
//! ```
//! use magpie::Board;
//!
//! let board = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -").unwrap();
//! assert_eq!(board.generate_moves().len(), 14);
//! ```
//!
//! # Safety
//!
//! The lookup tables are initialized once, on first board construction, and
//! are read-only afterwards. A `BitMove` is only meaningful for the exact
//! position that generated it; applying a move from another position is
//! undefined (garbage-in, garbage-out, though memory-safe).

pub mod board;
pub mod core;
pub mod helper;
pub mod tools;

pub use crate::board::Board;
pub use crate::core::bitboard::BitBoard;
pub use crate::core::move_list::MoveList;
pub use crate::core::piece_move::BitMove;
pub use crate::core::sq::SQ;
pub use crate::core::{Piece, PieceType, Player};
