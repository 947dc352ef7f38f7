//! Module for the `Castling` structure, which helps the `Board` keep track
//! of the castling rights available to each player.
//!
//! At its core, a [`Castling`] is a simple u8 with one bit per right. The
//! bit assignment doubles as the index into the castling Zobrist key table,
//! so it must not be rearranged.
//!
//! [`Castling`]: struct.Castling.html

use bitflags::bitflags;

use crate::core::masks::CASTLING_RIGHTS_MASK;
use crate::core::sq::SQ;
use crate::core::Player;

use std::fmt;

bitflags! {
    /// Structure to help with recognizing the various possibilities of
    /// castling.
    ///
    /// Keeps track of what sides each player may still castle to. A set bit
    /// does not guarantee castling is legal right now, only that neither
    /// the king nor the relevant rook has moved since the game started.
    pub struct Castling: u8 {
        const WHITE_K = 0b0001; // White has King-side castling ability
        const WHITE_Q = 0b0010; // White has Queen-side castling ability
        const BLACK_K = 0b0100; // Black has King-side castling ability
        const BLACK_Q = 0b1000; // Black has Queen-side castling ability
    }
}

impl Castling {
    /// All four castling rights.
    #[inline]
    pub const fn all_castling() -> Self {
        Castling { bits: 0b1111 }
    }

    /// No castling rights at all.
    #[inline]
    pub const fn empty_set() -> Self {
        Castling { bits: 0 }
    }

    /// The king-side right of a player.
    #[inline]
    pub fn king_side(player: Player) -> Castling {
        match player {
            Player::White => Castling::WHITE_K,
            Player::Black => Castling::BLACK_K,
        }
    }

    /// The queen-side right of a player.
    #[inline]
    pub fn queen_side(player: Player) -> Castling {
        match player {
            Player::White => Castling::WHITE_Q,
            Player::Black => Castling::BLACK_Q,
        }
    }

    /// Adds the right encoded by a FEN castling character. Unknown
    /// characters are ignored.
    pub fn add_castling_char(&mut self, c: char) {
        *self |= match c {
            'K' => Castling::WHITE_K,
            'Q' => Castling::WHITE_Q,
            'k' => Castling::BLACK_K,
            'q' => Castling::BLACK_Q,
            _ => Castling::empty_set(),
        };
    }

    /// Returns the rights surviving a move between the two squares. Moving
    /// the king or a rook off its home square — or capturing a rook on one —
    /// clears the corresponding rights.
    #[inline]
    pub fn mask_move(self, from: SQ, to: SQ) -> Castling {
        Castling {
            bits: self.bits
                & CASTLING_RIGHTS_MASK[from.0 as usize]
                & CASTLING_RIGHTS_MASK[to.0 as usize],
        }
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        if self.contains(Castling::WHITE_K) {
            write!(f, "K")?;
        }
        if self.contains(Castling::WHITE_Q) {
            write!(f, "Q")?;
        }
        if self.contains(Castling::BLACK_K) {
            write!(f, "k")?;
        }
        if self.contains(Castling::BLACK_Q) {
            write!(f, "q")?;
        }
        Ok(())
    }
}
