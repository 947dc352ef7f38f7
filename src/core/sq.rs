//! Contains the representation of a chessboard's square.
//!
//! Internally, a `SQ` is just a u8. The number of a `SQ` maps to the
//! following squares of a chessboard:
//!
//! ```md,ignore
//! 8 | 56 57 58 59 60 61 62 63
//! 7 | 48 49 50 51 52 53 54 55
//! 6 | 40 41 42 43 44 45 46 47
//! 5 | 32 33 34 35 36 37 38 39
//! 4 | 24 25 26 27 28 29 30 31
//! 3 | 16 17 18 19 20 21 22 23
//! 2 | 8  9  10 11 12 13 14 15
//! 1 | 0  1  2  3  4  5  6  7
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! # Use of `NO_SQ`
//!
//! `NO_SQ` is used to signify the lack of a legal square. The board uses it
//! to represent the lack of an en-passant square; any value above 63 is
//! treated the same way.

use super::bit_twiddles::diff;
use super::masks::{FILE_BB, RANK_BB};

use std::fmt;
use std::ops::*;

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Default, Hash, PartialEq, PartialOrd, Eq, Debug)]
#[repr(transparent)]
pub struct SQ(pub u8);

impl_bit_ops!(SQ, u8);

/// `SQ` representing no square available. Used internally to represent
/// the lack of an available en-passant square.
pub const NO_SQ: SQ = SQ(64);

impl SQ {
    #[rustfmt::skip]
    pub const A1: SQ = SQ(0);  pub const B1: SQ = SQ(1);  pub const C1: SQ = SQ(2);  pub const D1: SQ = SQ(3);
    #[rustfmt::skip]
    pub const E1: SQ = SQ(4);  pub const F1: SQ = SQ(5);  pub const G1: SQ = SQ(6);  pub const H1: SQ = SQ(7);
    #[rustfmt::skip]
    pub const A2: SQ = SQ(8);  pub const E2: SQ = SQ(12); pub const H2: SQ = SQ(15);
    #[rustfmt::skip]
    pub const A7: SQ = SQ(48); pub const E7: SQ = SQ(52);
    #[rustfmt::skip]
    pub const A8: SQ = SQ(56); pub const B8: SQ = SQ(57); pub const C8: SQ = SQ(58); pub const D8: SQ = SQ(59);
    #[rustfmt::skip]
    pub const E8: SQ = SQ(60); pub const F8: SQ = SQ(61); pub const G8: SQ = SQ(62); pub const H8: SQ = SQ(63);

    /// Returns if a `SQ` is within the legal bounds of a square, which is
    /// inclusively between 0 - 63.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.0 < 64
    }

    /// Makes a square from a file and a rank index.
    #[inline(always)]
    pub const fn make(file: u8, rank: u8) -> SQ {
        SQ((rank << 3) | file)
    }

    /// Returns the file index (0 for file A) of the square.
    #[inline(always)]
    pub const fn file_idx(self) -> u8 {
        self.0 & 0b0000_0111
    }

    /// Returns the rank index (0 for rank 1) of the square.
    #[inline(always)]
    pub const fn rank_idx(self) -> u8 {
        self.0 >> 3
    }

    /// Returns the `BitBoard` bit of this square.
    #[inline(always)]
    pub const fn to_bb(self) -> u64 {
        1u64 << self.0
    }

    /// Returns the rank-mask of this square's rank.
    #[inline(always)]
    pub fn rank_bb(self) -> u64 {
        RANK_BB[self.rank_idx() as usize]
    }

    /// Returns the file-mask of this square's file.
    #[inline(always)]
    pub fn file_bb(self) -> u64 {
        FILE_BB[self.file_idx() as usize]
    }

    /// Returns the square displaced by `delta`, which may be negative.
    ///
    /// # Safety
    ///
    /// The caller must guarantee the displaced square stays on the board;
    /// the arithmetic wraps otherwise.
    #[inline(always)]
    pub const fn offset(self, delta: i8) -> SQ {
        SQ((self.0 as i8).wrapping_add(delta) as u8)
    }

    /// Returns the distance between this square and another square, in
    /// king moves.
    #[inline]
    pub fn distance(self, other: SQ) -> u8 {
        let x = diff(self.rank_idx(), other.rank_idx());
        let y = diff(self.file_idx(), other.file_idx());
        if x > y {
            x
        } else {
            y
        }
    }
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            write!(
                f,
                "{}{}",
                (b'a' + self.file_idx()) as char,
                (b'1' + self.rank_idx()) as char
            )
        } else {
            write!(f, "-")
        }
    }
}
