//! Contains various FEN (Forsyth–Edwards Notation) constants, the parse
//! error type, and the built-in perft reference suite.
//!
//! A FEN string is a way of describing a particular state of a chess game,
//! and is the sole way of seeding a non-initial position. For example, the
//! start position fen is
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`.
//!
//! Parsing itself lives in [`Board::from_fen`].
//!
//! [`Board::from_fen`]: ../struct.Board.html#method.from_fen

use lazy_static::lazy_static;
use thiserror::Error;

/// The fen string for the start position.
pub const OPENING_POS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Represents possible errors encountered while building a `Board` from a
/// fen string.
///
/// Most variants carry the byte offset of the offending character inside
/// the input, so callers can point at it in a diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenBuildError {
    #[error("too many ranks")]
    TooManyRanks { offset: usize },
    #[error("missing squares in rank description")]
    MissingSquares { offset: usize },
    #[error("file overflow in rank description")]
    FileOverflow { offset: usize },
    #[error("unrecognized piece '{piece}'")]
    UnrecognizedPiece { piece: char, offset: usize },
    #[error("invalid side to move, expected 'w' or 'b'")]
    UnrecognizedTurn { offset: usize },
    #[error("unreadable en-passant square")]
    EpSquareUnreadable { offset: usize },
    #[error("missing field")]
    MissingField { offset: usize },
    #[error("each side needs exactly one king")]
    MissingKing,
}

impl FenBuildError {
    /// The byte offset of the offending character, if the error points at
    /// one.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            FenBuildError::TooManyRanks { offset }
            | FenBuildError::MissingSquares { offset }
            | FenBuildError::FileOverflow { offset }
            | FenBuildError::UnrecognizedPiece { offset, .. }
            | FenBuildError::UnrecognizedTurn { offset }
            | FenBuildError::EpSquareUnreadable { offset }
            | FenBuildError::MissingField { offset } => Some(offset),
            FenBuildError::MissingKing => None,
        }
    }
}

/// One entry of the built-in correctness suite: a position, a depth, and
/// the exact number of leaves the move tree has at that depth.
pub struct PerftPosition {
    pub description: &'static str,
    pub fen: &'static str,
    pub depth: u16,
    pub leaves: u64,
}

#[doc(hidden)]
pub static SUITE_STANDARD: [PerftPosition; 6] = [
    PerftPosition {
        description: "initial position",
        fen: OPENING_POS_FEN,
        depth: 6,
        leaves: 119_060_324,
    },
    PerftPosition {
        description: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        depth: 5,
        leaves: 193_690_690,
    },
    PerftPosition {
        description: "rook endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        depth: 7,
        leaves: 178_633_661,
    },
    PerftPosition {
        description: "mirrored tactics",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depth: 6,
        leaves: 706_045_033,
    },
    PerftPosition {
        description: "bishop check dance",
        fen: "rnbqkb1r/pp1p1ppp/2p5/4P3/2B5/8/PPP1NnPP/RNBQK2R w KQkq - 0 6",
        depth: 3,
        leaves: 53_392,
    },
    PerftPosition {
        description: "symmetric middlegame",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depth: 6,
        leaves: 6_923_051_137,
    },
];

#[doc(hidden)]
pub static SUITE_SPECIAL_MOVES: [PerftPosition; 13] = [
    PerftPosition {
        description: "en-passant discovered check",
        fen: "8/5bk1/8/2Pp4/8/1K6/8/8 w - d6 0 1",
        depth: 6,
        leaves: 824_064,
    },
    PerftPosition {
        description: "en-passant capture gives check",
        fen: "8/8/1k6/2b5/2pP4/8/5K2/8 b - d3 0 1",
        depth: 6,
        leaves: 1_440_467,
    },
    PerftPosition {
        description: "short castling gives check",
        fen: "5k2/8/8/8/8/8/8/4K2R w K - 0 1",
        depth: 6,
        leaves: 661_072,
    },
    PerftPosition {
        description: "long castling gives check",
        fen: "3k4/8/8/8/8/8/8/R3K3 w Q - 0 1",
        depth: 6,
        leaves: 803_711,
    },
    PerftPosition {
        description: "castling",
        fen: "r3k2r/1b4bq/8/8/8/8/7B/R3K2R w KQkq - 0 1",
        depth: 4,
        leaves: 1_274_206,
    },
    PerftPosition {
        description: "castling prevented",
        fen: "r3k2r/8/3Q4/8/8/5q2/8/R3K2R b KQkq - 0 1",
        depth: 4,
        leaves: 1_720_476,
    },
    PerftPosition {
        description: "promote out of check",
        fen: "2K2r2/4P3/8/8/8/8/8/3k4 w - - 0 1",
        depth: 6,
        leaves: 3_821_001,
    },
    PerftPosition {
        description: "discovered check",
        fen: "8/8/1P2K3/8/2n5/1q6/8/5k2 b - - 0 1",
        depth: 5,
        leaves: 1_004_658,
    },
    PerftPosition {
        description: "promotion gives check",
        fen: "4k3/1P6/8/8/8/8/K7/8 w - - 0 1",
        depth: 6,
        leaves: 217_342,
    },
    PerftPosition {
        description: "underpromotion gives check",
        fen: "8/P1k5/K7/8/8/8/8/8 w - - 0 1",
        depth: 6,
        leaves: 92_683,
    },
    PerftPosition {
        description: "self stalemate",
        fen: "K1k5/8/P7/8/8/8/8/8 w - - 0 1",
        depth: 6,
        leaves: 2_217,
    },
    PerftPosition {
        description: "stalemate & checkmate",
        fen: "8/k1P5/8/1K6/8/8/8/8 w - - 0 1",
        depth: 7,
        leaves: 567_584,
    },
    PerftPosition {
        description: "double check",
        fen: "8/8/2k5/5q2/5n2/8/5K2/8 b - - 0 1",
        depth: 4,
        leaves: 23_527,
    },
];

lazy_static! {
    /// The full built-in correctness suite, in the order it is run by
    /// `--test`.
    pub static ref PERFT_SUITE: Vec<&'static PerftPosition> = {
        let mut vec = Vec::new();
        for pos in &SUITE_STANDARD { vec.push(pos); }
        for pos in &SUITE_SPECIAL_MOVES { vec.push(pos); }
        vec
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_is_complete() {
        assert_eq!(PERFT_SUITE.len(), 19);
        assert_eq!(PERFT_SUITE[0].fen, OPENING_POS_FEN);
    }
}
