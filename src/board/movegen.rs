//! The legal move generator.
//!
//! Generation happens in a single pass per position: pinned pieces are
//! enumerated separately along their pin rays, check evasions restrict the
//! target squares to the checker and the interposition line, and king moves
//! are validated with the king removed from the occupancy so sliders attack
//! through it. All output is legal; no retro-legality filtering happens
//! afterwards.
//!
//! The generator is generic over a [`MovePush`] sink, so collecting moves
//! into a [`MoveList`] and merely counting them share every legality
//! decision and always agree.
//!
//! [`MovePush`]: ../../core/move_list/trait.MovePush.html
//! [`MoveList`]: ../../core/move_list/struct.MoveList.html

use super::castle_rights::Castling;
use super::Board;
use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::move_list::{MoveList, MovePush};
use crate::core::piece_move::BitMove;
use crate::core::sq::{NO_SQ, SQ};
use crate::core::{Piece, PieceType, Player};
use crate::helper::prelude::*;

/// A sink that only counts the moves the generator would emit. Promotions
/// count as four distinct moves.
pub struct MoveCounter {
    pub count: u64,
}

impl MovePush for MoveCounter {
    #[inline(always)]
    fn push_mv(&mut self, _mv: BitMove) {
        self.count += 1;
    }

    #[inline(always)]
    fn push_moves(&mut self, _from: SQ, attacks: BitBoard) {
        self.count += u64::from(attacks.count_bits());
    }

    #[inline(always)]
    fn push_pawn_moves(&mut self, attacks: BitBoard, _dir: i8) {
        self.count += u64::from(attacks.count_bits());
    }

    #[inline(always)]
    fn push_promotion(&mut self, _from: SQ, _to: SQ) {
        self.count += 4;
    }

    #[inline(always)]
    fn push_pawn_promotions(&mut self, attacks: BitBoard, _dir: i8) {
        self.count += 4 * u64::from(attacks.count_bits());
    }
}

/// Public interface for generating moves from a `Board`.
pub struct MoveGen {}

impl MoveGen {
    /// Generates the legal moves of the position. With `quiets` false, only
    /// captures and promotions are emitted — unless the side to move is in
    /// check, in which case every emitted move is an evasion and quietness
    /// does not apply.
    pub fn generate(board: &Board, quiets: bool) -> MoveList {
        let mut moves = MoveList::default();
        MoveGen::generate_into(board, quiets, &mut moves);
        moves
    }

    /// Counts the moves [`generate`] would emit, without materializing
    /// them.
    ///
    /// [`generate`]: #method.generate
    pub fn count(board: &Board, quiets: bool) -> u64 {
        let mut counter = MoveCounter { count: 0 };
        MoveGen::generate_into(board, quiets, &mut counter);
        counter.count
    }

    fn generate_into<S: MovePush>(board: &Board, quiets: bool, sink: &mut S) {
        let us = board.turn();
        let them = !us;
        let occupied = board.occupied();
        let bq = board.piece_bb(PieceType::B) | board.piece_bb(PieceType::Q);
        let rq = board.piece_bb(PieceType::R) | board.piece_bb(PieceType::Q);
        let pinned = board.pinned();
        let unpinned = board.occupied_player(us) & !pinned;
        let checkers = board.checkers();
        let ksq = board.king_sq(us);
        let push = us.pawn_push();
        let pawn_left = push - 1;
        let pawn_right = push + 1;
        let promo_rank = BitBoard(us.promotion_rank());

        let mut empty = !occupied;
        let mut enemy = board.occupied_player(them);
        let mut checker_sq = NO_SQ;

        if checkers.is_not_empty() {
            // in check: non-king moves must capture the single checker or
            // interpose on the line between it and the king
            if !checkers.more_than_one() {
                checker_sq = checkers.to_sq();
                empty = between_bb(ksq, checker_sq);
                enemy = checkers;
            } else {
                empty = BitBoard::EMPTY;
                enemy = BitBoard::EMPTY;
            }
        } else {
            // not in check: castling & pinned-piece moves. Pinned pieces
            // cannot move at all while in check, since any interposition or
            // capture of theirs would uncover the king.
            let target = if quiets { enemy | empty } else { enemy };

            if quiets {
                if board.castling().contains(Castling::king_side(us))
                    && (occupied & between_bb(ksq, ksq.offset(3))).is_empty()
                    && !board.is_square_attacked(ksq.offset(1), them, occupied)
                    && !board.is_square_attacked(ksq.offset(2), them, occupied)
                {
                    sink.push_mv(BitMove::make(ksq, ksq.offset(2)));
                }
                if board.castling().contains(Castling::queen_side(us))
                    && (occupied & between_bb(ksq, ksq.offset(-4))).is_empty()
                    && !board.is_square_attacked(ksq.offset(-1), them, occupied)
                    && !board.is_square_attacked(ksq.offset(-2), them, occupied)
                {
                    sink.push_mv(BitMove::make(ksq, ksq.offset(-2)));
                }
            }

            // pawns, along their pin ray only
            let mut piece = board.piece_bb(PieceType::P) & pinned;
            while let Some(from) = piece.pop_some_lsb() {
                let d = ray_direction(ksq, from);
                if d == pawn_left.unsigned_abs() {
                    let to = from.offset(pawn_left);
                    if (BitBoard(to.to_bb()) & pawn_attacks_from(from, us) & enemy).is_not_empty()
                    {
                        if us.on_seventh_rank(from) {
                            sink.push_promotion(from, to);
                        } else {
                            sink.push_mv(BitMove::make(from, to));
                        }
                    }
                } else if d == pawn_right.unsigned_abs() {
                    let to = from.offset(pawn_right);
                    if (BitBoard(to.to_bb()) & pawn_attacks_from(from, us) & enemy).is_not_empty()
                    {
                        if us.on_seventh_rank(from) {
                            sink.push_promotion(from, to);
                        } else {
                            sink.push_mv(BitMove::make(from, to));
                        }
                    }
                }
                if quiets && d == 8 {
                    let to = from.offset(push);
                    if (BitBoard(to.to_bb()) & empty).is_not_empty() {
                        sink.push_mv(BitMove::make(from, to));
                        if us.on_second_rank(from) {
                            let to = to.offset(push);
                            if (BitBoard(to.to_bb()) & empty).is_not_empty() {
                                sink.push_mv(BitMove::make(from, to));
                            }
                        }
                    }
                }
            }

            // bishops and queens, along their pin diagonal only
            let mut piece = bq & pinned;
            while let Some(from) = piece.pop_some_lsb() {
                let attack = match ray_direction(ksq, from) {
                    9 => bishop_moves(occupied, from) & target & diagonal_bb(from),
                    7 => bishop_moves(occupied, from) & target & antidiagonal_bb(from),
                    _ => BitBoard::EMPTY,
                };
                sink.push_moves(from, attack);
            }

            // rooks and queens, along their pin line only
            let mut piece = rq & pinned;
            while let Some(from) = piece.pop_some_lsb() {
                let attack = match ray_direction(ksq, from) {
                    1 => rook_moves(occupied, from) & target & rank_line_bb(from),
                    8 => rook_moves(occupied, from) & target & file_line_bb(from),
                    _ => BitBoard::EMPTY,
                };
                sink.push_moves(from, attack);
            }
        }

        // common moves

        let target = if quiets { enemy | empty } else { enemy };

        // en-passant capture. Allowed in check only when the checker is
        // exactly the pawn that just double-pushed. Either capturing pawn
        // must not expose its own king to a slider once the three involved
        // pawn bits are lifted off the board.
        if board.state().has_ep()
            && (checkers.is_empty() || checker_sq == board.ep_square().offset(-push))
        {
            let to = board.ep_square();
            let cap = to.offset(-push);
            let enemy_occ = board.occupied_player(them);

            let from = cap.offset(-1);
            if to.file_idx() > 0 && board.piece_at_sq(from) == Piece::make(us, PieceType::P) {
                let occ_after = occupied ^ from.to_bb() ^ cap.to_bb() ^ to.to_bb();
                if (bishop_moves(occ_after, ksq) & bq & enemy_occ).is_empty()
                    && (rook_moves(occ_after, ksq) & rq & enemy_occ).is_empty()
                {
                    sink.push_mv(BitMove::make(from, to));
                }
            }

            let from = cap.offset(1);
            if to.file_idx() < 7 && board.piece_at_sq(from) == Piece::make(us, PieceType::P) {
                let occ_after = occupied ^ from.to_bb() ^ cap.to_bb() ^ to.to_bb();
                if (bishop_moves(occ_after, ksq) & bq & enemy_occ).is_empty()
                    && (rook_moves(occ_after, ksq) & rq & enemy_occ).is_empty()
                {
                    sink.push_mv(BitMove::make(from, to));
                }
            }
        }

        // pawns
        let piece = board.piece_bb(PieceType::P) & unpinned;

        let mut attack = if us == Player::Black {
            (piece & !FILE_A) >> 9usize
        } else {
            (piece & !FILE_A) << 7usize
        };
        attack &= enemy;
        sink.push_pawn_promotions(attack & promo_rank, pawn_left);
        sink.push_pawn_moves(attack & !promo_rank, pawn_left);

        let mut attack = if us == Player::Black {
            (piece & !FILE_H) >> 7usize
        } else {
            (piece & !FILE_H) << 9usize
        };
        attack &= enemy;
        sink.push_pawn_promotions(attack & promo_rank, pawn_right);
        sink.push_pawn_moves(attack & !promo_rank, pawn_right);

        let mut attack = if us == Player::Black {
            piece >> 8usize
        } else {
            piece << 8usize
        };
        attack &= empty;
        sink.push_pawn_promotions(attack & promo_rank, push);
        if quiets {
            sink.push_pawn_moves(attack & !promo_rank, push);
            let starters = piece & DOUBLE_PUSH_RANK[us as usize];
            let mut dbl = if us == Player::Black {
                ((starters >> 8usize) & !occupied) >> 8usize
            } else {
                ((starters << 8usize) & !occupied) << 8usize
            };
            dbl &= empty;
            sink.push_pawn_moves(dbl, 2 * push);
        }

        // knights
        let mut piece = board.piece_bb(PieceType::N) & unpinned;
        while let Some(from) = piece.pop_some_lsb() {
            sink.push_moves(from, knight_moves(from) & target);
        }

        // bishops and queens
        let mut piece = bq & unpinned;
        while let Some(from) = piece.pop_some_lsb() {
            sink.push_moves(from, bishop_moves(occupied, from) & target);
        }

        // rooks and queens
        let mut piece = rq & unpinned;
        while let Some(from) = piece.pop_some_lsb() {
            sink.push_moves(from, rook_moves(occupied, from) & target);
        }

        // king. Legality is checked with the king lifted off the board, so
        // sliders keep attacking through its current square.
        let king_target = if quiets {
            board.occupied_player(them) | !occupied
        } else {
            board.occupied_player(them)
        };
        let occ_no_king = occupied ^ ksq.to_bb();
        let mut attack = king_moves(ksq) & king_target;
        while let Some(to) = attack.pop_some_lsb() {
            if !board.is_square_attacked(to, them, occ_no_king) {
                sink.push_mv(BitMove::make(ksq, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::OPENING_POS_FEN;

    fn count_both_ways(fen: &str, quiets: bool) -> (usize, u64) {
        let board = Board::from_fen(fen).unwrap();
        (
            MoveGen::generate(&board, quiets).len(),
            MoveGen::count(&board, quiets),
        )
    }

    #[test]
    fn start_pos_has_twenty_moves() {
        let (generated, counted) = count_both_ways(OPENING_POS_FEN, true);
        assert_eq!(generated, 20);
        assert_eq!(counted, 20);
    }

    #[test]
    fn kiwipete_has_forty_eight_moves() {
        let (generated, counted) =
            count_both_ways("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -", true);
        assert_eq!(generated, 48);
        assert_eq!(counted, 48);
    }

    #[test]
    fn counting_matches_generation() {
        let fens = [
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "8/5bk1/8/2Pp4/8/1K6/8/8 w - d6 0 1",
            "8/8/1k6/2b5/2pP4/8/5K2/8 b - d3 0 1",
            "8/8/2k5/5q2/5n2/8/5K2/8 b - - 0 1",
        ];
        for fen in fens {
            for quiets in [true, false] {
                let (generated, counted) = count_both_ways(fen, quiets);
                assert_eq!(generated as u64, counted, "mismatch on {}", fen);
            }
        }
    }

    #[test]
    fn double_check_only_king_moves() {
        let board = Board::from_fen("8/8/2k5/5q2/5n2/8/5K2/8 b - - 0 1").unwrap();
        assert!(!board.in_check());
        let mut board = Board::from_fen("4k3/8/8/8/8/5n2/4q3/4K3 w - - 0 1").unwrap();
        assert!(board.in_check());
        assert!(board.checkers().more_than_one());
        let moves = board.generate_moves();
        for &mv in moves.iter() {
            assert_eq!(mv.get_src(), board.king_sq(Player::White));
            board.apply_move(mv);
            board.undo_move();
        }
    }

    #[test]
    fn stalemate_has_no_moves() {
        // black to move, completely stuck
        let board = Board::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!board.in_check());
        assert!(board.generate_moves().is_empty());
        assert_eq!(MoveGen::count(&board, true), 0);
    }

    #[test]
    fn promotions_count_four_each() {
        // one pawn ready to promote, no captures available
        let board = Board::from_fen("8/P7/8/8/8/k7/8/K7 w - - 0 1").unwrap();
        let moves = MoveGen::generate(&board, false);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.promo_piece().is_some()));
    }

    #[test]
    fn ep_exposing_king_is_rejected() {
        // capturing en passant would uncover the rook's check on the king
        let board = Board::from_fen("8/8/8/K1pP3r/8/8/8/4k3 w - c6 0 1").unwrap();
        let moves = board.generate_moves();
        assert!(moves
            .iter()
            .all(|m| !(m.get_dest().to_string() == "c6"
                && board.piece_at_sq(m.get_src()).type_of() == PieceType::P)));
    }

    #[test]
    fn castling_through_check_is_rejected() {
        // black queen covers f1, so white cannot castle king-side
        let board = Board::from_fen("r3k2r/8/8/8/8/5q2/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = board.generate_moves();
        let castles: Vec<String> = moves
            .iter()
            .filter(|m| {
                m.get_src() == SQ::E1 && (m.get_dest() == SQ(6) || m.get_dest() == SQ(2))
            })
            .map(|m| m.to_string())
            .collect();
        assert!(!castles.contains(&"e1g1".to_string()));
    }
}
