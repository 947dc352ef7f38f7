//! Exercises make/unmake over real game trees, checking that every board
//! invariant holds after every mutation and that undoing a move restores
//! the position bit-for-bit.

use magpie::board::castle_rights::Castling;
use magpie::{BitBoard, Board, Piece, PieceType, Player};

const TEST_FENS: [&str; 6] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    "8/5bk1/8/2Pp4/8/1K6/8/8 w - d6 0 1",
    "8/8/1k6/2b5/2pP4/8/5K2/8 b - d3 0 1",
    "2K2r2/4P3/8/8/8/8/8/3k4 w - - 0 1",
];

/// Checks every structural invariant of the board representation.
fn assert_invariants(board: &Board, context: &str) {
    let occupied = board.occupied();

    // the grid and the color bitboards agree square by square
    for sq in 0..64u8 {
        let sq = magpie::SQ(sq);
        let piece = board.piece_at_sq(sq);
        let occupied_here = (occupied & sq.to_bb()).is_not_empty();
        assert_eq!(piece != Piece::None, occupied_here, "grid mismatch {}", context);
        if piece != Piece::None {
            let bb = BitBoard(sq.to_bb());
            assert!(
                (board.piece_bb(piece.type_of()) & bb).is_not_empty(),
                "piece bitboard mismatch {}",
                context
            );
            assert!(
                (board.occupied_player(piece.player_lossy()) & bb).is_not_empty(),
                "color bitboard mismatch {}",
                context
            );
        }
    }

    // piece bitboards are pairwise disjoint and their union is the occupancy
    let mut union = BitBoard::EMPTY;
    let types = [
        PieceType::P,
        PieceType::N,
        PieceType::B,
        PieceType::R,
        PieceType::Q,
        PieceType::K,
    ];
    for (i, &a) in types.iter().enumerate() {
        for &b in &types[i + 1..] {
            assert!(
                (board.piece_bb(a) & board.piece_bb(b)).is_empty(),
                "piece bitboards overlap {}",
                context
            );
        }
        union |= board.piece_bb(a);
    }
    assert_eq!(union, occupied, "piece union mismatch {}", context);
    assert!(
        (board.occupied_player(Player::White) & board.occupied_player(Player::Black)).is_empty(),
        "color overlap {}",
        context
    );

    // the king squares point at the king bits
    for player in [Player::White, Player::Black] {
        let kings = board.piece_bb(PieceType::K) & board.occupied_player(player);
        assert!(!kings.more_than_one(), "two kings {}", context);
        assert_eq!(kings.to_sq(), board.king_sq(player), "king square {}", context);
    }

    // the incrementally maintained key matches a from-scratch recompute
    assert_eq!(board.key(), board.compute_key(), "key drift {}", context);

    // castling rights require king and rook on their home squares
    let castling = board.castling();
    if castling.contains(Castling::WHITE_K) {
        assert_eq!(board.piece_at_sq(magpie::SQ::E1), Piece::WhiteKing);
        assert_eq!(board.piece_at_sq(magpie::SQ::H1), Piece::WhiteRook);
    }
    if castling.contains(Castling::WHITE_Q) {
        assert_eq!(board.piece_at_sq(magpie::SQ::E1), Piece::WhiteKing);
        assert_eq!(board.piece_at_sq(magpie::SQ::A1), Piece::WhiteRook);
    }
    if castling.contains(Castling::BLACK_K) {
        assert_eq!(board.piece_at_sq(magpie::SQ::E8), Piece::BlackKing);
        assert_eq!(board.piece_at_sq(magpie::SQ::H8), Piece::BlackRook);
    }
    if castling.contains(Castling::BLACK_Q) {
        assert_eq!(board.piece_at_sq(magpie::SQ::E8), Piece::BlackKing);
        assert_eq!(board.piece_at_sq(magpie::SQ::A8), Piece::BlackRook);
    }
}

/// Walks the move tree, asserting invariants at every node and exact
/// restoration after every undo.
fn walk(board: &mut Board, depth: u16, fen: &str) {
    if depth == 0 {
        return;
    }
    let moves = board.generate_moves();
    for &mv in moves.iter() {
        let snapshot = board.clone();
        board.apply_move(mv);
        assert_invariants(board, fen);
        walk(board, depth - 1, fen);
        board.undo_move();
        assert!(
            *board == snapshot,
            "undo did not restore the position after {} in {}",
            mv,
            fen
        );
    }
}

#[test]
fn make_unmake_round_trips() {
    for fen in TEST_FENS {
        let mut board = Board::from_fen(fen).unwrap();
        assert_invariants(&board, fen);
        walk(&mut board, 3, fen);
    }
}

#[test]
fn double_push_ep_needs_adjacent_enemy_pawn() {
    // e2e4 with a black pawn on d4: the played move records an ep square
    let mut board = Board::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
    let mv = board
        .generate_moves()
        .iter()
        .copied()
        .find(|m| m.to_string() == "e2e4")
        .unwrap();
    board.apply_move(mv);
    assert_eq!(board.ep_square().to_string(), "e3");
    board.undo_move();

    // the same double push with no enemy pawn nearby records none
    let mut board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    let mv = board
        .generate_moves()
        .iter()
        .copied()
        .find(|m| m.to_string() == "e2e4")
        .unwrap();
    board.apply_move(mv);
    assert!(!board.state().has_ep());
}

#[test]
fn castling_relocates_the_rook() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = board
        .generate_moves()
        .iter()
        .copied()
        .find(|m| m.to_string() == "e1g1")
        .unwrap();
    board.apply_move(mv);
    assert_eq!(board.piece_at_sq(magpie::SQ(6)).to_string(), "K");
    assert_eq!(board.piece_at_sq(magpie::SQ(5)).to_string(), "R");
    assert_eq!(board.piece_at_sq(magpie::SQ::H1), Piece::None);
    assert!(!board.castling().contains(Castling::WHITE_K));
    assert!(!board.castling().contains(Castling::WHITE_Q));
    board.undo_move();
    assert_eq!(board.piece_at_sq(magpie::SQ::H1), Piece::WhiteRook);
    assert_eq!(board.piece_at_sq(magpie::SQ::E1), Piece::WhiteKing);
}

#[test]
fn en_passant_capture_removes_the_pawn() {
    let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mv = board
        .generate_moves()
        .iter()
        .copied()
        .find(|m| m.to_string() == "e5d6")
        .unwrap();
    let before = board.clone();
    board.apply_move(mv);
    // the black pawn on d5 is gone
    assert_eq!(board.piece_at_sq(magpie::SQ(35)), Piece::None);
    assert_eq!(board.occupied().count_bits(), 3);
    board.undo_move();
    assert!(board == before);
}
