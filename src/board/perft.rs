//! perft, or Performance Test, Move Path Enumeration: counts the leaf
//! nodes of the legal-move tree to a certain depth, testing the
//! correctness of move generation.
//!
//! The walker supports bulk counting (at depth 2, child move lists are
//! counted instead of walked), capture-only trees, and an optional
//! [`TranspositionTable`] memoizing subtree counts by position key. The
//! cache is bypassed at depth ≤ 2, where recursion is cheaper than the
//! memory traffic.
//!
//! [`TranspositionTable`]: ../../tools/tt/struct.TranspositionTable.html

use super::movegen::MoveGen;
use super::Board;
use crate::tools::tt::TranspositionTable;
use crate::tools::PreFetchable;

/// Returns the number of leaf nodes from generating moves to a certain
/// depth.
pub fn perft(board: &mut Board, depth: u16) -> u64 {
    perft_with(board, None, depth, false, true)
}

/// Returns the number of leaf nodes to a certain depth, with all options
/// exposed: an optional subtree-count cache, bulk counting at depth 2, and
/// quiet-move suppression (captures, promotions and check evasions only).
pub fn perft_with(
    board: &mut Board,
    mut cache: Option<&mut TranspositionTable>,
    depth: u16,
    bulk: bool,
    quiets: bool,
) -> u64 {
    if depth == 0 {
        return 1;
    }

    // in check, every legal move is an evasion regardless of quietness
    let moves = MoveGen::generate(board, quiets || board.in_check());

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut count: u64 = 0;

    for &mv in moves.iter() {
        if bulk && depth == 2 {
            board.apply_move(mv);
            count += MoveGen::count(board, quiets || board.in_check());
            board.undo_move();
            continue;
        }

        if depth > 2 {
            if let Some(tt) = cache.as_deref_mut() {
                // the child key is known before the move is made, so the
                // bucket can be pulled into cache during make
                let key = board.next_key(mv);
                tt.prefetch(key);
                board.apply_move(mv);
                let mut sub = tt.probe(key, (depth - 1) as u8);
                if sub == 0 {
                    sub = perft_with(board, Some(&mut *tt), depth - 1, bulk, quiets);
                    tt.store(key, (depth - 1) as u8, sub);
                }
                count += sub;
                board.undo_move();
                continue;
            }
        }

        board.apply_move(mv);
        count += perft_with(board, cache.as_deref_mut(), depth - 1, bulk, quiets);
        board.undo_move();
    }

    count
}
