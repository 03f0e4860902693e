//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth. Candidates are
//! pseudo-legal, so the counts match the published legal counts only while
//! no king can be captured, which holds from the starting position up to
//! depth 3.

use crate::notation::format_move;
use crate::Position;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.candidate_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in moves {
        let mut next = position.clone();
        next.make_move(m);
        nodes += perft(&next, depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let moves = position.candidate_moves();
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        let mut next = position.clone();
        next.make_move(m);
        let nodes = if depth > 1 {
            perft(&next, depth - 1)
        } else {
            1
        };
        results.push((format_move(m), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
