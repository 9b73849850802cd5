//! One-move lookahead helpers
//!
//! Each finder tries every candidate move for a player, inspects the
//! resulting position and takes the stone back again.

use crate::board::{Board, Move, Player};
use crate::evaluation::{evaluate_board, evaluate_position, Category};

/// Returns every candidate move that completes five for `player`
pub fn winning_moves(board: &mut Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for mv in board.candidate_moves() {
        let next = board.place_scoped(mv, player);
        if next.has_five_in_a_row(player) {
            moves.push(mv);
        }
    }
    moves
}

/// Returns the candidate moves whose placed stone scores at least `category`
///
/// Only the placed stone is scored, not the whole board.
pub fn moves_reaching_threshold(board: &mut Board, player: Player, category: Category) -> Vec<Move> {
    let threshold = category.score();
    let mut moves = Vec::new();
    for mv in board.candidate_moves() {
        let next = board.place_scoped(mv, player);
        if evaluate_position(&next, mv, player) >= threshold {
            moves.push(mv);
        }
    }
    moves
}

/// Returns the candidate move giving `player` the best board evaluation,
/// provided that evaluation reaches `threshold`
///
/// Ties keep the earliest move.
pub fn best_move_at_or_above(board: &mut Board, player: Player, threshold: i32) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in board.candidate_moves() {
        let score = evaluate_board(&board.place_scoped(mv, player), player);
        if score < threshold {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    best.map(|(mv, _)| mv)
}
