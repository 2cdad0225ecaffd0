//! Move legality and legal-move enumeration.
//!
//! `is_legal` combines ownership and capture rules, the per-kind shape test,
//! and a self-check look-ahead: the candidate move is applied to a cloned
//! board and rejected if it leaves the mover's own king attacked. This
//! "copy-make-and-check" approach is simple and correct; the board is a flat
//! 64-cell array precisely so these clones stay cheap.
//!
//! `legal_moves` scans all 64×64 (from, to) pairs. 4096 legality checks per
//! call is a deliberately unoptimized baseline and not a bottleneck at this
//! scale.

use crate::engine::attacks;
use crate::engine::board::Board;
use crate::engine::types::{Color, Move, PieceKind, Square};

// =========================================================================
// Public API
// =========================================================================

/// Is moving the piece on `from` to `to` legal for `side_to_move`?
pub fn is_legal(board: &Board, from: Square, to: Square, side_to_move: Color) -> bool {
    if from == to {
        return false;
    }
    let piece = match board.get(from) {
        Some(p) => p,
        None => return false,
    };
    if piece.color != side_to_move {
        return false;
    }
    // Capturing one's own piece is never legal.
    if board.get(to).is_some_and(|t| t.color == piece.color) {
        return false;
    }

    // Shape test. Pawns have a move rule distinct from their attack rule;
    // every other kind moves exactly where it threatens.
    let shape_ok = match piece.kind {
        PieceKind::Pawn => pawn_move_ok(board, piece.color, from, to),
        _ => attacks::threatens(board, from, to),
    };
    if !shape_ok {
        return false;
    }

    // Self-check look-ahead: apply the move speculatively and reject if the
    // mover's own king is then attacked. This also forbids king capture —
    // the opposing king is always defended by this rule.
    let mut lookahead = board.clone();
    lookahead.move_piece(from, to);
    !lookahead.is_in_check(side_to_move)
}

/// All legal moves for `color`: exhaustive scan over every (from, to) pair.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Square::all() {
        if !board.get(from).is_some_and(|p| p.color == color) {
            continue;
        }
        for to in Square::all() {
            if is_legal(board, from, to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Legal moves originating from one square, for UI move hints.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    match board.get(from) {
        Some(piece) => Square::all()
            .filter(|&to| is_legal(board, from, to, piece.color))
            .map(|to| Move::new(from, to))
            .collect(),
        None => Vec::new(),
    }
}

/// Checkmate: in check with zero legal moves.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    board.is_in_check(color) && legal_moves(board, color).is_empty()
}

// =========================================================================
// Pawn move rule
// =========================================================================

/// Pawn moves: forward one onto an empty square; forward two from the start
/// row with both squares empty; or a one-step diagonal capture. No en
/// passant, no promotion.
fn pawn_move_ok(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    let forward = color.forward();

    if dc == 0 {
        // Pushes require empty destination; pawns never capture forward.
        if dr == forward {
            return board.is_empty_at(to);
        }
        if dr == 2 * forward && from.row() == color.pawn_start_row() {
            let midway = from
                .offset(forward, 0)
                .expect("one step forward from the start row is on the board");
            return board.is_empty_at(midway) && board.is_empty_at(to);
        }
        false
    } else if dc.abs() == 1 && dr == forward {
        // Diagonal step is a capture only.
        board.get(to).is_some_and(|t| t.color != color)
    } else {
        false
    }
}

// =========================================================================
// Tests
// =========================================================================
