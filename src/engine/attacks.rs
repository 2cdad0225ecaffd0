//! Geometric attack model.
//!
//! Pure predicates answering "does the piece on `from` threaten `to`?" on a
//! board snapshot, ignoring whose turn it is and ignoring check. Used both by
//! move legality (shape tests for non-pawns) and by check detection.
//!
//! Pawns are the one asymmetric case: the *attack* squares (the two forward
//! diagonals) differ from the *move* squares (forward pushes). The pawn move
//! rule lives in `movegen`; unifying the two would make a pawn "threaten" the
//! square straight ahead of it and break check detection.

use crate::engine::board::Board;
use crate::engine::types::{Color, PieceKind, Square};

// =========================================================================
// Public API
// =========================================================================

/// Does the piece on `from` geometrically threaten `to`?
/// False when `from` is empty or `from == to`.
pub fn threatens(board: &Board, from: Square, to: Square) -> bool {
    let piece = match board.get(from) {
        Some(p) => p,
        None => return false,
    };
    match piece.kind {
        PieceKind::Pawn => pawn_threatens(piece.color, from, to),
        PieceKind::Knight => knight_threatens(from, to),
        PieceKind::Bishop => bishop_threatens(board, from, to),
        PieceKind::Rook => rook_threatens(board, from, to),
        PieceKind::Queen => {
            bishop_threatens(board, from, to) || rook_threatens(board, from, to)
        }
        PieceKind::King => king_threatens(from, to),
    }
}

/// Is `sq` threatened by any piece of color `by`?
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    Square::all().any(|from| {
        board.get(from).is_some_and(|p| p.color == by) && threatens(board, from, sq)
    })
}

/// Walk the squares strictly between `from` and `to` along a straight or
/// diagonal line; true if any is occupied. The destination itself is never
/// checked — capture on the endpoint is allowed.
pub fn is_path_blocked(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).signum();
    let dc = (to.col() as i8 - from.col() as i8).signum();
    debug_assert!(
        dr != 0 || dc != 0,
        "is_path_blocked requires distinct squares"
    );

    let mut current = from;
    loop {
        current = match current.offset(dr, dc) {
            Some(sq) => sq,
            None => return false, // walked off the board before reaching `to`
        };
        if current == to {
            return false;
        }
        if board.get(current).is_some() {
            return true;
        }
    }
}

// =========================================================================
// Per-kind threat shapes
// =========================================================================

/// Pawns threaten only the two diagonally-forward squares — one step, never
/// straight ahead.
fn pawn_threatens(color: Color, from: Square, to: Square) -> bool {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    dr == color.forward() && dc.abs() == 1
}

fn knight_threatens(from: Square, to: Square) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).abs();
    let dc = (to.col() as i8 - from.col() as i8).abs();
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

/// King threatens the 8 adjacent squares (Chebyshev distance 1).
fn king_threatens(from: Square, to: Square) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).abs();
    let dc = (to.col() as i8 - from.col() as i8).abs();
    dr.max(dc) == 1
}

fn bishop_threatens(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).abs();
    let dc = (to.col() as i8 - from.col() as i8).abs();
    dr == dc && dr != 0 && !is_path_blocked(board, from, to)
}

fn rook_threatens(board: &Board, from: Square, to: Square) -> bool {
    let same_row = from.row() == to.row();
    let same_col = from.col() == to.col();
    // Exactly one axis shared; same_row && same_col would be from == to.
    same_row != same_col && !is_path_blocked(board, from, to)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Piece;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    /// Board with a single piece placed on `at`.
    fn lone(at: &str, color: Color, kind: PieceKind) -> Board {
        let mut board = Board::empty();
        board.set(sq(at), Some(Piece::new(color, kind)));
        board
    }

    /// Collect every square the piece on `from` threatens.
    fn threat_set(board: &Board, from: Square) -> Vec<Square> {
        Square::all().filter(|&to| threatens(board, from, to)).collect()
    }

    // -------------------------------------------------------------------
    // Pawn
    // -------------------------------------------------------------------

    #[test]
    fn white_pawn_threatens_forward_diagonals_only() {
        let board = lone("e4", Color::White, PieceKind::Pawn);
        let threats = threat_set(&board, sq("e4"));
        assert_eq!(threats.len(), 2);
        assert!(threats.contains(&sq("d5")));
        assert!(threats.contains(&sq("f5")));
    }

    #[test]
    fn black_pawn_threatens_toward_white() {
        let board = lone("e5", Color::Black, PieceKind::Pawn);
        let threats = threat_set(&board, sq("e5"));
        assert_eq!(threats.len(), 2);
        assert!(threats.contains(&sq("d4")));
        assert!(threats.contains(&sq("f4")));
    }

    #[test]
    fn pawn_never_threatens_straight_ahead() {
        let board = lone("e4", Color::White, PieceKind::Pawn);
        assert!(!threatens(&board, sq("e4"), sq("e5")));
        assert!(!threatens(&board, sq("e4"), sq("e6")));
    }

    #[test]
    fn pawn_on_edge_file_threatens_one_square() {
        let board = lone("a4", Color::White, PieceKind::Pawn);
        let threats = threat_set(&board, sq("a4"));
        assert_eq!(threats, vec![sq("b5")]);
    }

    // -------------------------------------------------------------------
    // Knight
    // -------------------------------------------------------------------

    #[test]
    fn knight_from_center_threatens_eight() {
        let board = lone("d4", Color::White, PieceKind::Knight);
        let threats = threat_set(&board, sq("d4"));
        assert_eq!(threats.len(), 8);
        for name in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(threats.contains(&sq(name)), "missing {name}");
        }
    }

    #[test]
    fn knight_in_corner_threatens_two() {
        let board = lone("a1", Color::White, PieceKind::Knight);
        let threats = threat_set(&board, sq("a1"));
        assert_eq!(threats.len(), 2);
        assert!(threats.contains(&sq("b3")));
        assert!(threats.contains(&sq("c2")));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let mut board = lone("d4", Color::White, PieceKind::Knight);
        // Surround the knight completely.
        for name in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
            board.set(sq(name), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        assert!(threatens(&board, sq("d4"), sq("f5")));
        assert_eq!(threat_set(&board, sq("d4")).len(), 8);
    }

    // -------------------------------------------------------------------
    // King
    // -------------------------------------------------------------------

    #[test]
    fn king_from_center_threatens_eight_adjacent() {
        let board = lone("d4", Color::White, PieceKind::King);
        let threats = threat_set(&board, sq("d4"));
        assert_eq!(threats.len(), 8);
        for name in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
            assert!(threats.contains(&sq(name)), "missing {name}");
        }
    }

    #[test]
    fn king_in_corner_threatens_three() {
        let board = lone("h8", Color::Black, PieceKind::King);
        assert_eq!(threat_set(&board, sq("h8")).len(), 3);
    }

    // -------------------------------------------------------------------
    // Bishop
    // -------------------------------------------------------------------

    #[test]
    fn bishop_from_center_threatens_diagonals() {
        let board = lone("d4", Color::White, PieceKind::Bishop);
        let threats = threat_set(&board, sq("d4"));
        assert_eq!(threats.len(), 13);
        assert!(threats.contains(&sq("a1")));
        assert!(threats.contains(&sq("h8")));
        assert!(threats.contains(&sq("a7")));
        assert!(threats.contains(&sq("g1")));
        assert!(!threats.contains(&sq("d5")));
    }

    #[test]
    fn bishop_blocked_attacks_blocker_not_beyond() {
        let mut board = lone("c1", Color::White, PieceKind::Bishop);
        board.set(sq("e3"), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert!(threatens(&board, sq("c1"), sq("d2")));
        // The first occupied square is attacked (capture)...
        assert!(threatens(&board, sq("c1"), sq("e3")));
        // ...but nothing beyond it.
        assert!(!threatens(&board, sq("c1"), sq("f4")));
        assert!(!threatens(&board, sq("c1"), sq("h6")));
    }

    // -------------------------------------------------------------------
    // Rook
    // -------------------------------------------------------------------

    #[test]
    fn rook_from_center_threatens_rank_and_file() {
        let board = lone("d4", Color::White, PieceKind::Rook);
        let threats = threat_set(&board, sq("d4"));
        assert_eq!(threats.len(), 14);
        assert!(threats.contains(&sq("d8")));
        assert!(threats.contains(&sq("d1")));
        assert!(threats.contains(&sq("a4")));
        assert!(threats.contains(&sq("h4")));
        assert!(!threats.contains(&sq("e5")));
    }

    #[test]
    fn rook_blocked_attacks_blocker_not_beyond() {
        let mut board = lone("a1", Color::White, PieceKind::Rook);
        board.set(sq("a5"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(threatens(&board, sq("a1"), sq("a4")));
        assert!(threatens(&board, sq("a1"), sq("a5")));
        assert!(!threatens(&board, sq("a1"), sq("a6")));
        assert!(!threatens(&board, sq("a1"), sq("a8")));
    }

    // -------------------------------------------------------------------
    // Queen
    // -------------------------------------------------------------------

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let board = lone("d4", Color::White, PieceKind::Queen);
        let threats = threat_set(&board, sq("d4"));
        assert_eq!(threats.len(), 27); // 14 rook + 13 bishop
        assert!(threats.contains(&sq("d8")));
        assert!(threats.contains(&sq("h8")));
        assert!(!threats.contains(&sq("e6")));
    }

    #[test]
    fn queen_blocked_on_one_line_still_threatens_others() {
        let mut board = lone("d4", Color::White, PieceKind::Queen);
        board.set(sq("d6"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(!threatens(&board, sq("d4"), sq("d8")));
        assert!(threatens(&board, sq("d4"), sq("d6")));
        assert!(threatens(&board, sq("d4"), sq("h8")));
    }

    // -------------------------------------------------------------------
    // threatens edge cases
    // -------------------------------------------------------------------

    #[test]
    fn empty_square_threatens_nothing() {
        let board = Board::empty();
        assert!(!threatens(&board, sq("d4"), sq("d5")));
    }

    #[test]
    fn piece_never_threatens_own_square() {
        for kind in PieceKind::ALL {
            let board = lone("d4", Color::White, kind);
            assert!(!threatens(&board, sq("d4"), sq("d4")), "{kind}");
        }
    }

    // -------------------------------------------------------------------
    // is_square_attacked
    // -------------------------------------------------------------------

    #[test]
    fn square_attacked_by_color() {
        let mut board = Board::empty();
        board.set(sq("a1"), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(sq("h8"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(is_square_attacked(&board, sq("a8"), Color::White));
        assert!(is_square_attacked(&board, sq("a8"), Color::Black));
        assert!(!is_square_attacked(&board, sq("b7"), Color::White));
    }

    #[test]
    fn own_pieces_count_as_attackers_of_their_squares_neighbours() {
        // Attack is color-blind to the occupant of the target square.
        let mut board = Board::empty();
        board.set(sq("a1"), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(sq("a3"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(is_square_attacked(&board, sq("a3"), Color::White));
        // Blocked beyond the friendly pawn.
        assert!(!is_square_attacked(&board, sq("a4"), Color::White));
    }

    // -------------------------------------------------------------------
    // is_path_blocked
    // -------------------------------------------------------------------

    #[test]
    fn path_blocked_intermediate_only() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        // d4 sits strictly between d1 and d8.
        assert!(is_path_blocked(&board, sq("d1"), sq("d8")));
        // Endpoint occupancy does not block.
        assert!(!is_path_blocked(&board, sq("d1"), sq("d4")));
        assert!(!is_path_blocked(&board, sq("d3"), sq("d4")));
    }

    #[test]
    fn path_clear_on_empty_board() {
        let board = Board::empty();
        assert!(!is_path_blocked(&board, sq("a1"), sq("h8")));
        assert!(!is_path_blocked(&board, sq("a1"), sq("a8")));
        assert!(!is_path_blocked(&board, sq("b2"), sq("b3")));
    }
}
