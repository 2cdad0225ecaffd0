//! 8×8 board representation.
//!
//! `Board` stores piece placement as a flat 64-cell array of `Option<Piece>`,
//! row-major with row 0 at the top (Black's back rank). It is deliberately a
//! plain value type with a cheap `Clone`: move legality checking clones the
//! board for every speculative look-ahead, so copying must stay trivial.

use crate::engine::attacks;
use crate::engine::types::{ChessError, Color, Piece, PieceKind, Square};

/// Piece placement for one position. No turn, clocks, or history — those
/// belong to the session layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

/// FEN placement field for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// An empty board with no pieces.
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Standard chess starting position: Black on rows 0–1, White on rows 6–7.
    pub fn starting() -> Self {
        Self::from_fen(STARTING_PLACEMENT).expect("starting placement is always valid")
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// What piece (if any) is on a given square?
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Overwrite a square. No chess-legality validation — that is the
    /// caller's responsibility.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Unconditionally move the piece on `from` to `to`, clearing `from`.
    /// Anything on `to` is overwritten (captured). Trusts the caller: invoke
    /// only after `movegen::is_legal`, or for speculative look-ahead copies.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        self.cells[to.index()] = self.cells[from.index()];
        self.cells[from.index()] = None;
    }

    // -----------------------------------------------------------------------
    // King lookup and check detection
    // -----------------------------------------------------------------------

    /// Scan all 64 squares for the king of the given color. Returns `None`
    /// when absent — callers treat that as "no check possible" rather than
    /// panicking, since a kingless board only occurs in hand-built setups.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.get(sq) == Some(Piece::new(color, PieceKind::King))
        })
    }

    /// Is `sq` attacked by any piece of color `by`?
    #[inline]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        attacks::is_square_attacked(self, sq, by)
    }

    /// Is this color's king currently attacked by the opponent?
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, !color),
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // FEN placement parsing & generation
    // -----------------------------------------------------------------------

    /// Parse the FEN piece-placement field (the first FEN field only) into a
    /// `Board`. Rank 8 comes first in FEN, which is row 0 here.
    pub fn from_fen(placement: &str) -> Result<Self, ChessError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in rank_str.chars() {
                if col > 7 {
                    return Err(ChessError::InvalidFen(format!(
                        "too many squares in rank {}",
                        8 - row
                    )));
                }
                if let Some(digit) = ch.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(ChessError::InvalidFen(format!(
                            "invalid empty count '{ch}' in rank {}",
                            8 - row
                        )));
                    }
                    col += digit as u8;
                } else if let Some(piece) = Piece::from_char(ch) {
                    board.set(Square::new(row as u8, col), Some(piece));
                    col += 1;
                } else {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid character '{ch}' in piece placement"
                    )));
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has {} squares instead of 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(board)
    }

    /// Export the placement as a FEN piece-placement field.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(72);
        for row in 0..8u8 {
            let mut empty_count = 0u8;
            for col in 0..8u8 {
                match self.get(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push((b'0' + empty_count) as char);
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push((b'0' + empty_count) as char);
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }

    // -----------------------------------------------------------------------
    // Board display (8×8 text grid)
    // -----------------------------------------------------------------------

    /// Render the board as an 8-line string (rank 8 at top), useful for
    /// debugging and the console front-end.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for row in 0..8u8 {
            s.push((b'8' - row) as char);
            s.push(' ');
            for col in 0..8u8 {
                let ch = match self.get(Square::new(row, col)) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                s.push(ch);
                if col < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
