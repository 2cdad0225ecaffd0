//! Stateful game session wrapping a `Board`.
//!
//! `GameSession` owns the board, whose turn it is, and the transient
//! click-selection. It is the type a presentation layer interacts with: feed
//! it square coordinates from input events and re-render from its snapshot.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{ChessError, Color, GameStatus, Move, Square};

// =========================================================================
// ClickOutcome & Snapshot
// =========================================================================

/// What a click did to the session. The caller re-renders based on this;
/// an illegal move attempt is a deselection, never an error to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A friendly piece was selected.
    Selected(Square),
    /// A move was applied; the turn flipped.
    Moved { mv: Move, status: GameStatus },
    /// The selection was cleared (illegal target, or re-click).
    Deselected,
    /// Nothing changed (empty/enemy square with no selection, or game over).
    Ignored,
}

/// Everything a renderer needs: the placement plus the highlighted square.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub board: Board,
    pub selected: Option<Square>,
}

// =========================================================================
// GameSession
// =========================================================================

/// A two-player chess session: board, side to move, and UI selection state.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    status: GameStatus,

    // Metadata for the hosting layer.
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// New game: standard starting position, White to move, no selection.
    pub fn new() -> Self {
        GameSession {
            board: Board::starting(),
            turn: Color::White,
            selected: None,
            status: GameStatus::Normal,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Create a session from a FEN placement field plus side to move,
    /// e.g. `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"`.
    /// Requires exactly one king per side.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 2 {
            return Err(ChessError::InvalidFen(format!(
                "expected 'placement [side]', got {} fields",
                fields.len()
            )));
        }

        let board = Board::from_fen(fields[0])?;
        let turn = match fields.get(1).copied().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid side to move: '{other}'"
                )));
            }
        };

        for color in [Color::White, Color::Black] {
            if board.find_king(color).is_none() {
                return Err(ChessError::InvalidFen(format!("{color} has no king")));
            }
        }

        let mut session = GameSession {
            board,
            turn,
            selected: None,
            status: GameStatus::Normal,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        };
        session.status = session.compute_status();
        Ok(session)
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Status after the most recent move (or of the initial position).
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Board plus highlighted square, for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            selected: self.selected,
        }
    }

    /// Legal destinations for the piece on `from`, for UI move hints.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        movegen::legal_moves_from(&self.board, from)
    }

    // -----------------------------------------------------------------
    // Click handling
    // -----------------------------------------------------------------

    /// Process one click at `sq`, per the selection protocol:
    /// with a selection, attempt selected→sq (apply + flip turn on success,
    /// silently deselect on failure); without one, select only a piece
    /// belonging to the side to move.
    pub fn handle_click(&mut self, sq: Square) -> ClickOutcome {
        if self.is_game_over() {
            tracing::debug!(square = %sq, "click ignored: game over");
            return ClickOutcome::Ignored;
        }

        match self.selected.take() {
            Some(from) => match self.try_move(from, sq) {
                Ok(status) => {
                    let mv = Move::new(from, sq);
                    tracing::info!(%mv, %status, turn = %self.turn, "move applied");
                    ClickOutcome::Moved { mv, status }
                }
                Err(_) => {
                    // Selection already cleared by take().
                    tracing::debug!(from = %from, to = %sq, "illegal target, deselected");
                    ClickOutcome::Deselected
                }
            },
            None => {
                if self.board.get(sq).is_some_and(|p| p.color == self.turn) {
                    self.selected = Some(sq);
                    tracing::debug!(square = %sq, "selected");
                    ClickOutcome::Selected(sq)
                } else {
                    ClickOutcome::Ignored
                }
            }
        }
    }

    // -----------------------------------------------------------------
    // Direct move entry
    // -----------------------------------------------------------------

    /// Attempt a move for the side to move. On success the board is mutated,
    /// the turn flips, and the resulting status is returned.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<GameStatus, ChessError> {
        if self.is_game_over() {
            return Err(ChessError::GameOver(self.status.to_string()));
        }
        if !movegen::is_legal(&self.board, from, to, self.turn) {
            return Err(ChessError::IllegalMove {
                from: from.to_algebraic(),
                to: to.to_algebraic(),
            });
        }

        self.board.move_piece(from, to);
        self.turn = !self.turn;
        self.selected = None;
        self.status = self.compute_status();
        Ok(self.status)
    }

    // -----------------------------------------------------------------
    // Status detection
    // -----------------------------------------------------------------

    /// Check/checkmate state of the side now to move. Stalemate and draws
    /// are out of scope; "no moves but not in check" stays `Normal`.
    fn compute_status(&self) -> GameStatus {
        let side = self.turn;
        if !self.board.is_in_check(side) {
            return GameStatus::Normal;
        }
        if movegen::legal_moves(&self.board, side).is_empty() {
            GameStatus::Checkmate(side)
        } else {
            GameStatus::InCheck(side)
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
