//! Two-player chess rules engine.
//!
//! The core maintains board state, validates moves against piece-movement
//! rules, detects check, and determines checkmate. Presentation (windows,
//! pixel-to-square mapping, rendering) is an external collaborator: it feeds
//! clicked squares into [`GameSession::handle_click`] and re-renders from
//! [`GameSession::snapshot`].
//!
//! Out of scope by design: castling, en passant, promotion, draw detection,
//! move notation, clocks, history/undo, and any search or AI.

pub mod engine;
pub mod view;

pub use engine::board::Board;
pub use engine::game::{ClickOutcome, GameSession, Snapshot};
pub use engine::types::{ChessError, Color, GameStatus, Move, Piece, PieceKind, Square};
