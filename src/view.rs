//! Serializable views of a game session for external renderers.
//!
//! The core stays presentation-free; a front-end (GUI, web, terminal) gets a
//! plain data description of the session: an 8×8 array of piece codes, the
//! highlighted square, whose turn it is, and the current status.

use serde::Serialize;

use crate::engine::game::GameSession;
use crate::engine::types::{Color, GameStatus, Square};

/// One full render frame of a session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: String,
    /// Row-major, row 0 at the top (Black's back rank). Pieces are coded
    /// "wP", "bK", etc.; empty squares are `null`.
    pub board: Vec<Vec<Option<String>>>,
    pub turn: String,
    /// Selected square in algebraic notation, if any.
    pub selected: Option<String>,
    pub status: String,
    pub check: bool,
    pub game_over: bool,
    pub created_at: String,
}

impl GameView {
    pub fn from_session(session: &GameSession) -> Self {
        let board = (0..8u8)
            .map(|row| {
                (0..8u8)
                    .map(|col| session.board().get(Square::new(row, col)).map(|p| p.code()))
                    .collect()
            })
            .collect();

        let check = matches!(
            session.status(),
            GameStatus::InCheck(_) | GameStatus::Checkmate(_)
        );

        GameView {
            id: session.id.clone(),
            board,
            turn: session.turn().to_string(),
            selected: session.selected().map(|s| s.to_algebraic()),
            status: session.status().to_string(),
            check,
            game_over: session.is_game_over(),
            created_at: session.created_at.to_rfc3339(),
        }
    }
}
