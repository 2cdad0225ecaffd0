pub mod attacks;
pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::Board;
pub use game::{ClickOutcome, GameSession, Snapshot};
pub use movegen::{is_checkmate, is_legal, legal_moves, legal_moves_from};
pub use types::*;
