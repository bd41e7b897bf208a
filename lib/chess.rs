mod action;
mod bitboard;
mod board;
mod color;
mod game;
mod r#move;
mod piece;
mod prison;
mod role;
mod signal;
mod snapshot;
mod square;
mod turn;

pub use action::*;
pub use bitboard::*;
pub use board::*;
pub use color::*;
pub use game::*;
pub use piece::*;
pub use prison::*;
pub use r#move::*;
pub use role::*;
pub use signal::*;
pub use snapshot::*;
pub use square::*;
pub use turn::*;
