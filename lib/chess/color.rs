use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The color of a [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
    /// The color of the bear, which belongs to neither player.
    #[display(fmt = "neutral")]
    #[serde(alias = "other")]
    Neutral,
}

impl Color {
    /// The opposing player, if this is a player's color.
    pub fn opponent(&self) -> Option<Color> {
        match self {
            Color::White => Some(Color::Black),
            Color::Black => Some(Color::White),
            Color::Neutral => None,
        }
    }

    /// The vertical direction this color's pieces consider forward.
    ///
    /// Black starts at the top of the board and moves towards higher rows.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
            Color::Neutral => 0,
        }
    }

    /// The farthest row for pieces of this color, if any.
    pub fn last_row(&self) -> Option<u8> {
        match self {
            Color::White => Some(0),
            Color::Black => Some(7),
            Color::Neutral => None,
        }
    }
}
