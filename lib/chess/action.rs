use crate::chess::{Cell, Move, ParseCellError, ParseMoveError, ParseSquareError, Square};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the transitions a player may apply to a [`Board`][`crate::chess::Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Move a piece.
    #[display(fmt = "{_0}")]
    Move(Move),
    /// Rescue the king held in a prison cell with the monkey on a square.
    #[display(fmt = "release {_0} {_1}")]
    Release(Square, Cell),
    /// Put the bear on the board.
    #[display(fmt = "bear {_0}")]
    PlaceBear(Square),
}

impl From<Move> for Action {
    fn from(m: Move) -> Self {
        Action::Move(m)
    }
}

/// The reason why parsing [`Action`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseActionError {
    #[display(fmt = "expected `x,y:x,y`, `release x,y cell` or `bear x,y`")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "failed to parse move")]
    InvalidMove(ParseMoveError),
    #[display(fmt = "failed to parse square")]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse prison cell")]
    InvalidCell(ParseCellError),
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = s.split_whitespace().collect();

        match tokens[..] {
            ["release", sq, cell] => Ok(Action::Release(sq.parse()?, cell.parse()?)),
            ["bear", sq] => Ok(Action::PlaceBear(sq.parse()?)),
            [m] => Ok(Action::Move(m.parse()?)),
            _ => Err(ParseActionError::InvalidSyntax),
        }
    }
}
