use crate::chess::{ParseSquareError, Square};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move from one [`Square`] to another.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{_0}:{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

#[derive(Deserialize, Serialize)]
struct FromTo {
    from: Square,
    to: Square,
}

impl Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FromTo {
            from: self.whence(),
            to: self.whither(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let FromTo { from, to } = FromTo::deserialize(deserializer)?;
        Ok(Move(from, to))
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "expected a move in the form `x,y:x,y`")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "failed to parse square")]
    InvalidSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whence, whither) = s.split_once(':').ok_or(ParseMoveError::InvalidSyntax)?;
        Ok(Move(whence.parse()?, whither.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_without_separator(#[filter(!#s.contains(':'))] s: String) {
        assert_eq!(s.parse::<Move>(), Err(ParseMoveError::InvalidSyntax));
    }

    #[test]
    fn move_serializes_as_pair_of_positions() {
        let m = Move(Square::new(0, 6), Square::new(0, 5));
        assert_eq!(
            serde_json::to_string(&m).ok(),
            Some(r#"{"from":{"x":0,"y":6},"to":{"x":0,"y":5}}"#.into())
        );
    }
}
