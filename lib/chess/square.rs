use crate::chess::Bitboard;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Unvalidated board coordinates, as received from the outside world.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({x},{y})")]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    /// Constructs [`Coordinates`] from a pair of integers.
    pub fn new(x: i32, y: i32) -> Self {
        Coordinates { x, y }
    }
}

/// The reason why [`Coordinates`] do not name a [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "coordinates `{_0}` are out of bounds")]
pub struct OutOfBounds(#[error(not(source))] pub Coordinates);

/// A square on the 8x8 board.
///
/// Row `0` is at Black's side of the board and row `7` at White's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "Coordinates", into = "Coordinates")]
pub struct Square(#[cfg_attr(test, strategy(0u8..64))] u8);

impl Square {
    /// Constructs [`Square`] from a column and a row.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range `0..8`.
    #[inline(always)]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 8 && y < 8);
        Square(y * 8 + x)
    }

    /// Constructs [`Square`] from its index in the range `0..64`.
    #[inline(always)]
    pub fn from_index(i: usize) -> Option<Self> {
        (i < 64).then(|| Square(i as u8))
    }

    /// This square's column.
    #[inline(always)]
    pub fn x(&self) -> u8 {
        self.0 % 8
    }

    /// This square's row.
    #[inline(always)]
    pub fn y(&self) -> u8 {
        self.0 / 8
    }

    /// This square's index in the range `0..64`.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The square `dx` columns and `dy` rows away, if on the board.
    #[inline(always)]
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x() as i8 + dx;
        let y = self.y() as i8 + dy;
        ((0..8).contains(&x) && (0..8).contains(&y)).then(|| Square::new(x as u8, y as u8))
    }

    /// Whether `other` is one of the 8 squares surrounding this one.
    pub fn is_adjacent(&self, other: Square) -> bool {
        let dx = (self.x() as i8 - other.x() as i8).abs();
        let dy = (self.y() as i8 - other.y() as i8).abs();
        *self != other && dx <= 1 && dy <= 1
    }

    /// Returns a [`Bitboard`] that only contains this square.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.0)
    }

    /// Iterates over all squares in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }
}

impl TryFrom<Coordinates> for Square {
    type Error = OutOfBounds;

    fn try_from(c: Coordinates) -> Result<Self, Self::Error> {
        if (0..8).contains(&c.x) && (0..8).contains(&c.y) {
            Ok(Square::new(c.x as u8, c.y as u8))
        } else {
            Err(OutOfBounds(c))
        }
    }
}

impl From<Square> for Coordinates {
    fn from(s: Square) -> Self {
        Coordinates::new(s.x().into(), s.y().into())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x(), self.y())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "expected a square in the form `x,y`")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "failed to parse coordinate")]
    InvalidCoordinate(ParseIntError),
    #[display(fmt = "failed to parse square")]
    OutOfBounds(OutOfBounds),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or(ParseSquareError::InvalidSyntax)?;
        let c = Coordinates::new(x.trim().parse()?, y.trim().parse()?);
        Ok(c.try_into()?)
    }
}
