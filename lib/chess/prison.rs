use crate::chess::{Color, PieceId, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four prison cells.
///
/// Cells `0` and `1` hold Black's captured royals, cells `2` and `3` hold White's.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "usize", into = "usize")]
pub struct Cell(#[cfg_attr(test, strategy(0u8..4))] u8);

/// The reason why an index does not name a [`Cell`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "prison cell `{_0}` does not exist")]
pub struct NoSuchCell(#[error(not(source))] pub usize);

impl Cell {
    /// Constructs [`Cell`] from its index in the range `0..4`.
    pub fn new(i: usize) -> Option<Self> {
        (i < 4).then(|| Cell(i as u8))
    }

    /// This cell's index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Iterates over all cells in order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator {
        (0..4).map(Cell)
    }

    /// The pair of cells that hold captured pieces of this [`Color`].
    pub fn pair(color: Color) -> Option<[Cell; 2]> {
        match color {
            Color::Black => Some([Cell(0), Cell(1)]),
            Color::White => Some([Cell(2), Cell(3)]),
            Color::Neutral => None,
        }
    }

    /// The color of the pieces held in this cell.
    pub fn color(&self) -> Color {
        if self.0 < 2 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// The square a monkey must stand on to rescue the king held in this cell.
    pub fn rescue_square(&self) -> Square {
        match self.0 {
            0 => Square::new(7, 3),
            1 => Square::new(7, 4),
            2 => Square::new(0, 3),
            _ => Square::new(0, 4),
        }
    }
}

impl TryFrom<usize> for Cell {
    type Error = NoSuchCell;

    fn try_from(i: usize) -> Result<Self, Self::Error> {
        Cell::new(i).ok_or(NoSuchCell(i))
    }
}

impl From<Cell> for usize {
    fn from(c: Cell) -> Self {
        c.index()
    }
}

/// The reason why parsing [`Cell`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected a prison cell in the range `0..4`")]
pub struct ParseCellError;

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i: usize = s.trim().parse().map_err(|_| ParseCellError)?;
        Cell::new(i).ok_or(ParseCellError)
    }
}

/// The four prison cells.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Prison([Option<PieceId>; 4]);

impl Prison {
    /// The piece held in a [`Cell`], if any.
    pub fn get(&self, cell: Cell) -> Option<PieceId> {
        self.0[cell.index()]
    }

    /// Puts a piece of this [`Color`] in the first free cell of its pair.
    ///
    /// Returns the cell used, or `None` if both are taken.
    pub fn imprison(&mut self, color: Color, id: PieceId) -> Option<Cell> {
        let cell = Cell::pair(color)?.into_iter().find(|&c| self.get(c).is_none())?;
        self.0[cell.index()] = Some(id);
        Some(cell)
    }

    /// Puts a piece in a specific [`Cell`], returning what was there before.
    pub fn set(&mut self, cell: Cell, id: Option<PieceId>) -> Option<PieceId> {
        std::mem::replace(&mut self.0[cell.index()], id)
    }

    /// Whether both cells holding pieces of this [`Color`] are taken.
    pub fn is_full(&self, color: Color) -> bool {
        Cell::pair(color).is_some_and(|p| p.into_iter().all(|c| self.get(c).is_some()))
    }

    /// Iterates over the contents of every cell in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Cell, Option<PieceId>)> + '_ {
        Cell::iter().map(|c| (c, self.get(c)))
    }
}
