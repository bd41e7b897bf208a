use crate::chess::{Board, Color, Move};
use derive_more::Constructor;

#[cfg(test)]
use mockall::automock;

/// Trait for types that can score a [`Board`].
#[cfg_attr(test, automock)]
pub trait Eval {
    /// Scores a [`Board`].
    ///
    /// Positive values favor White.
    fn eval(&self, board: &Board) -> i64;
}

impl<F: Fn(&Board) -> i64> Eval for F {
    fn eval(&self, board: &Board) -> i64 {
        self(board)
    }
}

/// Trait for types that list the moves worth searching in a [`Board`].
#[cfg_attr(test, automock)]
pub trait Order {
    /// Lists candidate moves, most promising first.
    fn order(&self, board: &Board) -> Vec<Move>;
}

impl<F: Fn(&Board) -> Vec<Move>> Order for F {
    fn order(&self, board: &Board) -> Vec<Move> {
        self(board)
    }
}

/// Scores boards purely based on the material on them.
#[derive(Debug, Default, Copy, Clone, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Materialist {}

impl Eval for Materialist {
    fn eval(&self, board: &Board) -> i64 {
        board
            .iter()
            .map(|p| match p.color() {
                Color::White => p.role().value(),
                Color::Black => -p.role().value(),
                Color::Neutral => 0,
            })
            .sum()
    }
}

/// Orders captures of the most valuable victims first.
#[derive(Debug, Default, Copy, Clone, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Mvv {}

impl Order for Mvv {
    fn order(&self, board: &Board) -> Vec<Move> {
        let mut moves = board.moves();
        moves.sort_by_key(|m| {
            let victim = board.piece_on(m.whither()).map_or(0, |p| p.role().value());
            -victim
        });

        moves
    }
}
