use crate::chess::Square;
use derive_more::*;
use std::fmt::{self, Write};

/// A set of squares on the board.
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Constructor,
    Deref,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for sq in Square::iter() {
            f.write_char(if self.contains(sq) { '■' } else { '◻' })?;
            f.write_char(if sq.x() < 7 { ' ' } else { '\n' })?;
        }

        Ok(())
    }
}

impl Bitboard {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// A full board.
    #[inline(always)]
    pub const fn full() -> Self {
        Bitboard(0xFFFFFFFFFFFFFFFF)
    }

    /// The number of [`Square`]s in the set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the board is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this [`Square`] is in the set.
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        !(sq.bitboard() & *self).is_empty()
    }

    /// Adds a [`Square`] to this bitboard.
    #[inline(always)]
    pub fn with(&self, sq: Square) -> Self {
        sq.bitboard() | *self
    }

    /// Removes a [`Square`]s from this bitboard.
    #[inline(always)]
    pub fn without(&self, sq: Square) -> Self {
        !sq.bitboard() & *self
    }

    /// An iterator over the [`Square`]s in this bitboard.
    #[inline(always)]
    pub fn iter(&self) -> Squares {
        Squares::new(*self)
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), |bb, sq| bb.with(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Squares::new(self)
    }
}

/// An iterator over the [`Square`]s in a [`Bitboard`].
#[derive(Debug, Constructor)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let sq = Square::from_index(self.0.trailing_zeros() as _)?;
        self.0 ^= sq.bitboard();
        Some(sq)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl DoubleEndedIterator for Squares {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        let sq = Square::from_index(63usize.checked_sub(self.0.leading_zeros() as _)?)?;
        self.0 ^= sq.bitboard();
        Some(sq)
    }
}

impl ExactSizeIterator for Squares {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn full_and_empty_complement_each_other() {
        assert_eq!(Bitboard::empty().len(), 0);
        assert_eq!(Bitboard::full().len(), 64);
        assert_eq!(!Bitboard::empty(), Bitboard::full());
    }

    #[proptest]
    fn len_counts_the_squares_in_the_set(bb: Bitboard) {
        assert_eq!(bb.len(), bb.iter().count());
        assert_eq!(bb.is_empty(), bb.len() == 0);
    }

    #[proptest]
    fn adding_and_removing_a_square_toggles_membership(bb: Bitboard, sq: Square) {
        assert!(bb.with(sq).contains(sq));
        assert!(!bb.without(sq).contains(sq));
        assert_eq!(bb.with(sq).without(sq), bb.without(sq));
    }

    #[proptest]
    fn a_square_is_a_singleton_set(sq: Square) {
        assert_eq!(Vec::from_iter(Bitboard::from(sq)), vec![sq]);
    }

    #[proptest]
    fn squares_are_listed_by_ascending_index(bb: Bitboard) {
        let v = Vec::from_iter(bb);
        assert!(v.windows(2).all(|w| w[0].index() < w[1].index()));

        let mut backwards = Vec::from_iter(bb.iter().rev());
        backwards.reverse();
        assert_eq!(backwards, v);
    }

    #[proptest]
    fn union_contains_the_squares_of_both_sets(a: Bitboard, b: Bitboard, sq: Square) {
        assert_eq!((a | b).contains(sq), a.contains(sq) || b.contains(sq));
        assert_eq!((a & b).contains(sq), a.contains(sq) && b.contains(sq));
    }

    #[proptest]
    fn collecting_the_squares_rebuilds_the_set(bb: Bitboard) {
        assert_eq!(Bitboard::from_iter(bb), bb);
    }
}
