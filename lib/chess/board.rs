use crate::chess::{Action, Bitboard, Cell, Color, Kind, Move, Place, Prison, Role, Square, Turn};
use crate::chess::{NoSuchCell, OutOfBounds, Piece, PieceId};
use derive_more::{Display, Error};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::fmt::{self, Write};
use std::ops::{Index, Range};
use tracing::{debug, trace};

/// The reason why a transition cannot be applied to a [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
pub enum IllegalMove {
    #[display(fmt = "{_0}")]
    OutOfBounds(OutOfBounds),
    #[display(fmt = "{_0}")]
    NoSuchCell(NoSuchCell),
    #[display(fmt = "the game is over")]
    GameOver,
    #[display(fmt = "there is no piece on square `{_0}`")]
    Vacant(#[error(not(source))] Square),
    #[display(fmt = "it is not {_0}'s turn")]
    OutOfTurn(#[error(not(source))] Color),
    #[display(fmt = "square `{_1}` cannot be reached from `{_0}`")]
    Unreachable(Square, Square),
    #[display(fmt = "the piece on square `{_0}` cannot be taken")]
    Protected(#[error(not(source))] Square),
    #[display(fmt = "the piece on square `{_0}` is not a monkey")]
    NotAMonkey(#[error(not(source))] Square),
    #[display(fmt = "the monkey on square `{_0}` is already carrying a king")]
    AlreadyCarrying(#[error(not(source))] Square),
    #[display(fmt = "square `{_0}` is not the rescue square of prison cell `{_1}`")]
    NotOnRescueSquare(Square, Cell),
    #[display(fmt = "prison cell `{_0}` is empty")]
    EmptyCell(#[error(not(source))] Cell),
    #[display(fmt = "the prisoner in cell `{_0}` cannot be rescued")]
    NotRescuable(#[error(not(source))] Cell),
    #[display(fmt = "the prisoner in cell `{_0}` belongs to the opponent")]
    ColorMismatch(#[error(not(source))] Cell),
    #[display(fmt = "the bear has already been placed")]
    BearPlaced,
    #[display(fmt = "square `{_0}` is occupied")]
    Occupied(#[error(not(source))] Square),
}

impl From<OutOfBounds> for IllegalMove {
    fn from(e: OutOfBounds) -> Self {
        IllegalMove::OutOfBounds(e)
    }
}

impl From<NoSuchCell> for IllegalMove {
    fn from(e: NoSuchCell) -> Self {
        IllegalMove::NoSuchCell(e)
    }
}

const BACK_ROW: [Role; 8] = [
    Role::Crow,
    Role::Monkey,
    Role::Fish,
    Role::Queen,
    Role::King,
    Role::Fish,
    Role::Monkey,
    Role::Crow,
];

const FRONT_ROW: [Role; 8] = [
    Role::Fish,
    Role::Fish,
    Role::Elephant,
    Role::Fish,
    Role::Fish,
    Role::Elephant,
    Role::Fish,
    Role::Fish,
];

/// The state of a game.
///
/// Every piece that was ever put on the board keeps a stable slot, identified by its
/// [`PieceId`], whether it is still on the board, carried, imprisoned or taken.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    pub(super) pieces: Vec<Piece>,
    pub(super) squares: [Option<PieceId>; 64],
    pub(super) prison: Prison,
    pub(super) turns: Vec<Turn>,
    pub(super) taken: Vec<PieceId>,
    pub(super) default_bear: bool,
    pub(super) over: bool,
    pub(super) winner: Option<Color>,
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for (color, rows) in [(Color::Black, [0, 1]), (Color::White, [7, 6])] {
            for (y, roles) in rows.into_iter().zip([BACK_ROW, FRONT_ROW]) {
                for (x, role) in (0..8).zip(roles) {
                    board.insert(Piece::new(color, role.into(), Square::new(x, y)));
                }
            }
        }

        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.snapshot())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::iter() {
            let c = match self.piece_on(sq) {
                None => '.',
                Some(p) => {
                    let c = match p.role() {
                        Role::King => 'k',
                        Role::Queen => 'q',
                        Role::Crow => 'c',
                        Role::Monkey => 'm',
                        Role::Elephant => 'e',
                        Role::Fish => 'f',
                        Role::Bear => 'b',
                    };

                    match p.color() {
                        Color::Black => c,
                        _ => c.to_ascii_uppercase(),
                    }
                }
            };

            f.write_char(c)?;
            if sq.x() == 7 {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

impl Index<PieceId> for Board {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Self::Output {
        &self.pieces[id.index()]
    }
}

impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..96, any::<Selector>()).prop_map(|(n, selector)| {
            let mut board = Board::default();

            for _ in 0..n {
                match selector.try_select(board.actions()) {
                    None => break,
                    Some(a) => {
                        if board.execute(a).is_err() {
                            break;
                        }
                    }
                }
            }

            board
        })
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            squares: [None; 64],
            prison: Prison::default(),
            turns: Vec::new(),
            taken: Vec::new(),
            default_bear: true,
            over: false,
            winner: None,
        }
    }

    /// Puts a new piece of this [`Role`] on an empty [`Square`], without recording a turn.
    pub fn spawn(&mut self, color: Color, role: Role, sq: Square) -> Result<PieceId, IllegalMove> {
        if self.squares[sq.index()].is_some() {
            return Err(IllegalMove::Occupied(sq));
        }

        Ok(self.insert(Piece::new(color, role.into(), sq)))
    }

    /// Adds a piece to the arena, putting it on its square if it's on the board.
    pub(super) fn insert(&mut self, piece: Piece) -> PieceId {
        let id = PieceId::new(self.pieces.len());
        if piece.is_on_board() {
            self.squares[piece.square().index()] = Some(id);
        }

        self.pieces.push(piece);
        id
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        if self.turns.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// The log of turns played so far.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The last turn played, if any.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Whether the game is over.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Whether the bear may still be placed.
    pub fn has_default_bear(&self) -> bool {
        self.default_bear
    }

    /// The prison cells.
    pub fn prison(&self) -> &Prison {
        &self.prison
    }

    /// The piece held in a prison [`Cell`], if any.
    pub fn prisoner(&self, cell: Cell) -> Option<&Piece> {
        self.prison.get(cell).map(|id| &self[id])
    }

    /// The pieces captured so far, in order.
    pub fn taken(&self) -> impl ExactSizeIterator<Item = &Piece> {
        self.taken.iter().map(|&id| &self[id])
    }

    /// The [`PieceId`] of the piece on a [`Square`], if any.
    pub fn id_on(&self, sq: Square) -> Option<PieceId> {
        self.squares[sq.index()]
    }

    /// The piece on a [`Square`], if any.
    pub fn piece_on(&self, sq: Square) -> Option<&Piece> {
        self.id_on(sq).map(|id| &self[id])
    }

    /// The pieces on the board, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_on_board())
    }

    /// The squares occupied by some piece.
    pub fn occupied(&self) -> Bitboard {
        self.iter().map(Piece::square).collect()
    }

    /// The squares occupied by pieces of this [`Color`].
    pub fn by_color(&self, c: Color) -> Bitboard {
        self.iter().filter(|p| p.color() == c).map(Piece::square).collect()
    }

    /// The prison cell the monkey on this [`Square`] is able to rescue a king from.
    pub fn rescuable_cell(&self, sq: Square) -> Option<Cell> {
        let monkey = self.piece_on(sq)?;
        let Kind::Monkey { king: None, .. } = monkey.kind() else {
            return None;
        };

        Cell::pair(monkey.color())?.into_iter().find(|&c| {
            c.rescue_square() == sq
                && self
                    .prisoner(c)
                    .is_some_and(|k| k.kind() == Kind::King { banana: true })
        })
    }

    /// The legal moves for the side to move.
    ///
    /// The bear belongs to neither side, so its moves are always included.
    pub fn moves(&self) -> Vec<Move> {
        if self.over {
            return Vec::new();
        }

        let turn = self.turn();
        self.iter()
            .filter(|p| p.color() == turn || p.color() == Color::Neutral)
            .flat_map(|p| p.moves(self).into_iter().map(|sq| Move(p.square(), sq)))
            .collect()
    }

    /// Every legal [`Action`] for the side to move.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::from_iter(self.moves().into_iter().map(Action::Move));

        if self.over {
            return actions;
        }

        let turn = self.turn();
        for p in self.iter().filter(|p| p.color() == turn) {
            if let Some(cell) = self.rescuable_cell(p.square()) {
                actions.push(Action::Release(p.square(), cell));
            }
        }

        if self.default_bear {
            actions.extend((!self.occupied()).into_iter().map(Action::PlaceBear));
        }

        actions
    }

    /// Applies an [`Action`] if legal, otherwise returns the reason why not.
    pub fn execute(&mut self, action: Action) -> Result<&Turn, IllegalMove> {
        match action {
            Action::Move(m) => self.play(m),
            Action::Release(sq, cell) => self.release(sq, cell),
            Action::PlaceBear(sq) => self.place_bear(sq),
        }
    }

    /// Plays a [`Move`] if legal, otherwise returns the reason why not.
    ///
    /// The board is left untouched if the move is illegal.
    pub fn play(&mut self, m: Move) -> Result<&Turn, IllegalMove> {
        let (mover, target) = match self.check_move(m) {
            Ok(ids) => ids,
            Err(e) => {
                trace!(%m, %e, "rejected move");
                return Err(e);
            }
        };

        let (whence, whither) = (m.whence(), m.whither());
        let to_piece = target.map(|id| self.describe(id));

        if let Some(id) = target {
            self.capture(id);
        }

        self.squares[whence.index()] = None;
        self.squares[whither.index()] = Some(mover);
        self.pieces[mover.index()].square = whither;

        let turn = Turn {
            no: self.turns.len() + 1,
            from: Some(whence),
            to: Some(whither),
            from_piece: Some(self.describe(mover)),
            took_piece: target.is_some(),
            to_piece,
            dropped_king: self.settle(mover, whence),
            ..Turn::default()
        };

        debug!(%m, sound = %turn.sound(), "played move");
        self.record(turn)
    }

    /// Lets the monkey on a [`Square`] rescue the king held in a prison [`Cell`].
    ///
    /// The board is left untouched if the rescue is not possible.
    pub fn release(&mut self, sq: Square, cell: Cell) -> Result<&Turn, IllegalMove> {
        let (monkey, king) = match self.check_release(sq, cell) {
            Ok(ids) => ids,
            Err(e) => {
                trace!(%sq, %cell, %e, "rejected release");
                return Err(e);
            }
        };

        if let Kind::Monkey { banana, king: carried } = &mut self.pieces[monkey.index()].kind {
            *banana = true;
            *carried = Some(king);
        }

        let prisoner = &mut self.pieces[king.index()];
        prisoner.kind = Kind::King { banana: false };
        prisoner.place = Place::Carried(monkey);
        self.prison.set(cell, None);

        let turn = Turn {
            no: self.turns.len() + 1,
            from: Some(sq),
            to: Some(sq),
            from_piece: Some(self.describe(monkey)),
            rescued_king: true,
            ..Turn::default()
        };

        debug!(%sq, %cell, "released prisoner");
        self.record(turn)
    }

    /// Places the bear on an empty [`Square`], if it hasn't been placed yet.
    ///
    /// The board is left untouched if the bear cannot be placed.
    pub fn place_bear(&mut self, sq: Square) -> Result<&Turn, IllegalMove> {
        let checked = if self.over {
            Err(IllegalMove::GameOver)
        } else if !self.default_bear {
            Err(IllegalMove::BearPlaced)
        } else if self.squares[sq.index()].is_some() {
            Err(IllegalMove::Occupied(sq))
        } else {
            Ok(())
        };

        if let Err(e) = checked {
            trace!(%sq, %e, "rejected bear");
            return Err(e);
        }

        let bear = self.insert(Piece::new(Color::Neutral, Kind::Bear, sq));
        self.default_bear = false;

        let turn = Turn {
            no: self.turns.len() + 1,
            to: Some(sq),
            to_piece: Some(self.describe(bear)),
            is_bear: true,
            ..Turn::default()
        };

        debug!(%sq, "placed bear");
        self.record(turn)
    }

    fn check_move(&self, m: Move) -> Result<(PieceId, Option<PieceId>), IllegalMove> {
        let (whence, whither) = (m.whence(), m.whither());

        if self.over {
            return Err(IllegalMove::GameOver);
        }

        let mover = self.id_on(whence).ok_or(IllegalMove::Vacant(whence))?;
        let piece = &self[mover];

        if piece.color() != Color::Neutral && piece.color() != self.turn() {
            return Err(IllegalMove::OutOfTurn(piece.color()));
        }

        let target = self.id_on(whither);
        if !piece.moves(self).contains(whither) {
            return Err(match target {
                Some(_) => IllegalMove::Protected(whither),
                None => IllegalMove::Unreachable(whence, whither),
            });
        }

        Ok((mover, target))
    }

    fn check_release(&self, sq: Square, cell: Cell) -> Result<(PieceId, PieceId), IllegalMove> {
        if self.over {
            return Err(IllegalMove::GameOver);
        }

        let monkey = self.id_on(sq).ok_or(IllegalMove::Vacant(sq))?;
        let piece = &self[monkey];

        let Kind::Monkey { king: carried, .. } = piece.kind() else {
            return Err(IllegalMove::NotAMonkey(sq));
        };

        if piece.color() != self.turn() {
            return Err(IllegalMove::OutOfTurn(piece.color()));
        } else if carried.is_some() {
            return Err(IllegalMove::AlreadyCarrying(sq));
        }

        let king = self.prison.get(cell).ok_or(IllegalMove::EmptyCell(cell))?;
        let prisoner = &self[king];

        if prisoner.kind() != (Kind::King { banana: true }) {
            Err(IllegalMove::NotRescuable(cell))
        } else if prisoner.color() != piece.color() {
            Err(IllegalMove::ColorMismatch(cell))
        } else if cell.rescue_square() != sq {
            Err(IllegalMove::NotOnRescueSquare(sq, cell))
        } else {
            Ok((monkey, king))
        }
    }

    /// Removes a piece from the board, sending royals to prison.
    ///
    /// A monkey carrying a king is taken and the king goes to prison in its stead.
    fn capture(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id.index()];
        let sq = piece.square;

        self.squares[sq.index()] = None;
        self.taken.push(id);
        piece.place = Place::Taken;

        let prisoner = match &mut piece.kind {
            Kind::Monkey { king, .. } => king.take(),
            Kind::King { .. } | Kind::Queen => Some(id),
            _ => None,
        };

        if let Some(p) = prisoner {
            let royal = &mut self.pieces[p.index()];
            royal.square = sq;
            royal.place = match self.prison.imprison(royal.color, p) {
                Some(cell) => Place::Prison(cell),
                None => Place::Taken,
            };
        }
    }

    /// Applies the consequences of a piece having moved away from `whence`.
    ///
    /// Returns whether a king was dropped.
    fn settle(&mut self, id: PieceId, whence: Square) -> bool {
        let piece = &mut self.pieces[id.index()];
        let (color, sq) = (piece.color, piece.square);

        let dropped = match &mut piece.kind {
            Kind::Fish { promoted } => {
                if color.last_row() == Some(sq.y()) {
                    *promoted = true;
                }

                None
            }

            Kind::Monkey { king, .. } => king.take(),
            _ => None,
        };

        let Some(k) = dropped else {
            return false;
        };

        let king = &mut self.pieces[k.index()];
        king.square = whence;
        king.place = Place::Board;
        self.squares[whence.index()] = Some(k);
        true
    }

    /// Appends a turn to the log and checks whether the game has ended.
    fn record(&mut self, turn: Turn) -> Result<&Turn, IllegalMove> {
        self.turns.push(turn);

        if !self.over {
            if self.prison.is_full(Color::Black) {
                self.over = true;
                self.winner = Some(Color::White);
            } else if self.prison.is_full(Color::White) {
                self.over = true;
                self.winner = Some(Color::Black);
            }

            if let Some(w) = self.winner {
                debug!(winner = %w, "game over");
            }
        }

        Ok(&self.turns[self.turns.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y)
    }

    #[test]
    fn default_board_has_the_initial_setup() {
        let b = Board::default();

        assert_eq!(b.iter().count(), 32);
        assert_eq!(b.by_color(Color::Black).len(), 16);
        assert_eq!(b.by_color(Color::White).len(), 16);
        assert_eq!(b.piece_on(sq(4, 0)).map(Piece::role), Some(Role::King));
        assert_eq!(b.piece_on(sq(3, 7)).map(Piece::role), Some(Role::Queen));
        assert_eq!(b.piece_on(sq(2, 6)).map(Piece::role), Some(Role::Elephant));
        assert_eq!(b.piece_on(sq(1, 7)).map(Piece::color), Some(Color::White));
        assert_eq!(b.turn(), Color::White);
        assert!(b.has_default_bear());
        assert!(!b.is_over());
    }

    #[test]
    fn kings_start_with_a_banana() {
        let b = Board::default();
        for p in b.iter().filter(|p| p.role() == Role::King) {
            assert_eq!(p.kind(), Kind::King { banana: true });
        }
    }

    #[test]
    fn board_displays_as_a_grid() {
        assert_eq!(
            Board::default().to_string(),
            "cmfqkfmc\nffeffeff\n........\n........\n........\n........\nFFEFFEFF\nCMFQKFMC\n"
        );
    }

    #[proptest]
    fn side_to_move_alternates_with_every_turn(b: Board) {
        let expected = if b.turns().len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };

        assert_eq!(b.turn(), expected);
    }

    #[proptest]
    fn turns_are_numbered_contiguously(b: Board) {
        for (i, t) in b.turns().iter().enumerate() {
            assert_eq!(t.no, i + 1);
        }
    }

    #[proptest]
    fn no_two_pieces_share_a_square(b: Board) {
        assert_eq!(b.occupied().len(), b.iter().count());

        for p in b.iter() {
            assert_eq!(b.piece_on(p.square()), Some(p));
        }
    }

    #[proptest]
    fn royals_are_in_exactly_one_place(b: Board) {
        for (i, p) in b.pieces.iter().enumerate() {
            let id = PieceId::new(i);
            let imprisoned = b.prison.iter().filter(|&(_, q)| q == Some(id)).count();
            let carried = b.pieces.iter().filter(|m| m.carried() == Some(id)).count();

            match p.place() {
                Place::Board => assert_eq!((imprisoned, carried), (0, 0)),
                Place::Prison(c) => {
                    assert_eq!((imprisoned, carried), (1, 0));
                    assert_eq!(b.prison.get(c), Some(id));
                }
                Place::Carried(m) => {
                    assert_eq!((imprisoned, carried), (0, 1));
                    assert_eq!(b[m].carried(), Some(id));
                }
                Place::Taken => assert_eq!((imprisoned, carried), (0, 0)),
            }
        }
    }

    #[proptest]
    fn game_is_over_once_a_prison_pair_is_full(b: Board) {
        let full = b.prison.is_full(Color::Black) || b.prison.is_full(Color::White);
        assert_eq!(b.is_over(), full);
        assert_eq!(b.winner().is_some(), full);
    }

    #[proptest]
    fn every_listed_action_is_legal(
        b: Board,
        #[map(|s: Selector| s.try_select(#b.actions()))] a: Option<Action>,
    ) {
        if let Some(a) = a {
            let mut b = b.clone();
            assert!(b.execute(a).is_ok());
        }
    }

    #[proptest]
    fn successful_action_appends_one_turn(
        b: Board,
        #[map(|s: Selector| s.try_select(#b.actions()))] a: Option<Action>,
    ) {
        if let Some(a) = a {
            let mut next = b.clone();
            let no = next.execute(a)?.no;
            assert_eq!(no, b.turns().len() + 1);
            assert_eq!(next.turns().len(), b.turns().len() + 1);
        }
    }

    #[proptest]
    fn illegal_move_leaves_the_board_untouched(
        b: Board,
        #[filter(!#b.moves().contains(&#m))] m: Move,
    ) {
        let mut next = b.clone();
        assert!(next.play(m).is_err());
        assert_eq!(next, b);
    }

    #[proptest]
    fn illegal_release_leaves_the_board_untouched(
        b: Board,
        s: Square,
        #[filter(!#b.actions().contains(&Action::Release(#s, #c)))] c: Cell,
    ) {
        let mut next = b.clone();
        assert!(next.release(s, c).is_err());
        assert_eq!(next, b);
    }

    #[test]
    fn moving_from_a_vacant_square_is_illegal() {
        let mut b = Board::default();
        let m = Move(sq(4, 4), sq(4, 3));
        assert_eq!(b.play(m).err(), Some(IllegalMove::Vacant(sq(4, 4))));
    }

    #[test]
    fn players_can_only_move_their_own_pieces() {
        let mut b = Board::default();
        let m = Move(sq(0, 1), sq(0, 2));
        assert_eq!(b.play(m).err(), Some(IllegalMove::OutOfTurn(Color::Black)));
    }

    #[test]
    fn pieces_cannot_take_their_own_color() {
        let mut b = Board::default();
        let m = Move(sq(3, 7), sq(3, 6));
        assert_eq!(b.play(m).err(), Some(IllegalMove::Protected(sq(3, 6))));
    }

    #[test]
    fn fish_cannot_move_backwards() {
        let mut b = Board::default();
        b.play(Move(sq(0, 6), sq(0, 5))).unwrap();
        b.play(Move(sq(0, 1), sq(0, 2))).unwrap();

        let m = Move(sq(0, 5), sq(0, 6));
        assert_eq!(b.play(m).err(), Some(IllegalMove::Unreachable(sq(0, 5), sq(0, 6))));
    }

    #[test]
    fn bear_can_be_placed_once_by_either_side() {
        let mut b = Board::default();

        let t = b.place_bear(sq(4, 4)).unwrap();
        assert!(t.is_bear);
        assert_eq!(t.to_piece.as_ref().map(|p| p.kind), Some(Role::Bear));

        assert_eq!(b.turn(), Color::Black);
        assert!(!b.has_default_bear());
        assert_eq!(b.place_bear(sq(4, 3)).err(), Some(IllegalMove::BearPlaced));
        assert_eq!(b.piece_on(sq(4, 4)).map(Piece::color), Some(Color::Neutral));
    }

    #[test]
    fn bear_cannot_be_placed_on_an_occupied_square() {
        let mut b = Board::default();
        assert_eq!(b.place_bear(sq(0, 0)).err(), Some(IllegalMove::Occupied(sq(0, 0))));
        assert!(b.has_default_bear());
    }

    #[test]
    fn bear_may_be_moved_by_either_side() {
        let mut b = Board::default();
        b.place_bear(sq(4, 4)).unwrap();
        assert!(b.play(Move(sq(4, 4), sq(4, 3))).is_ok());
        assert!(b.play(Move(sq(4, 3), sq(4, 4))).is_ok());
    }

    #[test]
    fn captured_pieces_are_kept_in_order() {
        let mut b = Board::empty();
        b.spawn(Color::White, Role::Queen, sq(0, 7)).unwrap();
        b.spawn(Color::Black, Role::Fish, sq(0, 3)).unwrap();
        b.spawn(Color::Black, Role::Crow, sq(7, 0)).unwrap();
        b.spawn(Color::Black, Role::Elephant, sq(4, 7)).unwrap();

        b.play(Move(sq(0, 7), sq(0, 3))).unwrap();
        b.play(Move(sq(7, 0), sq(6, 0))).unwrap();
        b.play(Move(sq(0, 3), sq(4, 7))).unwrap();

        let taken: Vec<_> = b.taken().map(Piece::role).collect();
        assert_eq!(taken, [Role::Fish, Role::Elephant]);
    }
}
