use crate::chess::{Bitboard, Board, Cell, Color, Role, Square};
use derive_more::{Constructor, Display};

/// A stable handle to a [`Piece`] on a [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct PieceId(usize);

impl PieceId {
    /// This id's index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A [`Role`] together with its specific attributes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    King { banana: bool },
    Queen,
    Crow,
    Monkey { banana: bool, king: Option<PieceId> },
    Elephant,
    Fish { promoted: bool },
    Bear,
}

impl Kind {
    /// This kind's [`Role`].
    pub fn role(&self) -> Role {
        match self {
            Kind::King { .. } => Role::King,
            Kind::Queen => Role::Queen,
            Kind::Crow => Role::Crow,
            Kind::Monkey { .. } => Role::Monkey,
            Kind::Elephant => Role::Elephant,
            Kind::Fish { .. } => Role::Fish,
            Kind::Bear => Role::Bear,
        }
    }
}

impl From<Role> for Kind {
    /// The attributes a freshly set up piece has.
    fn from(r: Role) -> Self {
        match r {
            Role::King => Kind::King { banana: true },
            Role::Queen => Kind::Queen,
            Role::Crow => Kind::Crow,
            Role::Monkey => Kind::Monkey {
                banana: false,
                king: None,
            },
            Role::Elephant => Kind::Elephant,
            Role::Fish => Kind::Fish { promoted: false },
            Role::Bear => Kind::Bear,
        }
    }
}

/// Where a [`Piece`] currently is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Place {
    /// On the board.
    Board,
    /// Carried by a monkey.
    Carried(PieceId),
    /// Held in a prison cell.
    Prison(Cell),
    /// Captured and out of the game.
    Taken,
}

const STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (1, 0),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, 1),
    (0, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A piece of some [`Kind`] and [`Color`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(super) color: Color,
    pub(super) kind: Kind,
    pub(super) square: Square,
    pub(super) place: Place,
}

impl Piece {
    /// Constructs a [`Piece`] standing on a [`Square`].
    pub fn new(color: Color, kind: Kind, square: Square) -> Self {
        Piece {
            color,
            kind,
            square,
            place: Place::Board,
        }
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Kind`].
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.kind.role()
    }

    /// The square this piece stands on, or last stood on if off the board.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Where this piece currently is.
    pub fn place(&self) -> Place {
        self.place
    }

    /// Whether this piece is on the board.
    pub fn is_on_board(&self) -> bool {
        self.place == Place::Board
    }

    /// The king this piece is carrying, if it's a monkey carrying one.
    pub fn carried(&self) -> Option<PieceId> {
        match self.kind {
            Kind::Monkey { king, .. } => king,
            _ => None,
        }
    }

    /// The squares this piece may move to.
    pub fn moves(&self, board: &Board) -> Bitboard {
        match self.kind {
            Kind::King { .. } => self
                .steps()
                .filter(|&sq| self.is_valid(board, sq))
                .collect(),

            Kind::Queen | Kind::Fish { promoted: true } => self.slides(board),

            Kind::Crow => Square::iter().filter(|&sq| self.is_valid(board, sq)).collect(),

            Kind::Elephant => DIAGONALS
                .into_iter()
                .filter_map(|(dx, dy)| {
                    board.piece_on(self.square.offset(dx, dy)?)?;
                    self.square.offset(2 * dx, 2 * dy)
                })
                .filter(|&sq| self.is_valid(board, sq))
                .collect(),

            Kind::Fish { promoted: false } => {
                let f = self.color.forward();

                let quiet = [(0, f), (-1, 0), (1, 0)]
                    .into_iter()
                    .filter_map(|(dx, dy)| self.square.offset(dx, dy))
                    .filter(|&sq| board.piece_on(sq).is_none());

                let captures = self
                    .diagonals_forward()
                    .filter(|&sq| board.piece_on(sq).is_some_and(|p| p.color != self.color));

                quiet.chain(captures).collect()
            }

            Kind::Monkey { .. } => {
                let steps: Bitboard = self
                    .steps()
                    .filter(|&sq| board.piece_on(sq).is_none())
                    .collect();

                steps | self.jumps(board)
            }

            Kind::Bear => self
                .steps()
                .filter(|&sq| board.piece_on(sq).is_none())
                .collect(),
        }
    }

    /// Whether this piece may capture `target` from where it stands.
    pub fn can_take(&self, board: &Board, target: &Piece) -> bool {
        if target.color == self.color {
            return false;
        }

        match self.kind {
            Kind::Bear => false,
            Kind::Monkey { .. } => self.jumps(board).contains(target.square),
            Kind::Fish { promoted: false } => self.diagonals_forward().any(|sq| sq == target.square),
            Kind::Crow => self.square.is_adjacent(target.square) && self.is_avenging(board, target),
            _ => true,
        }
    }

    /// Whether the last turn captured a piece of this color on the square `target` now occupies.
    fn is_avenging(&self, board: &Board, target: &Piece) -> bool {
        board.last_turn().is_some_and(|t| {
            t.took_piece
                && t.to == Some(target.square)
                && t.to_piece.as_ref().is_some_and(|p| p.color == self.color)
        })
    }

    /// The squares a monkey reaches by chains of jumps over adjacent pieces.
    pub fn jumps(&self, board: &Board) -> Bitboard {
        let mut visited = self.square.bitboard();
        let mut found = Bitboard::empty();
        let mut stack = vec![self.square];

        while let Some(sq) = stack.pop() {
            for (dx, dy) in STEPS {
                let (Some(over), Some(land)) = (sq.offset(dx, dy), sq.offset(2 * dx, 2 * dy)) else {
                    continue;
                };

                if visited.contains(land) || board.piece_on(over).is_none() {
                    continue;
                }

                match board.piece_on(land) {
                    None => {
                        visited = visited.with(land);
                        found = found.with(land);
                        stack.push(land);
                    }

                    Some(p) if p.color != self.color => {
                        visited = visited.with(land);
                        found = found.with(land);
                    }

                    Some(_) => {}
                }
            }
        }

        found
    }

    fn steps(&self) -> impl Iterator<Item = Square> + '_ {
        STEPS
            .into_iter()
            .filter_map(|(dx, dy)| self.square.offset(dx, dy))
    }

    fn diagonals_forward(&self) -> impl Iterator<Item = Square> + '_ {
        let f = self.color.forward();
        [(-1, f), (1, f)]
            .into_iter()
            .filter_map(|(dx, dy)| self.square.offset(dx, dy))
    }

    fn slides(&self, board: &Board) -> Bitboard {
        let mut bb = Bitboard::empty();

        for (dx, dy) in STEPS {
            let mut sq = self.square;
            while let Some(next) = sq.offset(dx, dy) {
                match board.piece_on(next) {
                    None => bb = bb.with(next),
                    Some(p) => {
                        if self.can_take(board, p) {
                            bb = bb.with(next);
                        }

                        break;
                    }
                }

                sq = next;
            }
        }

        bb
    }

    fn is_valid(&self, board: &Board, sq: Square) -> bool {
        match board.piece_on(sq) {
            None => true,
            Some(p) => self.can_take(board, p),
        }
    }
}
