use crate::chess::{Board, Cell, Color, Kind, Piece, PieceId, Place, Role, Square, Turn};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The attributes specific to some kinds of pieces.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_banana: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_king: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub king: Option<Box<PieceSnapshot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_promoted: Option<bool>,
}

/// A self-contained description of a piece.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct PieceSnapshot {
    #[serde(alias = "type")]
    pub kind: Role,
    pub color: Color,
    pub position: Square,
    #[serde(default)]
    pub attributes: Attributes,
}

/// A self-contained description of a [`Board`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub has_default_bear: bool,
    pub is_over: bool,
    pub winner: Option<Color>,
    pub turns: Vec<Turn>,
    pub pieces: Vec<Option<PieceSnapshot>>,
    pub prisons: [Option<PieceSnapshot>; 4],
}

/// The reason why a [`Snapshot`] cannot be restored.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    #[display(fmt = "malformed snapshot")]
    Json(serde_json::Error),
    #[display(fmt = "more than one piece on square `{_0}`")]
    #[from(ignore)]
    Occupied(#[error(not(source))] Square),
    #[display(fmt = "a `{_0}` cannot be held in prison")]
    #[from(ignore)]
    NotImprisonable(#[error(not(source))] Role),
    #[display(fmt = "a monkey cannot carry a `{_0}`")]
    #[from(ignore)]
    NotAKing(#[error(not(source))] Role),
    #[display(fmt = "a `{_0}` cannot carry a king")]
    #[from(ignore)]
    NotAMonkey(#[error(not(source))] Role),
    #[display(fmt = "turn number `{_0}` is out of sequence")]
    #[from(ignore)]
    TurnOutOfSequence(#[error(not(source))] usize),
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serde_json::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Snapshot {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Board {
    /// Describes the piece identified by a [`PieceId`], including any king it carries.
    pub fn describe(&self, id: PieceId) -> PieceSnapshot {
        let piece = &self[id];

        let attributes = match piece.kind() {
            Kind::King { banana } => Attributes {
                has_banana: Some(banana),
                ..Attributes::default()
            },

            Kind::Monkey { banana, king } => Attributes {
                has_banana: Some(banana),
                has_king: Some(king.is_some()),
                king: king.map(|k| Box::new(self.describe(k))),
                ..Attributes::default()
            },

            Kind::Fish { promoted } => Attributes {
                is_promoted: Some(promoted),
                ..Attributes::default()
            },

            _ => Attributes::default(),
        };

        PieceSnapshot {
            kind: piece.role(),
            color: piece.color(),
            position: piece.square(),
            attributes,
        }
    }

    /// Describes this board.
    pub fn snapshot(&self) -> Snapshot {
        let mut prisons: [Option<PieceSnapshot>; 4] = Default::default();
        for (cell, id) in self.prison.iter() {
            prisons[cell.index()] = id.map(|id| self.describe(id));
        }

        Snapshot {
            has_default_bear: self.default_bear,
            is_over: self.over,
            winner: self.winner,
            turns: self.turns.clone(),
            pieces: self
                .pieces
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_on_board())
                .map(|(i, _)| Some(self.describe(PieceId::new(i))))
                .collect(),
            prisons,
        }
    }

    /// Adds the piece described by a [`PieceSnapshot`] to the arena.
    fn restore(&mut self, s: PieceSnapshot, place: Place) -> Result<PieceId, SnapshotError> {
        if place == Place::Board && self.id_on(s.position).is_some() {
            return Err(SnapshotError::Occupied(s.position));
        }

        let attrs = s.attributes;
        match &attrs.king {
            Some(_) if s.kind != Role::Monkey => return Err(SnapshotError::NotAMonkey(s.kind)),
            Some(k) if k.kind != Role::King => return Err(SnapshotError::NotAKing(k.kind)),
            _ => {}
        }

        let kind = match s.kind {
            Role::King => Kind::King {
                banana: attrs.has_banana.unwrap_or(true),
            },

            Role::Monkey => Kind::Monkey {
                banana: attrs.has_banana.unwrap_or(false),
                king: None,
            },

            Role::Fish => Kind::Fish {
                promoted: attrs.is_promoted.unwrap_or(false),
            },

            r => r.into(),
        };

        let id = self.insert(Piece {
            color: s.color,
            kind,
            square: s.position,
            place,
        });

        if let Some(k) = attrs.king {
            let king = self.restore(*k, Place::Carried(id))?;
            if let Kind::Monkey { king: carried, .. } = &mut self.pieces[id.index()].kind {
                *carried = Some(king);
            }
        }

        Ok(id)
    }
}

impl TryFrom<Snapshot> for Board {
    type Error = SnapshotError;

    fn try_from(s: Snapshot) -> Result<Self, Self::Error> {
        if let Some((_, t)) = s.turns.iter().enumerate().find(|(i, t)| t.no != i + 1) {
            return Err(SnapshotError::TurnOutOfSequence(t.no));
        }

        let mut board = Board {
            turns: s.turns,
            default_bear: s.has_default_bear,
            over: s.is_over,
            winner: s.winner,
            ..Board::empty()
        };

        for p in s.pieces.into_iter().flatten() {
            board.restore(p, Place::Board)?;
        }

        for (cell, p) in Cell::iter().zip(s.prisons) {
            if let Some(p) = p {
                if !p.kind.is_imprisonable() {
                    return Err(SnapshotError::NotImprisonable(p.kind));
                }

                let id = board.restore(p, Place::Prison(cell))?;
                board.prison.set(cell, Some(id));
            }
        }

        Ok(board)
    }
}

impl FromStr for Board {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Snapshot>()?.try_into()
    }
}
