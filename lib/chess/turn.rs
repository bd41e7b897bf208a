use crate::chess::{PieceSnapshot, Sound, Square};
use serde::{Deserialize, Serialize};

/// The record of a transition applied to a [`Board`][`crate::chess::Board`].
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    /// The position of this turn in the log, starting at `1`.
    pub no: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Square>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Square>,
    /// The piece that moved, as it stood after reaching its destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_piece: Option<PieceSnapshot>,
    /// The piece that was captured or placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_piece: Option<PieceSnapshot>,
    #[serde(default)]
    pub is_bear: bool,
    #[serde(default)]
    pub took_piece: bool,
    #[serde(default)]
    pub rescued_king: bool,
    #[serde(default)]
    pub dropped_king: bool,
}

impl Turn {
    /// Whether this turn sent a piece to prison.
    pub fn imprisoned(&self) -> bool {
        self.took_piece
            && self.to_piece.as_ref().is_some_and(|p| {
                p.kind.is_imprisonable() || p.attributes.has_king == Some(true)
            })
    }

    /// The sound that announces this turn.
    pub fn sound(&self) -> Sound {
        if self.imprisoned() {
            Sound::Prisoner
        } else if self.took_piece {
            Sound::Capture
        } else if self.rescued_king {
            Sound::Release
        } else if self.dropped_king {
            Sound::Dropped
        } else {
            Sound::Move
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Attributes, Color, Role};

    fn piece(kind: Role, attributes: Attributes) -> Option<PieceSnapshot> {
        Some(PieceSnapshot {
            kind,
            color: Color::Black,
            position: Square::new(3, 0),
            attributes,
        })
    }

    #[test]
    fn capturing_a_royal_sounds_like_a_prisoner() {
        let t = Turn {
            took_piece: true,
            to_piece: piece(Role::Queen, Attributes::default()),
            ..Default::default()
        };

        assert_eq!(t.sound(), Sound::Prisoner);
    }

    #[test]
    fn capturing_a_monkey_carrying_a_king_sounds_like_a_prisoner() {
        let t = Turn {
            took_piece: true,
            to_piece: piece(
                Role::Monkey,
                Attributes {
                    has_king: Some(true),
                    ..Default::default()
                },
            ),
            ..Default::default()
        };

        assert_eq!(t.sound(), Sound::Prisoner);
    }

    #[test]
    fn capture_takes_precedence_over_dropping_a_king() {
        let t = Turn {
            took_piece: true,
            dropped_king: true,
            to_piece: piece(Role::Fish, Attributes::default()),
            ..Default::default()
        };

        assert_eq!(t.sound(), Sound::Capture);
    }

    #[test]
    fn release_takes_precedence_over_dropping_a_king() {
        let t = Turn {
            rescued_king: true,
            dropped_king: true,
            ..Default::default()
        };

        assert_eq!(t.sound(), Sound::Release);
    }

    #[test]
    fn quiet_turns_sound_like_a_move() {
        assert_eq!(Turn::default().sound(), Sound::Move);
    }

    #[test]
    fn turn_serializes_with_camel_case_fields() {
        let t = Turn {
            no: 1,
            from: Some(Square::new(0, 6)),
            to: Some(Square::new(0, 5)),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&t).ok(),
            Some(
                r#"{"no":1,"from":{"x":0,"y":6},"to":{"x":0,"y":5},"isBear":false,"tookPiece":false,"rescuedKing":false,"droppedKing":false}"#
                    .into()
            )
        );
    }
}
