use crate::chess::Color;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The sound the presentation layer plays after a transition.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    #[display(fmt = "prisoner")]
    Prisoner,
    #[display(fmt = "capture")]
    Capture,
    #[display(fmt = "release")]
    Release,
    #[display(fmt = "dropped")]
    Dropped,
    #[display(fmt = "move")]
    Move,
}

/// The end of the game as seen by one of the players.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    #[display(fmt = "victory")]
    Victory,
    #[display(fmt = "defeat")]
    Defeat,
}

/// What a successful transition signals to the presentation layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Feedback {
    pub sound: Sound,
    pub winner: Option<Color>,
}

impl Feedback {
    /// The [`Verdict`] for the player of this [`Color`], if the game is over.
    pub fn verdict_for(&self, player: Color) -> Option<Verdict> {
        match self.winner? {
            w if w == player => Some(Verdict::Victory),
            _ if player == Color::Neutral => None,
            _ => Some(Verdict::Defeat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn there_is_no_verdict_while_the_game_is_on(sound: Sound, player: Color) {
        assert_eq!(Feedback { sound, winner: None }.verdict_for(player), None);
    }

    #[proptest]
    fn winner_sees_victory_and_opponent_sees_defeat(
        sound: Sound,
        #[filter(#winner != Color::Neutral)] winner: Color,
    ) {
        let f = Feedback {
            sound,
            winner: Some(winner),
        };

        assert_eq!(f.verdict_for(winner), Some(Verdict::Victory));
        assert_eq!(f.verdict_for(winner.opponent().unwrap()), Some(Verdict::Defeat));
        assert_eq!(f.verdict_for(Color::Neutral), None);
    }
}
