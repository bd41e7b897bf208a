use derive_more::{Display, Error};
use std::fmt;
use std::ops::{Add, Sub};

/// The reason why a value is not a valid [`Score`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum InvalidScore {
    #[display(fmt = "score `{_0}` is outside of the ordinary band")]
    OutOfBand(#[error(not(source))] i64),
    #[display(fmt = "mate distance `{_0}` is out of range")]
    MateOutOfRange(#[error(not(source))] i32),
}

/// The minimax score, from White's perspective.
///
/// Ordinary scores lie strictly within `(-CEILING, CEILING)`, mate scores lie beyond,
/// with faster mates being more extreme.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Score(
    #[cfg_attr(test, strategy(-Score::CEILING - Score::HORIZON as i64 + 1..Score::CEILING + Score::HORIZON as i64))]
    i64,
);

impl Score {
    /// The magnitude no ordinary score reaches.
    pub const CEILING: i64 = 1 << 32;

    /// The farthest mate a score can encode.
    pub const HORIZON: i32 = 1000;

    /// A bound below every score.
    pub const MIN: Self = Score(-Self::CEILING - Self::HORIZON as i64);

    /// A bound above every score.
    pub const MAX: Self = Score(Self::CEILING + Self::HORIZON as i64);

    /// Constructs an ordinary [`Score`].
    pub fn new(value: i64) -> Result<Self, InvalidScore> {
        if (-Self::CEILING + 1..Self::CEILING).contains(&value) {
            Ok(Score(value))
        } else {
            Err(InvalidScore::OutOfBand(value))
        }
    }

    /// Constructs the [`Score`] of a mate in `distance` plies.
    ///
    /// Positive distances are mates by White, negative ones are mates by Black.
    pub fn mate(distance: i32) -> Result<Self, InvalidScore> {
        if distance == 0 || !(-Self::HORIZON..=Self::HORIZON).contains(&distance) {
            Err(InvalidScore::MateOutOfRange(distance))
        } else if distance > 0 {
            Ok(Score(Self::CEILING + (Self::HORIZON - distance) as i64))
        } else {
            Ok(Score(-Self::CEILING - (Self::HORIZON + distance) as i64))
        }
    }

    /// The raw value of this score.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// The signed distance to mate, if this is a mate score.
    pub fn mate_distance(&self) -> Option<i32> {
        if self.0 >= Self::CEILING {
            Some((Self::CEILING + Self::HORIZON as i64 - self.0) as i32)
        } else if self.0 <= -Self::CEILING {
            Some((-Self::CEILING - Self::HORIZON as i64 - self.0) as i32)
        } else {
            None
        }
    }
}

impl Add<i64> for Score {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Score(self.0 + rhs).clamp(Self::MIN, Self::MAX)
    }
}

impl Sub<i64> for Score {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Score(self.0 - rhs).clamp(Self::MIN, Self::MAX)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mate_distance() {
            Some(d) => write!(f, "#{d:+}"),
            None => write!(f, "{:+}", self.0),
        }
    }
}
