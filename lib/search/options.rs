use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Configuration for [`Minimax`][`crate::search::Minimax`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// How many plies to search ahead.
    #[cfg_attr(test, strategy(1u8..=8))]
    pub depth: u8,

    /// Seeds the choice among equally good moves.
    ///
    /// The choice is unpredictable if unset.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            depth: 2,
            seed: None,
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse search options")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_options_is_an_identity(o: Options) {
        assert_eq!(o.to_string().parse(), Ok(o));
    }

    #[test]
    fn missing_fields_take_default_values() {
        assert_eq!("(depth: 4)".parse(), Ok(Options { depth: 4, seed: None }));
        assert_eq!("()".parse(), Ok(Options::default()));
    }

    #[test]
    fn seed_is_optional() {
        assert_eq!(
            "options(seed: Some(7))".parse(),
            Ok(Options {
                depth: 2,
                seed: Some(7)
            })
        );
    }

    #[proptest]
    fn parsing_options_fails_for_unknown_fields(#[strategy("[a-c]{1,8}")] k: String) {
        assert!(format!("({k}: 1)").parse::<Options>().is_err());
    }
}
