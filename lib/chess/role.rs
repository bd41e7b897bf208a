use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of a [`Piece`][`crate::chess::Piece`].
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Role {
    King,
    Queen,
    Crow,
    Monkey,
    Elephant,
    Fish,
    Bear,
}

impl Role {
    /// All roles.
    pub const ALL: [Role; 7] = [
        Role::King,
        Role::Queen,
        Role::Crow,
        Role::Monkey,
        Role::Elephant,
        Role::Fish,
        Role::Bear,
    ];

    /// The material value of a piece of this role.
    pub fn value(&self) -> i64 {
        match self {
            Role::King => 8,
            Role::Queen => 9,
            Role::Crow => 5,
            Role::Monkey => 4,
            Role::Elephant => 3,
            Role::Fish => 2,
            Role::Bear => 1,
        }
    }

    /// Whether a captured piece of this role goes to prison.
    pub fn is_imprisonable(&self) -> bool {
        matches!(self, Role::King | Role::Queen)
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unknown piece kind `{_0}`")]
pub struct ParseRoleError(#[error(not(source))] pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.to_string() == s)
            .ok_or_else(|| ParseRoleError(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_role_is_an_identity(r: Role) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_role_fails_for_unknown_kinds(
        #[filter(!Role::ALL.iter().any(|r| r.to_string() == #s))] s: String,
    ) {
        assert_eq!(s.parse::<Role>(), Err(ParseRoleError(s)));
    }

    #[proptest]
    fn role_serializes_as_its_name(r: Role) {
        assert_eq!(serde_json::to_string(&r)?, format!("\"{r}\""));
    }

    #[test]
    fn deserializing_unknown_kind_names_the_tag() {
        let e = serde_json::from_str::<Role>("\"Dragon\"").unwrap_err();
        assert!(e.to_string().contains("Dragon"));
    }

    #[test]
    fn only_kings_and_queens_are_imprisonable() {
        let imprisonable: Vec<_> = Role::ALL.into_iter().filter(Role::is_imprisonable).collect();
        assert_eq!(imprisonable, [Role::King, Role::Queen]);
    }

    #[test]
    fn queen_is_the_most_valuable_role() {
        assert_eq!(Role::ALL.into_iter().max_by_key(Role::value), Some(Role::Queen));
    }
}
