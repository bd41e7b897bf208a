/// Game domain types and rules.
pub mod chess;
/// Minimax searching algorithm.
pub mod search;
