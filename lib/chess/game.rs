use crate::chess::{Action, Board, Cell, Coordinates, Feedback, IllegalMove, Move, Snapshot};
use crate::chess::{SnapshotError, Square};
use tracing::warn;

/// A game session, driven through raw coordinates and cell indices.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Starts a game from the initial setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a game from a [`Snapshot`].
    pub fn from_snapshot(s: Snapshot) -> Result<Self, SnapshotError> {
        Ok(Game { board: s.try_into()? })
    }

    /// The current [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves the piece on `from` to `to`.
    pub fn play(&mut self, from: Coordinates, to: Coordinates) -> Result<Feedback, IllegalMove> {
        let m = Move(Square::try_from(from)?, Square::try_from(to)?);
        self.execute(Action::Move(m))
    }

    /// Lets the monkey on `at` rescue the king held in the prison cell at `index`.
    pub fn release(&mut self, at: Coordinates, index: usize) -> Result<Feedback, IllegalMove> {
        let action = Action::Release(Square::try_from(at)?, Cell::try_from(index)?);
        self.execute(action)
    }

    /// Places the bear on `to`.
    pub fn place_bear(&mut self, to: Coordinates) -> Result<Feedback, IllegalMove> {
        self.execute(Action::PlaceBear(Square::try_from(to)?))
    }

    /// Executes an [`Action`] if legal, otherwise returns the reason why not.
    pub fn execute(&mut self, action: Action) -> Result<Feedback, IllegalMove> {
        match self.board.execute(action) {
            Ok(t) => {
                let sound = t.sound();
                Ok(Feedback {
                    sound,
                    winner: self.board.winner(),
                })
            }

            Err(e) => {
                warn!(%action, %e, "rejected action");
                Err(e)
            }
        }
    }
}
