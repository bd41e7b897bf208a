use crate::io::Io;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Action, Game, Snapshot};
use tracing::{debug, info, instrument};

/// Applies actions to a game and prints the resulting snapshot.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Resume the game from a snapshot read from standard input.
    #[clap(short, long)]
    resume: bool,

    /// The actions to apply, e.g. `0,6:0,5`, `release 7,3 0` or `bear 3,3`.
    actions: Vec<Action>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::default();

        let mut game = match self.resume {
            true => Game::from_snapshot(io.recv_parsed::<Snapshot>()?)?,
            false => Game::new(),
        };

        for action in self.actions {
            let feedback = game
                .execute(action)
                .with_context(|| format!("cannot execute `{action}`"))?;

            info!(%action, sound = %feedback.sound, winner = ?feedback.winner);
        }

        debug!(board = %game.board());
        io.send(game.snapshot())?;
        Ok(())
    }
}
