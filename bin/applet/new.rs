use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Game;
use tracing::{debug, instrument};

/// Prints the snapshot of a fresh game.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct New {}

impl New {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = Game::new();
        debug!(board = %game.board());
        Io::default().send(game.snapshot())?;
        Ok(())
    }
}
