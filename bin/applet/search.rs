use crate::io::Io;
use anyhow::{bail, Error as Anyhow};
use clap::Parser;
use lib::chess::Board;
use lib::search::{Materialist, Minimax, Mvv, Options};
use tracing::{info, instrument};

/// Searches for the best move and prints it.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Search {
    /// The search options in RON notation, e.g. `(depth: 3, seed: Some(7))`.
    #[clap(short, long, default_value_t)]
    options: Options,

    /// Resume the game from a snapshot read from standard input.
    #[clap(short, long)]
    resume: bool,
}

impl Search {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::default();

        let board = match self.resume {
            true => io.recv_parsed::<Board>()?,
            false => Board::default(),
        };

        let minimax = Minimax::new(Materialist::new(), Mvv::new(), self.options);

        let Some(report) = minimax.search(&board)? else {
            bail!("there are no moves to search");
        };

        info!(
            best = %report.best,
            score = %report.score,
            nodes = report.nodes,
            ties = report.ties,
        );

        io.send(report.best)?;
        Ok(())
    }
}
