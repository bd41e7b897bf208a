use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Plays and searches monkey chess games through JSON snapshots.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity of the rules engine and of this binary.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Verbosity of the search, same as `--verbosity` if unset.
    #[clap(long)]
    search_verbosity: Option<Level>,

    /// Disable colored logs.
    #[clap(long)]
    no_color: bool,

    /// Defaults to printing a fresh game.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let search = self.search_verbosity.unwrap_or(self.verbosity);

        // Snapshots go to stdout, so logs are kept on stderr.
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib::chess", self.verbosity)
            .with_target("lib::search", search)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_ansi(!self.no_color)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}
