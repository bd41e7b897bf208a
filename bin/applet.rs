use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod new;
mod play;
mod search;

#[derive(From, Subcommand)]
pub enum Applet {
    New(new::New),
    Play(play::Play),
    Search(search::Search),
}

impl Default for Applet {
    fn default() -> Self {
        new::New::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::New(a) => a.execute(),
            Applet::Play(a) => a.execute(),
            Applet::Search(a) => a.execute(),
        }
    }
}
