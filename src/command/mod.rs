pub mod list;
pub mod preview;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Stopped early by Ctrl-C
    Interrupted,
}

impl Outcome {
    fn from_interrupted(interrupted: bool) -> Self {
        if interrupted {
            Outcome::Interrupted
        } else {
            Outcome::Completed
        }
    }
}

pub fn run(cli: Cli) -> Result<Outcome> {
    let config = Config::load()?;
    let settings = cli.resolve(&config);

    if cli.list {
        list::run(settings.scale)?;
        return Ok(Outcome::Completed);
    }

    match (&settings.name, &cli.text) {
        (Some(name), Some(text)) => preview::labelled(name, text, &settings),
        (None, Some(text)) => preview::labelled("braille", text, &settings),
        (Some(name), None) => preview::run(name, &settings),
        (None, None) => preview::gallery(&settings),
    }
}
