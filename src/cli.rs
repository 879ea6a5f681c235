use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dotspin::Color;

use crate::config::Config;

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

#[derive(Parser, Debug)]
#[command(
    name = "dotspin",
    version,
    about = "Preview Unicode braille spinner animations"
)]
pub struct Cli {
    /// Spinner name to preview (cycles through all spinners when omitted)
    pub name: Option<String>,

    /// List available spinners
    #[arg(short, long)]
    pub list: bool,

    /// Preview duration in seconds
    #[arg(short, long, value_parser = parse_duration)]
    pub duration: Option<Duration>,

    /// Colorize the preview
    #[arg(short, long, value_enum)]
    pub color: Option<Color>,

    /// Scale factor for bigger rendering
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub scale: Option<u8>,

    /// Run the spinner with a label, the way a program would
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Flags merged with config defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub name: Option<String>,
    pub duration: Duration,
    pub color: Option<Color>,
    pub scale: usize,
}

impl Cli {
    pub fn resolve(&self, config: &Config) -> Settings {
        Settings {
            name: self.name.clone().or_else(|| config.spinner.clone()),
            duration: self
                .duration
                .or_else(|| config.duration())
                .unwrap_or(DEFAULT_DURATION),
            color: self
                .color
                .or_else(|| config.color.as_deref().and_then(Color::from_name)),
            scale: usize::from(self.scale.or(config.scale).unwrap_or(1)),
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration> {
    let secs: f64 = s.parse()?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| anyhow::anyhow!("duration must be a non-negative number of seconds"))
}
