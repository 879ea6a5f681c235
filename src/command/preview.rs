//! Timed spinner previews.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use console::{Alignment, measure_text_width, pad_str};
use dotspin::live::RESET;
use dotspin::{Color, LiveSpinner, Spinner, catalog, scale};
use tracing::info;

use super::Outcome;
use crate::cli::Settings;
use crate::interrupt;

/// Preview one spinner, labelled with its name, on stdout.
pub fn run(name: &str, settings: &Settings) -> Result<Outcome> {
    let spinner = catalog::get(name)?;
    let spinner = scale(spinner, settings.scale);
    let colorize = io::stdout().is_terminal();
    let composed = compose(name, &spinner, settings.color.filter(|_| colorize))?;

    info!(name, scale = settings.scale, "preview:start");
    if !io::stdout().is_terminal() {
        println!("{}", composed.frames()[0]);
        return Ok(Outcome::Completed);
    }

    let mut live = LiveSpinner::with_sink(composed, io::stdout());
    let interrupted = {
        let guard = live.enter().context("Failed to start preview")?;
        let interrupted = interrupt::sleep(settings.duration);
        guard.finish("").context("Failed to stop preview")?;
        interrupted
    };
    println!();
    info!(name, interrupted, "preview:done");
    Ok(Outcome::from_interrupted(interrupted))
}

/// Preview every spinner in catalog order.
pub fn gallery(settings: &Settings) -> Result<Outcome> {
    for name in catalog::names() {
        if run(name, settings)? == Outcome::Interrupted {
            return Ok(Outcome::Interrupted);
        }
    }
    Ok(Outcome::Completed)
}

/// Run a spinner on stderr with a label, finishing with a check mark.
pub fn labelled(name: &str, text: &str, settings: &Settings) -> Result<Outcome> {
    let mut live = LiveSpinner::named(name)?
        .scale(settings.scale)
        .with_color(settings.color)
        .text(text);
    let guard = live.enter().context("Failed to start spinner")?;
    let interrupted = interrupt::sleep(settings.duration);
    let symbol = if interrupted { "" } else { "\u{2713}" };
    guard.finish(symbol).context("Failed to stop spinner")?;
    Ok(Outcome::from_interrupted(interrupted))
}

/// Prefix every frame with `"  name: "`, centre each line to the widest frame
/// line and pad short frames to the tallest frame.
fn compose(name: &str, spinner: &Spinner, color: Option<Color>) -> Result<Spinner> {
    let label = format!("  {name}: ");
    let indent = " ".repeat(measure_text_width(&label));
    let split: Vec<Vec<&str>> = spinner
        .frames()
        .iter()
        .map(|frame| frame.lines().collect())
        .collect();
    let width = split
        .iter()
        .flatten()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let height = split.iter().map(Vec::len).max().unwrap_or(1).max(1);

    let frames = split.iter().map(|lines| {
        let mut out = String::new();
        for row in 0..height {
            let line = lines.get(row).copied().unwrap_or("");
            let centred = pad_str(line, width, Alignment::Center, None);
            if row > 0 {
                out.push('\n');
            }
            out.push_str(if row == 0 { &label } else { &indent });
            match color {
                Some(color) => out.push_str(&format!("{}{centred}{RESET}", color.code())),
                None => out.push_str(&centred),
            }
        }
        out
    });
    Ok(Spinner::new(frames, spinner.interval_ms())?)
}
