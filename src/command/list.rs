use anyhow::Result;
use console::style;
use dotspin::{catalog, scale};

/// Width of the name column
const NAME_WIDTH: usize = 16;

pub fn run(factor: usize) -> Result<()> {
    print!("{}", render(factor));
    Ok(())
}

/// One row per spinner: the name, then its first frame. Extra frame lines are
/// indented under the first.
fn render(factor: usize) -> String {
    let mut out = String::new();
    for (name, spinner) in catalog::all() {
        let spinner = scale(spinner, factor);
        let mut lines = spinner.frames()[0].lines();
        let first = lines.next().unwrap_or_default();
        let padded = format!("{name:<NAME_WIDTH$}");
        out.push_str(&format!("  {} {first}\n", style(padded).bold()));
        for line in lines {
            out.push_str(&format!("  {:<NAME_WIDTH$} {line}\n", ""));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_spinner() {
        let out = console::strip_ansi_codes(&render(1)).into_owned();
        assert_eq!(out.lines().count(), catalog::all().len());
        assert!(out.starts_with("  braille          \u{280B}\n"));
        assert!(out.contains("  diagswipe        "));
    }

    #[test]
    fn test_scaled_frames_are_indented() {
        let out = console::strip_ansi_codes(&render(2)).into_owned();
        assert_eq!(out.lines().count(), catalog::all().len() * 2);
        let second = out.lines().nth(1).unwrap();
        assert!(second.starts_with(&" ".repeat(2 + NAME_WIDTH + 1)));
    }
}
