//! Built-in spinner catalog.
//!
//! The hand-written spinners are literal braille strings; the rest are drawn
//! on dot grids and encoded once, the first time the catalog is used.

use std::f64::consts::PI;
use std::sync::OnceLock;

use super::types::Spinner;
use crate::braille::{Grid, encode};
use crate::error::{Error, Result};

static CATALOG: OnceLock<Vec<(&'static str, Spinner)>> = OnceLock::new();

/// All built-in spinners in display order.
pub fn all() -> &'static [(&'static str, Spinner)] {
    CATALOG.get_or_init(build)
}

/// Names of all built-in spinners in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    all().iter().map(|(name, _)| *name)
}

/// Look up a built-in spinner by name.
pub fn get(name: &str) -> Result<&'static Spinner> {
    all()
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, spinner)| spinner)
        .ok_or_else(|| Error::UnknownSpinner {
            name: name.to_string(),
            available: names().collect::<Vec<_>>().join(", "),
        })
}

fn build() -> Vec<(&'static str, Spinner)> {
    vec![
        (
            "braille",
            literal(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"], 80),
        ),
        (
            "braillewave",
            literal(
                &[
                    "⠁⠂⠄⡀", "⠂⠄⡀⢀", "⠄⡀⢀⠠", "⡀⢀⠠⠐", "⢀⠠⠐⠈", "⠠⠐⠈⠁", "⠐⠈⠁⠂", "⠈⠁⠂⠄",
                ],
                100,
            ),
        ),
        (
            "dna",
            literal(
                &[
                    "⠋⠉⠙⠚", "⠉⠙⠚⠒", "⠙⠚⠒⠂", "⠚⠒⠂⠂", "⠒⠂⠂⠒", "⠂⠂⠒⠲", "⠂⠒⠲⠴", "⠒⠲⠴⠤",
                    "⠲⠴⠤⠄", "⠴⠤⠄⠋", "⠤⠄⠋⠉", "⠄⠋⠉⠙",
                ],
                80,
            ),
        ),
        ("scan", generated(scan(), 70)),
        ("rain", generated(rain(), 100)),
        ("scanline", generated(scan_line(), 120)),
        ("pulse", generated(pulse(), 180)),
        ("snake", generated(snake(), 80)),
        ("sparkle", generated(sparkle(), 150)),
        ("cascade", generated(cascade(), 60)),
        ("columns", generated(columns(), 60)),
        ("orbit", generated(orbit(), 100)),
        ("breathe", generated(breathe(), 100)),
        ("waverows", generated(wave_rows(), 90)),
        ("checkerboard", generated(checkerboard(), 250)),
        ("helix", generated(helix(), 80)),
        ("fillsweep", generated(fill_sweep(), 100)),
        ("diagswipe", generated(diagonal_swipe(), 60)),
    ]
}

fn literal(frames: &[&str], interval_ms: u64) -> Spinner {
    Spinner::prebuilt(frames.iter().map(|f| f.to_string()).collect(), interval_ms)
}

fn generated(grids: Vec<Grid>, interval_ms: u64) -> Spinner {
    Spinner::prebuilt(grids.iter().map(encode).collect(), interval_ms)
}

fn full(rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols);
    grid.fill();
    grid
}

/// Map a sine value in `[-1, 1]` onto a row index in `0..height`.
fn sine_row(value: f64, height: usize) -> usize {
    ((value + 1.0) / 2.0 * (height - 1) as f64).round_ties_even() as usize
}

fn scan() -> Vec<Grid> {
    const W: i32 = 8;
    (-1..=W)
        .map(|pos| Grid::from_fn(4, W as usize, |_, c| c as i32 == pos || c as i32 == pos - 1))
        .collect()
}

fn rain() -> Vec<Grid> {
    const W: usize = 8;
    const H: usize = 4;
    const OFFSETS: [usize; W] = [0, 3, 1, 5, 2, 7, 4, 6];
    (0..12)
        .map(|f| {
            let mut grid = Grid::new(H, W);
            for (c, offset) in OFFSETS.iter().enumerate() {
                let row = (f + offset) % (H + 2);
                if row < H {
                    grid.set(row, c, true);
                }
            }
            grid
        })
        .collect()
}

fn scan_line() -> Vec<Grid> {
    [0, 1, 2, 3, 2, 1]
        .into_iter()
        .map(|row| {
            let mut grid = Grid::new(4, 6);
            for c in 0..6 {
                grid.set(row, c, true);
                if row > 0 {
                    grid.set(row - 1, c, c % 2 == 0);
                }
            }
            grid
        })
        .collect()
}

fn pulse() -> Vec<Grid> {
    const W: usize = 6;
    const H: usize = 4;
    let cx = W as f64 / 2.0 - 0.5;
    let cy = H as f64 / 2.0 - 0.5;
    [0.5, 1.2, 2.0, 3.0, 3.5]
        .into_iter()
        .map(|radius: f64| {
            Grid::from_fn(H, W, |r, c| {
                let dist = ((c as f64 - cx).powi(2) + (r as f64 - cy).powi(2)).sqrt();
                (dist - radius).abs() < 0.9
            })
        })
        .collect()
}

fn snake() -> Vec<Grid> {
    const W: usize = 4;
    const H: usize = 4;
    let path: Vec<(usize, usize)> = (0..H)
        .flat_map(|r| {
            let cols: Vec<usize> = if r % 2 == 0 {
                (0..W).collect()
            } else {
                (0..W).rev().collect()
            };
            cols.into_iter().map(move |c| (r, c))
        })
        .collect();
    let len = path.len();
    (0..len)
        .map(|i| {
            let mut grid = Grid::new(H, W);
            for tail in 0..4 {
                let (r, c) = path[(i + len - tail) % len];
                grid.set(r, c, true);
            }
            grid
        })
        .collect()
}

fn sparkle() -> Vec<Grid> {
    const PATTERNS: [[u8; 32]; 6] = [
        [
            1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0,
            1, 0, 0,
        ],
        [
            0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1,
            0, 1, 0,
        ],
        [
            0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0,
            0, 0, 1,
        ],
        [
            1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0,
            0, 1, 0,
        ],
        [
            0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0,
            1, 0, 1,
        ],
        [
            0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1,
            0, 0, 0,
        ],
    ];
    PATTERNS
        .iter()
        .map(|pattern| Grid::from_fn(4, 8, |r, c| pattern[r * 8 + c] == 1))
        .collect()
}

fn cascade() -> Vec<Grid> {
    const W: i32 = 8;
    const H: i32 = 4;
    (-2..W + H)
        .map(|offset| {
            Grid::from_fn(H as usize, W as usize, |r, c| {
                let diag = (r + c) as i32;
                diag == offset || diag == offset - 1
            })
        })
        .collect()
}

fn columns() -> Vec<Grid> {
    const W: usize = 6;
    const H: usize = 4;
    let mut frames = Vec::new();
    for col in 0..W {
        for fill_to in (0..H).rev() {
            frames.push(Grid::from_fn(H, W, |r, c| {
                c < col || (c == col && r >= fill_to)
            }));
        }
    }
    frames.push(full(H, W));
    frames.push(Grid::new(H, W));
    frames
}

fn orbit() -> Vec<Grid> {
    const PATH: [(usize, usize); 8] = [
        (0, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (3, 0),
        (2, 0),
        (1, 0),
    ];
    (0..PATH.len())
        .map(|i| {
            let mut grid = Grid::new(4, 2);
            let (r, c) = PATH[i];
            grid.set(r, c, true);
            let (tr, tc) = PATH[(i + PATH.len() - 1) % PATH.len()];
            grid.set(tr, tc, true);
            grid
        })
        .collect()
}

fn breathe() -> Vec<Grid> {
    const STAGES: [&[(usize, usize)]; 9] = [
        &[],
        &[(1, 0)],
        &[(0, 1), (2, 0)],
        &[(0, 0), (1, 1), (3, 0)],
        &[(0, 0), (1, 1), (2, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 1), (2, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 0), (2, 1), (3, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (3, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)],
    ];
    // Inhale then exhale, without repeating the fullest stage.
    STAGES
        .iter()
        .chain(STAGES.iter().rev().skip(1))
        .map(|dots| {
            let mut grid = Grid::new(4, 2);
            for &(r, c) in dots.iter() {
                grid.set(r, c, true);
            }
            grid
        })
        .collect()
}

fn wave_rows() -> Vec<Grid> {
    const W: usize = 8;
    const H: usize = 4;
    (0..16)
        .map(|f| {
            let mut grid = Grid::new(H, W);
            for c in 0..W {
                let phase = f as f64 - c as f64 * 0.5;
                let row = sine_row((phase * 0.8).sin(), H);
                grid.set(row, c, true);
                if row > 0 {
                    grid.set(row - 1, c, (f + c) % 3 == 0);
                }
            }
            grid
        })
        .collect()
}

fn checkerboard() -> Vec<Grid> {
    (0..4)
        .map(|phase| {
            Grid::from_fn(4, 6, |r, c| {
                if phase < 2 {
                    (r + c + phase) % 2 == 0
                } else {
                    (r + c + phase) % 3 == 0
                }
            })
        })
        .collect()
}

fn helix() -> Vec<Grid> {
    const W: usize = 8;
    const H: usize = 4;
    (0..16)
        .map(|f| {
            let mut grid = Grid::new(H, W);
            for c in 0..W {
                let phase = (f + c) as f64 * (PI / 4.0);
                grid.set(sine_row(phase.sin(), H), c, true);
                grid.set(sine_row((phase + PI).sin(), H), c, true);
            }
            grid
        })
        .collect()
}

fn fill_sweep() -> Vec<Grid> {
    const W: usize = 4;
    const H: usize = 4;
    let mut frames: Vec<Grid> = (0..H)
        .rev()
        .map(|row| Grid::from_fn(H, W, |r, _| r >= row))
        .collect();
    frames.push(full(H, W));
    frames.push(full(H, W));
    frames.extend((0..H).map(|row| Grid::from_fn(H, W, |r, _| r > row)));
    frames.push(Grid::new(H, W));
    frames
}

fn diagonal_swipe() -> Vec<Grid> {
    const W: usize = 4;
    const H: usize = 4;
    const MAX_DIAG: usize = W + H - 2;
    let mut frames: Vec<Grid> = (0..=MAX_DIAG)
        .map(|d| Grid::from_fn(H, W, |r, c| r + c <= d))
        .collect();
    frames.push(full(H, W));
    frames.extend((0..=MAX_DIAG).map(|d| Grid::from_fn(H, W, |r, c| r + c > d)));
    frames.push(Grid::new(H, W));
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braille::decode;

    const ALL_NAMES: [&str; 18] = [
        "braille",
        "braillewave",
        "dna",
        "scan",
        "rain",
        "scanline",
        "pulse",
        "snake",
        "sparkle",
        "cascade",
        "columns",
        "orbit",
        "breathe",
        "waverows",
        "checkerboard",
        "helix",
        "fillsweep",
        "diagswipe",
    ];

    #[test]
    fn test_exports_all_names_in_order() {
        assert_eq!(names().collect::<Vec<_>>(), ALL_NAMES);
    }

    #[test]
    fn test_every_entry_passes_validation() {
        for (name, spinner) in all() {
            let rebuilt = Spinner::new(spinner.frames().iter().cloned(), spinner.interval_ms());
            assert_eq!(rebuilt.as_ref(), Ok(spinner), "{name} failed validation");
        }
    }

    #[test]
    fn test_every_frame_roundtrips() {
        for (name, spinner) in all() {
            for frame in spinner.frames() {
                assert_eq!(&encode(&decode(frame)), frame, "{name} frame {frame:?}");
            }
        }
    }

    #[test]
    fn test_unknown_name_lists_available() {
        let err = get("nope").unwrap_err();
        let Error::UnknownSpinner { name, available } = &err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(name, "nope");
        assert!(available.starts_with("braille, braillewave, dna"));
        assert!(err.to_string().contains("Unknown spinner: nope"));
    }

    #[test]
    fn test_known_frame_counts() {
        let counts = [
            ("braille", 10),
            ("scan", 10),
            ("rain", 12),
            ("scanline", 6),
            ("pulse", 5),
            ("snake", 16),
            ("sparkle", 6),
            ("cascade", 14),
            ("columns", 26),
            ("orbit", 8),
            ("breathe", 17),
            ("helix", 16),
            ("fillsweep", 11),
            ("diagswipe", 16),
        ];
        for (name, count) in counts {
            assert_eq!(get(name).unwrap().frames().len(), count, "{name}");
        }
    }

    #[test]
    fn test_breathe_starts_empty_and_peaks_full() {
        let frames = get("breathe").unwrap().frames();
        assert_eq!(frames[0], "\u{2800}");
        assert_eq!(frames[8], "\u{28FF}");
        assert_eq!(frames[16], "\u{2800}");
    }

    #[test]
    fn test_scan_sweeps_a_two_column_bar() {
        let frames = get("scan").unwrap().frames();
        assert_eq!(frames[0], "\u{2800}\u{2800}\u{2800}\u{2800}");
        assert_eq!(frames[1], "\u{2847}\u{2800}\u{2800}\u{2800}");
        assert_eq!(frames[2], "\u{28FF}\u{2800}\u{2800}\u{2800}");
        assert_eq!(frames[9], "\u{2800}\u{2800}\u{2800}\u{28B8}");
    }

    #[test]
    fn test_helix_has_two_strands_per_column() {
        for frame in get("helix").unwrap().frames() {
            let grid = decode(frame);
            for c in 0..grid.cols() {
                let dots = (0..grid.rows()).filter(|&r| grid.get(r, c)).count();
                assert!((1..=2).contains(&dots), "column {c} of {frame:?}");
            }
        }
    }
}
