//! Nearest-neighbour upscaling of braille frames.

use std::borrow::Cow;

use super::codec::{decode, encode};
use super::grid::Grid;
use crate::spinner::Spinner;

/// Enlarge a grid so every dot becomes a `factor × factor` block.
///
/// A factor of 0 or 1 returns a copy of the input.
pub fn scale_grid(grid: &Grid, factor: usize) -> Grid {
    if factor <= 1 {
        return grid.clone();
    }
    let mut big = Grid::new(grid.rows() * factor, grid.cols() * factor);
    for (r, c) in grid.iter_set() {
        for dr in 0..factor {
            for dc in 0..factor {
                big.set(r * factor + dr, c * factor + dc, true);
            }
        }
    }
    big
}

/// Scale every frame of a spinner by `factor`, keeping its interval.
///
/// Factors of 0 and 1 borrow the input unchanged.
pub fn scale(spinner: &Spinner, factor: usize) -> Cow<'_, Spinner> {
    if factor <= 1 {
        return Cow::Borrowed(spinner);
    }
    let frames = spinner
        .frames()
        .iter()
        .map(|frame| encode(&scale_grid(&decode(frame), factor)))
        .collect();
    Cow::Owned(Spinner::prebuilt(frames, spinner.interval_ms()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spinner::catalog;

    fn single_dot_spinner(row: usize, col: usize) -> Spinner {
        let mut grid = Grid::new(4, 2);
        grid.set(row, col, true);
        Spinner::new([encode(&grid)], 100).unwrap()
    }

    #[test]
    fn test_scale_one_and_zero_borrow_input() {
        let spinner = catalog::get("braille").unwrap();
        assert!(matches!(scale(spinner, 1), Cow::Borrowed(s) if std::ptr::eq(s, spinner)));
        assert!(matches!(scale(spinner, 0), Cow::Borrowed(s) if std::ptr::eq(s, spinner)));
    }

    #[test]
    fn test_scale_preserves_frame_count_and_interval() {
        let spinner = catalog::get("helix").unwrap();
        let scaled = scale(spinner, 2);
        assert_eq!(scaled.frames().len(), spinner.frames().len());
        assert_eq!(scaled.interval_ms(), spinner.interval_ms());
    }

    #[test]
    fn test_scale_multiplies_rendered_size() {
        let spinner = catalog::get("helix").unwrap();
        for factor in [2, 3] {
            let scaled = scale(spinner, factor);
            assert_eq!(scaled.width(), spinner.width() * factor);
            assert_eq!(scaled.height(), spinner.height() * factor);
        }
    }

    #[test]
    fn test_scaled_frames_share_width() {
        let scaled = scale(catalog::get("helix").unwrap(), 2);
        let widths: Vec<usize> = scaled.frames().iter().map(|f| decode(f).cols()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_scale_outputs_multiline_frames() {
        let scaled = scale(catalog::get("helix").unwrap(), 2);
        assert!(scaled.frames()[0].contains('\n'));
    }

    #[test]
    fn test_single_dot_becomes_block() {
        let spinner = single_dot_spinner(3, 1);
        let scaled = scale(&spinner, 2);
        let grid = decode(&scaled.frames()[0]);
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.cols(), 4);
        for r in 6..8 {
            for c in 2..4 {
                assert!(grid.get(r, c), "({r}, {c}) should be set");
            }
        }
        assert_eq!(grid.count_set(), 4);
    }

    #[test]
    fn test_bottom_left_dot_stays_in_place() {
        let spinner = single_dot_spinner(3, 0);
        let scaled = scale(&spinner, 2);
        let grid = decode(&scaled.frames()[0]);
        assert!(grid.get(6, 0) && grid.get(6, 1) && grid.get(7, 0) && grid.get(7, 1));
        assert_eq!(grid.count_set(), 4);
    }

    #[test]
    fn test_scale_grid_identity() {
        let mut grid = Grid::new(4, 2);
        grid.set(1, 1, true);
        assert_eq!(scale_grid(&grid, 1), grid);
        assert_eq!(scale_grid(&grid, 0), grid);
    }

    #[test]
    fn test_scale_grid_by_three() {
        let mut grid = Grid::new(4, 2);
        grid.set(0, 0, true);
        let big = scale_grid(&grid, 3);
        assert_eq!(big.rows(), 12);
        assert_eq!(big.cols(), 6);
        assert_eq!(big.count_set(), 9);
        assert!(big.get(2, 2));
        assert!(!big.get(3, 0));
    }
}
