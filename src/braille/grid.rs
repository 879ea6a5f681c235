//! Rectangular boolean dot matrix.

use crate::error::{Error, Result};

/// A `rows × cols` matrix of dots, stored row-major.
///
/// Any grid with a zero dimension is normalised to the canonical empty grid
/// (0×0), so two empty grids always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-false grid of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::default();
        }
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut grid = Self::new(rows, cols);
        for r in 0..grid.rows {
            for c in 0..grid.cols {
                grid.cells[r * grid.cols + c] = f(r, c);
            }
        }
        grid
    }

    /// Build a grid from nested rows.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        for (row, cells) in rows.iter().enumerate() {
            let found = cells.as_ref().len();
            if found != expected {
                return Err(Error::RaggedGrid {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(Self::from_fn(rows.len(), expected, |r, c| rows[r].as_ref()[c]))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read a dot. Positions outside the grid read as `false`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Set a dot.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(
            row < self.rows && col < self.cols,
            "dot ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = value;
    }

    /// Set every dot in the grid.
    pub fn fill(&mut self) {
        self.cells.fill(true);
    }

    /// Number of raised dots.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&dot| dot).count()
    }

    /// Positions of all raised dots in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, dot)| **dot)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_requested_dimensions() {
        let grid = Grid::new(4, 8);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.count_set(), 0);
    }

    #[test]
    fn test_zero_dimension_is_canonical_empty() {
        assert_eq!(Grid::new(0, 5), Grid::default());
        assert_eq!(Grid::new(5, 0), Grid::default());
        assert!(Grid::new(5, 0).is_empty());
        assert_eq!(Grid::new(5, 0).rows(), 0);
    }

    #[test]
    fn test_get_out_of_range_is_false() {
        let mut grid = Grid::new(2, 2);
        grid.fill();
        assert!(grid.get(1, 1));
        assert!(!grid.get(2, 0));
        assert!(!grid.get(0, 2));
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range_panics() {
        Grid::new(2, 2).set(2, 0, true);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![true, false], vec![true]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(Error::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_from_rows_copies_cells() {
        let grid = Grid::from_rows(&[[true, false, false], [false, false, true]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.iter_set().collect::<Vec<_>>(), vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: [[bool; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&rows).unwrap(), Grid::default());
    }
}
