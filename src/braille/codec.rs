//! Conversion between dot grids and braille text.
//!
//! Each braille character is a 2-column × 4-row dot cell. Dot bit values:
//!
//! ```text
//! row 0:  dot1 0x01   dot4 0x08
//! row 1:  dot2 0x02   dot5 0x10
//! row 2:  dot3 0x04   dot6 0x20
//! row 3:  dot7 0x40   dot8 0x80
//! ```
//!
//! One text line covers 4 grid rows; taller grids become newline-separated
//! lines.

use super::grid::Grid;

/// Codepoint of the blank braille cell.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Bit for each `[row][col]` dot position inside one cell.
pub const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Grid rows covered by one line of braille text.
pub const CELL_ROWS: usize = 4;

/// Grid columns covered by one braille character.
pub const CELL_COLS: usize = 2;

/// Encode a grid as braille text.
///
/// Odd widths round up to a whole character; the missing column contributes
/// no bits. Row counts that are not a multiple of 4 are padded with blank
/// rows in the last line.
pub fn encode(grid: &Grid) -> String {
    if grid.is_empty() {
        return String::new();
    }
    let lines = grid.rows().div_ceil(CELL_ROWS);
    let chars = grid.cols().div_ceil(CELL_COLS);
    let mut out = String::with_capacity(lines * (chars * 3 + 1));
    for band in 0..lines {
        if band > 0 {
            out.push('\n');
        }
        for cell in 0..chars {
            out.push(encode_cell(grid, band * CELL_ROWS, cell * CELL_COLS));
        }
    }
    out
}

fn encode_cell(grid: &Grid, top: usize, left: usize) -> char {
    let mut bits = 0u8;
    for (dr, row_bits) in DOT_BITS.iter().enumerate() {
        for (dc, bit) in row_bits.iter().enumerate() {
            if grid.get(top + dr, left + dc) {
                bits |= bit;
            }
        }
    }
    // BRAILLE_BASE + u8 is always inside U+2800..=U+28FF
    char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or('\u{2800}')
}

/// Decode braille text back into a grid.
///
/// Every line becomes a 4-row band of width `2 × characters`. The grid is as
/// wide as the longest line; shorter lines leave their trailing columns unset.
/// Characters outside the braille block decode as blank cells.
pub fn decode(text: &str) -> Grid {
    if text.is_empty() {
        return Grid::default();
    }
    let lines: Vec<&str> = text.lines().collect();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        * CELL_COLS;
    let mut grid = Grid::new(lines.len() * CELL_ROWS, width);
    for (band, line) in lines.iter().enumerate() {
        for (cell, ch) in line.chars().enumerate() {
            let Some(bits) = cell_bits(ch) else {
                continue;
            };
            for (dr, row_bits) in DOT_BITS.iter().enumerate() {
                for (dc, bit) in row_bits.iter().enumerate() {
                    if bits & bit != 0 {
                        grid.set(band * CELL_ROWS + dr, cell * CELL_COLS + dc, true);
                    }
                }
            }
        }
    }
    grid
}

fn cell_bits(ch: char) -> Option<u8> {
    u32::from(ch)
        .checked_sub(BRAILLE_BASE)
        .and_then(|offset| u8::try_from(offset).ok())
}
