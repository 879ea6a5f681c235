//! Animated Unicode braille spinners.
//!
//! Frames are drawn on boolean dot grids and encoded as braille text
//! (U+2800..U+28FF, 2×4 dots per character). A [`LiveSpinner`] animates a
//! [`Spinner`] on a background thread while the caller does its work.

pub mod braille;
pub mod error;
pub mod live;
pub mod spinner;

pub use braille::{Grid, decode, encode, scale, scale_grid};
pub use error::{Error, Result};
pub use live::{Color, Forced, LiveSpinner, RenderState, Sink, SpinnerGuard};
pub use spinner::{Spinner, catalog};
