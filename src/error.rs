//! Error type shared by the library modules.

use thiserror::Error;

/// Errors produced while building grids and spinners or looking them up.
///
/// Sink failures are not wrapped here; `LiveSpinner::start` and
/// `LiveSpinner::stop` return the `std::io::Error` from the sink directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A spinner name that is not in the catalog
    #[error("Unknown spinner: {name}\nAvailable: {available}")]
    UnknownSpinner { name: String, available: String },

    /// A spinner definition with no frames
    #[error("Spinner must have at least one frame")]
    EmptyFrames,

    /// A spinner definition with a zero interval
    #[error("Spinner interval must be a positive number of milliseconds")]
    ZeroInterval,

    /// A frame whose rendered size differs from the first frame
    #[error(
        "Frame {index} is {width}x{height} but frame 0 is {expected_width}x{expected_height}"
    )]
    InconsistentFrame {
        index: usize,
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },

    /// Grid rows of differing length
    #[error("Grid row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
