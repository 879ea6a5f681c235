//! Spinner definition: frames plus a redraw interval.

use std::time::Duration;

use crate::error::{Error, Result};

/// An immutable animation: an ordered list of frames and the delay between them.
///
/// Every frame has the same rendered size (line count and widest line), so a
/// renderer can redraw in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    frames: Vec<String>,
    interval_ms: u64,
}

impl Spinner {
    /// Create a spinner, validating the frame layout.
    pub fn new<I, F>(frames: I, interval_ms: u64) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        validate(&frames, interval_ms)?;
        Ok(Self {
            frames,
            interval_ms,
        })
    }

    /// Build from frames whose layout is uniform by construction.
    pub(crate) fn prebuilt(frames: Vec<String>, interval_ms: u64) -> Self {
        debug_assert!(validate(&frames, interval_ms).is_ok());
        Self {
            frames,
            interval_ms,
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Rendered width in characters (widest line of a frame).
    pub fn width(&self) -> usize {
        self.frames.first().map_or(0, |f| frame_size(f).0)
    }

    /// Rendered height in lines.
    pub fn height(&self) -> usize {
        self.frames.first().map_or(0, |f| frame_size(f).1)
    }
}

/// `(widest line in chars, line count)` of one frame. An empty frame still
/// occupies one line.
pub fn frame_size(frame: &str) -> (usize, usize) {
    let width = frame
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    (width, frame.lines().count().max(1))
}

fn validate(frames: &[String], interval_ms: u64) -> Result<()> {
    if interval_ms == 0 {
        return Err(Error::ZeroInterval);
    }
    let Some(first) = frames.first() else {
        return Err(Error::EmptyFrames);
    };
    let (expected_width, expected_height) = frame_size(first);
    for (index, frame) in frames.iter().enumerate().skip(1) {
        let (width, height) = frame_size(frame);
        if width != expected_width || height != expected_height {
            return Err(Error::InconsistentFrame {
                index,
                width,
                height,
                expected_width,
                expected_height,
            });
        }
    }
    Ok(())
}
