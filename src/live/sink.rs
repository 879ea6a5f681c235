//! Output destinations for the live renderer.

use std::io::{self, IsTerminal, Write};

/// A writable stream that can report whether it is an interactive terminal.
///
/// The renderer hands the sink to its worker thread while running, hence the
/// `Send + 'static` bound.
pub trait Sink: Write + Send + 'static {
    fn is_terminal(&self) -> bool;
}

impl Sink for io::Stderr {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Sink for io::Stdout {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

/// In-memory buffers are never terminals.
impl Sink for Vec<u8> {
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

/// Wraps a writer with a fixed answer to the terminal query.
///
/// Useful for forcing animation through a pipe, or for capturing terminal
/// output in memory.
#[derive(Debug, Default)]
pub struct Forced<W> {
    inner: W,
    terminal: bool,
}

impl<W> Forced<W> {
    pub fn new(inner: W, terminal: bool) -> Self {
        Self { inner, terminal }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Forced<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + Send + 'static> Sink for Forced<W> {
    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
