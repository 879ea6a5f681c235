//! Background spinner rendering.
//!
//! A `LiveSpinner` owns a spinner definition and an output sink. On a terminal
//! it hides the cursor and redraws frames in place from a worker thread until
//! stopped; on anything else it prints its label once and does nothing more.

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use super::color::{Color, RESET};
use super::sink::Sink;
use crate::braille::scale;
use crate::error::Result;
use crate::spinner::{Spinner, catalog};

/// Hides the terminal cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Shows the terminal cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";
/// Returns to column 0 and clears the line.
pub const CLEAR_LINE: &str = "\r\x1b[2K";
/// Moves the cursor up one line.
pub const CURSOR_UP: &str = "\x1b[1A";

/// Lifecycle of a `LiveSpinner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Never started, or started on a non-terminal sink
    Idle,
    /// Worker thread is drawing frames
    Running,
    /// Worker was stopped and joined; may be started again
    Stopped,
}

/// Threaded spinner that redraws in place on a terminal sink.
///
/// ```no_run
/// use dotspin::LiveSpinner;
///
/// let mut spinner = LiveSpinner::named("helix")?.text("Loading...").color("cyan");
/// spinner.run(|| std::thread::sleep(std::time::Duration::from_secs(1)))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LiveSpinner<S: Sink = io::Stderr> {
    spinner: Spinner,
    text: String,
    color: Option<Color>,
    terminal: bool,
    /// `None` only while the worker owns it
    sink: Option<S>,
    worker: Option<Worker<S>>,
    state: RenderState,
}

struct Worker<S> {
    stop_tx: Sender<()>,
    handle: JoinHandle<WorkerExit<S>>,
}

/// What the worker hands back when it exits.
struct WorkerExit<S> {
    sink: S,
    rendered_lines: usize,
    result: io::Result<()>,
}

impl LiveSpinner<io::Stderr> {
    /// Render `spinner` to standard error.
    pub fn new(spinner: Spinner) -> Self {
        Self::with_sink(spinner, io::stderr())
    }

    /// Render a catalog spinner to standard error.
    pub fn named(name: &str) -> Result<Self> {
        Ok(Self::new(catalog::get(name)?.clone()))
    }
}

impl<S: Sink> LiveSpinner<S> {
    pub fn with_sink(spinner: Spinner, sink: S) -> Self {
        Self {
            spinner,
            text: String::new(),
            color: None,
            terminal: sink.is_terminal(),
            sink: Some(sink),
            worker: None,
            state: RenderState::Idle,
        }
    }

    /// Label shown after the first line of every frame.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Colour frames by name. Unknown names leave frames uncoloured.
    pub fn color(mut self, name: &str) -> Self {
        self.color = Color::from_name(name);
        if self.color.is_none() {
            debug!(color = name, "live:unknown color ignored");
        }
        self
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Enlarge every frame by `factor`. Factors below 2 change nothing.
    pub fn scale(mut self, factor: usize) -> Self {
        let scaled = match scale(&self.spinner, factor) {
            Cow::Owned(spinner) => Some(spinner),
            Cow::Borrowed(_) => None,
        };
        if let Some(spinner) = scaled {
            self.spinner = spinner;
        }
        self
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Whether the worker thread exists and has not exited yet.
    pub fn is_animating(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.handle.is_finished())
    }

    /// The sink, unless the worker currently owns it.
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Compose a frame for display: colour each line (terminal only) and
    /// append the label to the first line.
    pub fn format_frame(&self, frame: &str) -> String {
        let mut lines: Vec<String> = frame.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        if let Some(color) = self.color
            && self.terminal
        {
            for line in &mut lines {
                *line = format!("{}{line}{RESET}", color.code());
            }
        }
        if !self.text.is_empty() {
            lines[0] = if lines[0].is_empty() {
                self.text.clone()
            } else {
                format!("{} {}", lines[0], self.text)
            };
        }
        lines.join("\n")
    }

    /// Start animating.
    ///
    /// On a non-terminal sink this prints the label once and returns without
    /// starting a thread. Calling it while running does nothing.
    pub fn start(&mut self) -> io::Result<()> {
        if self.worker.is_some() {
            return Ok(());
        }

        if !self.terminal {
            debug!(text = %self.text, "live:start non-terminal fallback");
            if self.text.is_empty() {
                return Ok(());
            }
            let sink = self.sink.as_mut().ok_or_else(sink_unavailable)?;
            writeln!(sink, "{}", self.text)?;
            return sink.flush();
        }

        let frames: Vec<String> = self
            .spinner
            .frames()
            .iter()
            .map(|frame| self.format_frame(frame))
            .collect();
        let interval = self.spinner.interval();
        let sink = self.sink.take().ok_or_else(sink_unavailable)?;
        let (stop_tx, stop_rx) = mpsc::channel();

        debug!(
            frames = frames.len(),
            interval_ms = self.spinner.interval_ms(),
            "live:start"
        );
        let handle = thread::spawn(move || render_loop(sink, frames, interval, stop_rx));
        self.worker = Some(Worker { stop_tx, handle });
        self.state = RenderState::Running;
        Ok(())
    }

    /// Stop animating, erase the last frame and restore the cursor.
    ///
    /// Blocks until the worker has exited, so nothing is written to the sink
    /// after this returns. A non-empty `symbol` is printed followed by the
    /// label. Does nothing if not running. Afterwards the state is
    /// [`RenderState::Stopped`], from which `start` may be called again.
    ///
    /// A panic in the worker thread is resumed on the caller's thread.
    pub fn stop(&mut self, symbol: &str) -> io::Result<()> {
        self.join_worker(symbol)
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }

    /// Stop from a drop path, where re-raising a worker panic could abort
    /// the process if the caller is already unwinding.
    fn stop_on_drop(&mut self, context: &str) {
        match self.join_worker("") {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, context, "live:stop failed"),
            Err(_) => warn!(context, "live:worker panicked"),
        }
    }

    fn join_worker(&mut self, symbol: &str) -> thread::Result<io::Result<()>> {
        let Some(worker) = self.worker.take() else {
            return Ok(Ok(()));
        };

        // A send failure means the loop already ended on a write error.
        let _ = worker.stop_tx.send(());
        let joined = worker.handle.join();
        self.state = RenderState::Stopped;
        let WorkerExit {
            mut sink,
            rendered_lines,
            result,
        } = joined?;

        let cleanup = finish(&mut sink, rendered_lines, symbol, &self.text);
        self.sink = Some(sink);
        debug!(symbol, rendered_lines, "live:stop");

        if let Err(e) = &result {
            warn!(error = %e, "live:render loop failed");
        }
        Ok(result.and(cleanup))
    }

    /// Start and return a guard that stops the spinner when dropped.
    pub fn enter(&mut self) -> io::Result<SpinnerGuard<'_, S>> {
        self.start()?;
        Ok(SpinnerGuard { spinner: self })
    }

    /// Animate while `work` runs. The spinner is stopped even if `work` panics.
    pub fn run<T>(&mut self, work: impl FnOnce() -> T) -> io::Result<T> {
        let guard = self.enter()?;
        let value = work();
        guard.finish("")?;
        Ok(value)
    }
}

impl<S: Sink> Drop for LiveSpinner<S> {
    fn drop(&mut self) {
        self.stop_on_drop("drop");
    }
}

/// Scoped spinner use: stops the spinner on every exit path.
pub struct SpinnerGuard<'a, S: Sink> {
    spinner: &'a mut LiveSpinner<S>,
}

impl<S: Sink> SpinnerGuard<'_, S> {
    /// Stop with a final symbol, reporting any write error.
    pub fn finish(self, symbol: &str) -> io::Result<()> {
        self.spinner.stop(symbol)
    }
}

impl<S: Sink> Drop for SpinnerGuard<'_, S> {
    fn drop(&mut self) {
        self.spinner.stop_on_drop("scope exit");
    }
}

fn sink_unavailable() -> io::Error {
    io::Error::other("spinner sink is unavailable")
}

fn render_loop<S: Sink>(
    mut sink: S,
    frames: Vec<String>,
    interval: Duration,
    stop: mpsc::Receiver<()>,
) -> WorkerExit<S> {
    let mut rendered_lines = 0;
    let result = draw_frames(&mut sink, &frames, interval, &stop, &mut rendered_lines);
    WorkerExit {
        sink,
        rendered_lines,
        result,
    }
}

fn draw_frames<W: Write>(
    out: &mut W,
    frames: &[String],
    interval: Duration,
    stop: &mpsc::Receiver<()>,
    rendered_lines: &mut usize,
) -> io::Result<()> {
    out.write_all(HIDE_CURSOR.as_bytes())?;
    out.flush()?;

    let mut index = 0usize;
    loop {
        erase(out, *rendered_lines)?;
        *rendered_lines = 0;
        let frame = &frames[index % frames.len()];
        out.write_all(frame.as_bytes())?;
        *rendered_lines = frame.lines().count().max(1);
        out.flush()?;
        index = index.wrapping_add(1);

        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!(frames_drawn = index, "live:loop exit");
    Ok(())
}

/// Clear `lines` previously written lines, leaving the cursor at the start of
/// the first one.
fn erase<W: Write>(out: &mut W, lines: usize) -> io::Result<()> {
    for i in 0..lines {
        out.write_all(CLEAR_LINE.as_bytes())?;
        if i + 1 < lines {
            out.write_all(CURSOR_UP.as_bytes())?;
        }
    }
    Ok(())
}

fn finish<W: Write>(out: &mut W, rendered_lines: usize, symbol: &str, text: &str) -> io::Result<()> {
    let body = erase(out, rendered_lines).and_then(|()| {
        if symbol.is_empty() {
            Ok(())
        } else if text.is_empty() {
            writeln!(out, "{symbol}")
        } else {
            writeln!(out, "{symbol} {text}")
        }
    });
    // The cursor is restored even when erasing failed.
    let restore = out
        .write_all(SHOW_CURSOR.as_bytes())
        .and_then(|()| out.flush());
    body.and(restore)
}
