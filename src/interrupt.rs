//! Ctrl-C latch for interruptible previews.
//!
//! The default SIGINT action would kill the process with the cursor still
//! hidden. Instead the handler sets a flag, and waits poll it so the spinner
//! can be stopped through its normal cleanup path.

use anyhow::{Context, Result};
use nix::libc;
use nix::sys::signal::{self, SigHandler, Signal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Upper bound on how long a wait sleeps before re-checking the flag
const POLL_INTERVAL: Duration = Duration::from_millis(25);

extern "C" fn on_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install the SIGINT handler.
pub fn install() -> Result<()> {
    // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
    unsafe { signal::signal(Signal::SIGINT, SigHandler::Handler(on_sigint)) }
        .context("Failed to install SIGINT handler")?;
    Ok(())
}

/// Sleep for `duration`, returning early with `true` on Ctrl-C.
///
/// A duration too large to add to the clock waits until interrupted.
pub fn sleep(duration: Duration) -> bool {
    wait(duration, &INTERRUPTED)
}

fn wait(duration: Duration, flag: &AtomicBool) -> bool {
    let deadline = Instant::now().checked_add(duration);
    loop {
        if flag.load(Ordering::SeqCst) {
            return true;
        }
        let remaining = match deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => POLL_INTERVAL,
        };
        if remaining.is_zero() {
            return false;
        }
        thread::sleep(remaining.min(POLL_INTERVAL));
    }
}
