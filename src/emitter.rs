//! Paced output of lines to the terminal.
//!
//! A [`PacedEmitter`] writes lines either in one go ([`OutputStyle::Normal`]) or
//! character by character ([`OutputStyle::Typewriter`]), and waits on a [`Pacer`]
//! after every visible step. The pacer is also where a cancellation surfaces.

use crate::error::ScrollError;
use crate::types::OutputStyle;
use std::borrow::Cow;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Marker written when a run is cancelled.
pub const INTERRUPTED_MARKER: &str = "---";

/// Longest single sleep of a [`ThreadPacer`] before it re-checks for cancellation.
const SLEEP_SLICE: Duration = Duration::from_millis(25);

/// Blocks between output steps.
pub trait Pacer {
    /// Waits for `duration`, or fails with [`ScrollError::Interrupted`] once cancelled.
    fn pause(&mut self, duration: Duration) -> Result<(), ScrollError>;

    /// Whether the run has been cancelled.
    fn cancelled(&self) -> bool {
        false
    }
}

/// A [`Pacer`] that sleeps the current thread and watches a shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct ThreadPacer {
    cancel: Arc<AtomicBool>,
}

impl ThreadPacer {
    /// The flag a signal handler sets to stop the run.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) -> Result<(), ScrollError> {
        let deadline = Instant::now() + duration;
        loop {
            if self.cancelled() {
                return Err(ScrollError::Interrupted);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            thread::sleep((deadline - now).min(SLEEP_SLICE));
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }
}

/// Writes lines to `W`, pacing them with `P`.
#[derive(Debug)]
pub struct PacedEmitter<W, P> {
    out: W,
    pacer: P,
    char_delay: Duration,
    at_line_start: bool,
}

impl<W: Write, P: Pacer> PacedEmitter<W, P> {
    pub fn new(out: W, pacer: P, char_delay: Duration) -> Self {
        Self {
            out,
            pacer,
            char_delay,
            at_line_start: true,
        }
    }

    /// Emits `line` in the given style, then waits `delay`.
    pub fn emit_line(
        &mut self,
        line: &str,
        style: OutputStyle,
        delay: Duration,
    ) -> Result<(), ScrollError> {
        match style {
            OutputStyle::Normal => self.write_line(line.trim_end())?,
            OutputStyle::Typewriter => self.type_line(line)?,
        }
        self.pacer.pause(delay)
    }

    /// Writes `line` and a newline at once, without pacing.
    pub fn write_line(&mut self, line: &str) -> Result<(), ScrollError> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.write_chunk(&buf)
    }

    /// Writes the cancellation marker on a line of its own.
    pub fn interrupted(&mut self) -> Result<(), ScrollError> {
        if !self.at_line_start {
            self.write_chunk("\n")?;
        }
        self.write_line(INTERRUPTED_MARKER)
    }

    pub fn cancelled(&self) -> bool {
        self.pacer.cancelled()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn type_line(&mut self, line: &str) -> Result<(), ScrollError> {
        let line: Cow<'_, str> = if line.ends_with('\n') {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(format!("{}\n", line))
        };
        // Indentation goes out in one piece; typing it space by space stutters.
        let rest = line.trim_start();
        let indent = &line[..line.len() - rest.len()];
        if !indent.is_empty() {
            self.write_chunk(indent)?;
            self.pacer.pause(self.char_delay)?;
        }
        let mut buf = [0u8; 4];
        for ch in rest.chars() {
            self.write_chunk(ch.encode_utf8(&mut buf))?;
            self.pacer.pause(self.char_delay)?;
        }
        Ok(())
    }

    fn write_chunk(&mut self, chunk: &str) -> Result<(), ScrollError> {
        self.out.write_all(chunk.as_bytes())?;
        self.out.flush()?;
        self.at_line_start = chunk.ends_with('\n');
        Ok(())
    }
}
