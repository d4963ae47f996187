//! # Hollyscroll
//!
//! `hollyscroll` scrolls files across a terminal the way computer screens do in
//! movies: line after line, at an uneven pace, sometimes typed out one character
//! at a time. Text files are shown as they are; anything else is shown as a live
//! hex dump.
//!
//! The crate is split into small pieces that the [`ScrollEngine`] ties together:
//!
//! - [`classify`] decides whether a file is shown as text or as hex,
//! - [`format_line`] renders a chunk of bytes as an `xxd`-style line,
//! - [`PacedEmitter`] writes lines in the normal or typewriter style,
//! - [`resolve_paths`] turns user paths into the list of files to show.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use hollyscroll::{
//!     FileListBuilder, RngSource, ScrollBuilder, ScrollEngine, ThreadPacer, resolve_paths,
//!     select_paths,
//! };
//!
//! let pacer = ThreadPacer::default();
//! let walk = FileListBuilder::new().include_hidden(false).build();
//! let files = resolve_paths(&select_paths(["src"]), &walk, &pacer.cancel_flag())
//!     .expect("Failed to list files");
//!
//! let options = ScrollBuilder::new().columns(120).repeat(false).build();
//! let mut engine = ScrollEngine::new(
//!     options,
//!     files,
//!     std::io::stdout(),
//!     pacer,
//!     RngSource::from_entropy(),
//! );
//! let report = engine.execute().expect("Failed to write to stdout");
//! eprintln!("{} files shown", report.rendered);
//! ```

mod classify;
mod dump;
mod emitter;
mod engine;
mod error;
mod options;
pub mod output;
mod random;
mod terminal;
mod types;
mod walk;

pub use classify::{Evidence, MimeGuess, MimeLookup, classify, read_first_line};
pub use dump::{chunk_size, format_line, panel_width};
pub use emitter::{INTERRUPTED_MARKER, PacedEmitter, Pacer, ThreadPacer};
pub use engine::{ScrollEngine, ScrollSession};
pub use error::ScrollError;
pub use options::{DEFAULT_COLUMNS, FileListBuilder, ScrollBuilder, ScrollOptions, WalkOptions};
pub use random::{RandomSource, RngSource};
pub use terminal::terminal_columns;
pub use types::{FileListing, FileOutcome, OutputStyle, RenderMode, RunReport, SkipReason};
pub use walk::{resolve_paths, select_paths};
