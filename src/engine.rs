use crate::classify::{MimeGuess, MimeLookup, classify};
use crate::dump::{chunk_size, format_line};
use crate::emitter::{PacedEmitter, Pacer};
use crate::error::ScrollError;
use crate::options::ScrollOptions;
use crate::output::{ListFormat, banner, format_listing};
use crate::random::RandomSource;
use crate::types::{FileListing, FileOutcome, OutputStyle, RenderMode, RunReport, SkipReason};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
const STDIN: &str = "<stdin>";
/// Mutable state of a run, owned by the engine.
#[derive(Debug, Clone)]
pub struct ScrollSession {
    pub files: Vec<PathBuf>,
    pub repeat: bool,
    pub columns: u16,
    pub pause: Duration,
    /// Mode of the current file, as decided by the classifier.
    ///
    /// It is also stepped through the `Text -> Hex` cycle before each file, but
    /// that value is always overwritten before anything is shown.
    pub mode: RenderMode,
    pub style: OutputStyle,
}
pub struct ScrollEngine<W, P, R> {
    options: ScrollOptions,
    session: ScrollSession,
    emitter: PacedEmitter<W, P>,
    random: R,
    mime: Box<dyn MimeLookup>,
}
impl<W: Write, P: Pacer, R: RandomSource> ScrollEngine<W, P, R> {
    pub fn new(options: ScrollOptions, files: Vec<PathBuf>, out: W, pacer: P, random: R) -> Self {
        let session = ScrollSession {
            files,
            repeat: options.repeat,
            columns: options.columns,
            pause: options.min_pause,
            mode: RenderMode::Text,
            style: options.style.unwrap_or(OutputStyle::Normal),
        };
        let emitter = PacedEmitter::new(out, pacer, options.char_delay);
        Self {
            options,
            session,
            emitter,
            random,
            mime: Box::new(MimeGuess),
        }
    }
    pub fn with_mime_lookup(mut self, mime: impl MimeLookup + 'static) -> Self {
        self.mime = Box::new(mime);
        self
    }
    pub fn session(&self) -> &ScrollSession {
        &self.session
    }
    pub fn emitter(&self) -> &PacedEmitter<W, P> {
        &self.emitter
    }
    pub fn into_writer(self) -> W {
        self.emitter.into_inner()
    }
    /// Scrolls through every file once, or forever when repeating.
    pub fn execute(&mut self) -> Result<RunReport, ScrollError> {
        let mut report = RunReport::default();
        if self.session.files.is_empty() {
            return Ok(report);
        }
        let result = loop {
            if let Err(e) = self.display_file_data(&mut report) {
                break Err(e);
            }
            if !self.session.repeat {
                break Ok(());
            }
        };
        self.finish(result, report)
    }
    /// Lists the files with their mimetype and mode, rendering nothing.
    ///
    /// Text listings go out one banner per file as they are classified; a JSON
    /// listing is written once complete. A cancelled listing stops before the
    /// next file and ends with the interruption marker.
    pub fn list_files(
        &mut self,
        format: ListFormat,
        pretty: bool,
    ) -> Result<RunReport, ScrollError> {
        let mut report = RunReport::default();
        let mut listing = Vec::new();
        let mut result = self.collect_listing(format, &mut listing, &mut report);
        if result.is_ok() && format == ListFormat::Json {
            result = format_listing(&listing, format, pretty)
                .and_then(|json| self.emitter.write_line(json.trim_end()));
        }
        self.finish(result, report)
    }
    fn collect_listing(
        &mut self,
        format: ListFormat,
        listing: &mut Vec<FileListing>,
        report: &mut RunReport,
    ) -> Result<(), ScrollError> {
        for index in 0..self.session.files.len() {
            if self.emitter.cancelled() {
                return Err(ScrollError::Interrupted);
            }
            let Some(entry) = self.listing_entry(&self.session.files[index]) else {
                report.skipped += 1;
                continue;
            };
            if format == ListFormat::Text {
                let line = banner(&entry.path, entry.mimetype.as_deref(), entry.mode);
                self.emitter.write_line(&line)?;
            }
            listing.push(entry);
            report.rendered += 1;
        }
        Ok(())
    }
    fn listing_entry(&self, path: &Path) -> Option<FileListing> {
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if path.is_dir() {
            return None;
        }
        let mimetype = self.mime.guess(&path);
        let mode = classify(mimetype.as_deref(), &path);
        Some(FileListing {
            path,
            mimetype,
            mode,
        })
    }
    /// Scrolls a live input stream until it ends.
    ///
    /// Lines are shown as text until one fails to decode as UTF-8. From the
    /// offending byte on, the rest of the stream is shown as a hex dump.
    pub fn display_stream<S: BufRead>(&mut self, input: S) -> Result<RunReport, ScrollError> {
        let mut report = RunReport::default();
        self.session.pause = self.draw_pause();
        self.session.mode = RenderMode::Text;
        let result = match self.stream_lines(input) {
            Err(ScrollError::Io { .. }) => Ok(()),
            other => other,
        };
        if result.is_ok() {
            report.rendered = 1;
        }
        let report = self.finish(result, report)?;
        self.emitter.write_line("")?;
        Ok(report)
    }
    fn finish(
        &mut self,
        result: Result<(), ScrollError>,
        mut report: RunReport,
    ) -> Result<RunReport, ScrollError> {
        match result {
            Ok(()) => Ok(report),
            Err(ScrollError::Interrupted) => {
                self.emitter.interrupted()?;
                report.interrupted = true;
                Ok(report)
            }
            Err(e) => Err(e),
        }
    }
    fn display_file_data(&mut self, report: &mut RunReport) -> Result<(), ScrollError> {
        for index in 0..self.session.files.len() {
            let path = self.session.files[index].clone();
            match self.render_file(&path)? {
                FileOutcome::Rendered => report.rendered += 1,
                FileOutcome::Skipped(_reason) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipped {}: {:?}", path.display(), _reason);
                    report.skipped += 1;
                }
            }
        }
        Ok(())
    }
    fn render_file(&mut self, path: &Path) -> Result<FileOutcome, ScrollError> {
        if self.emitter.cancelled() {
            return Err(ScrollError::Interrupted);
        }
        self.session.pause = self.draw_pause();
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if path.is_dir() {
            return Ok(FileOutcome::Skipped(SkipReason::Directory));
        }
        // Inert: the cycled value is always replaced by the classifier's decision.
        self.session.mode = self.session.mode.next();
        self.session.style = match self.options.style {
            Some(style) => style,
            None if self.random.coin() => OutputStyle::Normal,
            None => OutputStyle::Typewriter,
        };
        let mimetype = self.mime.guess(&path);
        self.session.mode = classify(mimetype.as_deref(), &path);
        self.emitter
            .write_line(&banner(&path, mimetype.as_deref(), self.session.mode))?;
        let outcome = match self.session.mode {
            RenderMode::Text => self.render_text(&path)?,
            RenderMode::Hex => self.render_hex(&path)?,
        };
        if outcome == FileOutcome::Rendered {
            self.emitter.write_line("")?;
        }
        Ok(outcome)
    }
    fn render_text(&mut self, path: &Path) -> Result<FileOutcome, ScrollError> {
        let Ok(file) = File::open(path) else {
            return Ok(FileOutcome::Skipped(SkipReason::Unreadable));
        };
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(FileOutcome::Rendered),
                Ok(_) => {}
                Err(_) => return Ok(FileOutcome::Skipped(SkipReason::Unreadable)),
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                return Ok(FileOutcome::Skipped(SkipReason::InvalidUtf8));
            };
            for line in split_line_endings(line) {
                self.emitter
                    .emit_line(line, self.session.style, self.session.pause)?;
            }
        }
    }
    fn render_hex(&mut self, path: &Path) -> Result<FileOutcome, ScrollError> {
        let Ok(file) = File::open(path) else {
            return Ok(FileOutcome::Skipped(SkipReason::Unreadable));
        };
        match self.dump_chunks(BufReader::new(file), path, self.session.style) {
            Ok(()) => Ok(FileOutcome::Rendered),
            Err(ScrollError::Io { .. }) => Ok(FileOutcome::Skipped(SkipReason::Unreadable)),
            Err(e) => Err(e),
        }
    }
    fn dump_chunks<S: Read>(
        &mut self,
        mut input: S,
        source: &Path,
        style: OutputStyle,
    ) -> Result<(), ScrollError> {
        let size = chunk_size(self.session.columns);
        let mut buf = vec![0u8; size];
        let mut line_offset = 0;
        loop {
            let n = read_chunk(&mut input, &mut buf).map_err(|e| ScrollError::io(source, e))?;
            if n == 0 {
                return Ok(());
            }
            let line = format_line(&buf[..n], line_offset, size);
            self.emitter.emit_line(&line, style, self.session.pause)?;
            line_offset += 1;
        }
    }
    fn stream_lines<S: BufRead>(&mut self, mut input: S) -> Result<(), ScrollError> {
        let style = self.options.style.unwrap_or(OutputStyle::Normal);
        self.session.style = style;
        let mut line = Vec::new();
        loop {
            line.clear();
            // Look at the first two bytes before committing to a whole line, so a
            // binary stream without newlines is caught early.
            (&mut input)
                .take(2)
                .read_until(b'\n', &mut line)
                .map_err(|e| ScrollError::io(STDIN, e))?;
            if line.is_empty() {
                return Ok(());
            }
            let head_is_text = match std::str::from_utf8(&line) {
                Ok(_) => true,
                Err(e) => e.error_len().is_none(),
            };
            if head_is_text && !line.ends_with(b"\n") {
                input
                    .read_until(b'\n', &mut line)
                    .map_err(|e| ScrollError::io(STDIN, e))?;
            }
            let valid = match std::str::from_utf8(&line) {
                Ok(text) => {
                    self.emitter
                        .emit_line(text.trim_end(), style, self.session.pause)?;
                    continue;
                }
                Err(e) => e.valid_up_to(),
            };
            let (text, rest) = line.split_at(valid);
            if !text.is_empty() {
                let text = String::from_utf8_lossy(text);
                self.emitter
                    .emit_line(text.trim_end(), style, self.session.pause)?;
            }
            self.session.mode = RenderMode::Hex;
            #[cfg(feature = "logging")]
            tracing::debug!("Stream is not UTF-8, switching to hex");
            let rest = Cursor::new(rest.to_vec());
            return self.dump_chunks(rest.chain(input), Path::new(STDIN), style);
        }
    }
    fn draw_pause(&mut self) -> Duration {
        let min = self.options.min_pause;
        let span = self.options.max_pause.saturating_sub(min);
        min + span.mul_f64(self.random.unit().clamp(0.0, 1.0))
    }
}
/// Splits a line read up to `\n` on every line ending, so `\r\n` and a lone `\r`
/// end a line just like `\n` does. The pieces carry no terminator.
fn split_line_endings(line: &str) -> std::str::Split<'_, char> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split('\r')
}
/// Fills `buf` from `input`, short only at end of input.
fn read_chunk<S: Read>(input: &mut S, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
