use hollyscroll::{
    Evidence, MimeGuess, MimeLookup, OutputStyle, PacedEmitter, Pacer, RandomSource, RenderMode,
    RngSource, ScrollError, ThreadPacer, chunk_size, classify, format_line, panel_width,
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tempfile::tempdir;
#[derive(Default)]
struct EventWriter {
    events: Vec<String>,
}
impl Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.events.push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
impl EventWriter {
    fn text(&self) -> String {
        self.events.concat()
    }
}
#[derive(Default)]
struct NoSleep {
    pauses: Vec<Duration>,
    fail_at: Option<usize>,
}
impl Pacer for NoSleep {
    fn pause(&mut self, duration: Duration) -> Result<(), ScrollError> {
        if self.fail_at == Some(self.pauses.len()) {
            return Err(ScrollError::Interrupted);
        }
        self.pauses.push(duration);
        Ok(())
    }
}
const TICK: Duration = Duration::from_millis(100);
fn emitter(pacer: NoSleep) -> PacedEmitter<EventWriter, NoSleep> {
    PacedEmitter::new(EventWriter::default(), pacer, TICK)
}
#[test]
fn test_classify_plain_text_mimetype() {
    assert_eq!(
        classify(Some("text/plain"), Path::new("notes.txt")),
        RenderMode::Text
    );
}
#[test]
fn test_classify_unknown_binary_is_hex() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binaryblob.dat");
    fs::write(&path, [0x7f, b'E', b'L', b'F', 0, 1, 2, 0xff]).unwrap();
    assert_eq!(classify(None, &path), RenderMode::Hex);
    assert_eq!(
        classify(None, &dir.path().join("missing.dat")),
        RenderMode::Hex
    );
}
#[test]
fn test_classify_well_known_filename_wins() {
    assert_eq!(classify(None, Path::new("/nowhere/README")), RenderMode::Text);
    assert_eq!(
        classify(Some("application/octet-stream"), Path::new("Makefile.bin")),
        RenderMode::Text
    );
    assert_eq!(classify(None, Path::new("LICENSE")), RenderMode::Text);
}
#[test]
fn test_classify_allow_lists() {
    assert_eq!(classify(None, Path::new("config.yml")), RenderMode::Text);
    assert_eq!(classify(None, Path::new("schema.sql")), RenderMode::Text);
    assert_eq!(
        classify(Some("application/json"), Path::new("data")),
        RenderMode::Text
    );
    assert_eq!(
        classify(Some("text/x-custom"), Path::new("thing.xyz")),
        RenderMode::Text
    );
    assert_eq!(
        classify(Some("image/png"), Path::new("/nowhere/logo.png")),
        RenderMode::Hex
    );
}
#[test]
fn test_classify_shebang_first_line() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("deploy");
    fs::write(&script, "#!/bin/sh\necho deploying\n").unwrap();
    assert_eq!(classify(None, &script), RenderMode::Text);
    let not_utf8 = dir.path().join("blob");
    fs::write(&not_utf8, [b'#', 0xff, b'!', b'\n']).unwrap();
    assert_eq!(classify(None, &not_utf8), RenderMode::Hex);
    assert_eq!(classify(None, dir.path()), RenderMode::Hex);
}
#[test]
fn test_evidence_is_order_prioritized() {
    let evidence = Evidence::new(Some("image/png"), Path::new("readme.png"));
    assert_eq!(evidence.decide(), RenderMode::Text);
    let evidence = Evidence::new(None, Path::new("tool"))
        .with_first_line(Some("#!/usr/bin/env python\n".into()));
    assert_eq!(evidence.extension, "");
    assert_eq!(evidence.decide(), RenderMode::Text);
    let evidence = Evidence::new(None, Path::new("tool")).with_first_line(None);
    assert_eq!(evidence.decide(), RenderMode::Hex);
}
#[test]
fn test_mime_lookup() {
    assert_eq!(
        MimeGuess.guess(Path::new("notes.txt")).as_deref(),
        Some("text/plain")
    );
    let never = |_: &Path| -> Option<String> { None };
    assert_eq!(never.guess(Path::new("notes.txt")), None);
}
#[test]
fn test_format_line_hello() {
    let line = format_line(b"Hello", 0, 16);
    assert_eq!(line, format!("0000000: {:<39}  Hello", "4865 6c6c 6f"));
    assert_eq!(line, format_line(b"Hello", 0, 16));
}
#[test]
fn test_format_line_offset_and_gutter() {
    let line = format_line(&[0x20, 0x7e, 0x7f, 0x00, 0x41, 0x0a], 2, 16);
    assert!(line.starts_with("0000020: 207e 7f00 410a "));
    assert!(line.ends_with("  .~..A."));
}
#[test]
fn test_format_line_gutter_length_and_alignment() {
    let bytes: Vec<u8> = (0..=255).collect();
    let size = 16;
    let gutter_column = 9 + panel_width(size) + 2;
    for len in 0..=size {
        let chunk = &bytes[120..120 + len];
        let line = format_line(chunk, 1, size);
        let gutter = &line[gutter_column..];
        assert_eq!(gutter.chars().count(), len);
        for (byte, ch) in chunk.iter().zip(gutter.chars()) {
            if byte.is_ascii_graphic() {
                assert_eq!(ch, *byte as char);
            } else {
                assert_eq!(ch, '.');
            }
        }
    }
}
#[test]
fn test_chunk_size_is_even() {
    assert_eq!(chunk_size(80), 18);
    assert_eq!(chunk_size(120), 26);
    assert_eq!(chunk_size(0), 2);
    for columns in 10..=1000 {
        let size = chunk_size(columns);
        assert_eq!(size % 2, 0);
        assert!(size >= 2);
    }
    assert_eq!(panel_width(16), 39);
    assert_eq!(panel_width(2), 4);
}
#[test]
fn test_normal_line_is_one_write() {
    let mut out = emitter(NoSleep::default());
    out.emit_line("hello  \n", OutputStyle::Normal, Duration::from_millis(250))
        .unwrap();
    assert_eq!(out.get_ref().events, vec!["hello\n"]);
    assert_eq!(out.pacer().pauses, vec![Duration::from_millis(250)]);
}
#[test]
fn test_typewriter_indent_is_one_write() {
    let mut out = emitter(NoSleep::default());
    out.emit_line("    let x;", OutputStyle::Typewriter, Duration::from_secs(1))
        .unwrap();
    assert_eq!(
        out.get_ref().events,
        vec!["    ", "l", "e", "t", " ", "x", ";", "\n"]
    );
    let pauses = &out.pacer().pauses;
    assert_eq!(pauses.len(), 9);
    assert!(pauses[..8].iter().all(|p| *p == TICK));
    assert_eq!(pauses[8], Duration::from_secs(1));
}
#[test]
fn test_typewriter_blank_and_unicode_lines() {
    let mut out = emitter(NoSleep::default());
    out.emit_line("   ", OutputStyle::Typewriter, Duration::ZERO).unwrap();
    out.emit_line("né\n", OutputStyle::Typewriter, Duration::ZERO).unwrap();
    assert_eq!(out.get_ref().events, vec!["   \n", "n", "é", "\n"]);
}
#[test]
fn test_interrupted_marker_starts_a_new_line() {
    let mut out = emitter(NoSleep {
        fail_at: Some(1),
        ..Default::default()
    });
    let err = out
        .emit_line("abc", OutputStyle::Typewriter, Duration::ZERO)
        .unwrap_err();
    assert!(matches!(err, ScrollError::Interrupted));
    out.interrupted().unwrap();
    assert_eq!(out.get_ref().text(), "ab\n---\n");
}
#[test]
fn test_thread_pacer_stops_when_cancelled() {
    let mut pacer = ThreadPacer::default();
    assert!(pacer.pause(Duration::ZERO).is_ok());
    pacer.cancel_flag().store(true, Ordering::SeqCst);
    assert!(pacer.cancelled());
    let err = pacer.pause(Duration::from_secs(3600)).unwrap_err();
    assert!(matches!(err, ScrollError::Interrupted));
}
#[test]
fn test_seeded_rng_source_is_reproducible() {
    let mut a = RngSource::seeded(7);
    let mut b = RngSource::seeded(7);
    for _ in 0..100 {
        let value = a.unit();
        assert!((0.0..1.0).contains(&value));
        assert_eq!(value, b.unit());
        assert_eq!(a.coin(), b.coin());
    }
}
