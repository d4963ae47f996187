//! Command-line interface for hollyscroll.
//!
//! Scrolls the given files and directories across the terminal, or whatever is
//! piped into standard input.

use clap::{Parser, ValueEnum};
use hollyscroll::output::ListFormat;
use hollyscroll::{
    FileListBuilder, INTERRUPTED_MARKER, OutputStyle, RngSource, ScrollBuilder, ScrollEngine,
    ScrollError, ScrollOptions, ThreadPacer, WalkOptions, resolve_paths, select_paths,
    terminal_columns,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::exit;
use std::sync::atomic::Ordering;

/// Scroll text on terminal window like in movies and TV shows
#[derive(Parser)]
#[command(
    name = "hollyscroll",
    version,
    about,
    long_about = None,
    after_help = "Example:\n  hollyscroll ~/Documents\n\nYou can also pipe in content from other programs:\n  ls -l | hollyscroll"
)]
struct Cli {
    /// Paths to files or directories to be scrolled
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Set output style mode
    #[arg(short, long, value_enum)]
    style: Option<Style>,

    /// Display list of files and mimes only
    #[arg(short, long)]
    list: bool,

    /// Repeat listing the files after done
    #[arg(short, long)]
    repeat: bool,

    /// Format of the file list
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty JSON for the file list
    #[arg(short, long)]
    pretty: bool,

    /// Terminal width (detected if not set)
    #[arg(long)]
    columns: Option<u16>,

    /// Include hidden files
    #[arg(long)]
    hidden: bool,

    /// Respect .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Style {
    Normal,
    Typewriter,
}

impl From<Style> for OutputStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Normal => OutputStyle::Normal,
            Style::Typewriter => OutputStyle::Typewriter,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn into_options(self) -> (ScrollOptions, WalkOptions, Vec<PathBuf>, Option<ListFormat>, bool) {
        let scroll = ScrollBuilder::new()
            .repeat(self.repeat)
            .columns(self.columns.unwrap_or_else(terminal_columns))
            .style(self.style.map(OutputStyle::from))
            .build();

        let walk = FileListBuilder::new()
            .include_hidden(self.hidden)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links)
            .max_depth(self.max_depth)
            .ignore_patterns(self.ignore_patterns)
            .build();

        let list = self.list.then_some(match self.format {
            Format::Text => ListFormat::Text,
            Format::Json => ListFormat::Json,
        });

        (scroll, walk, self.paths, list, self.pretty)
    }
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (scroll, walk, paths, list, pretty) = cli.into_options();

    let pacer = ThreadPacer::default();
    let cancel = pacer.cancel_flag();
    if let Err(e) = ctrlc::set_handler(move || cancel.store(true, Ordering::SeqCst)) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    if io::stdin().is_terminal() {
        run_files(scroll, &walk, &paths, list, pretty, pacer);
    } else {
        run_stream(scroll, pacer);
    }
}

fn run_files(
    scroll: ScrollOptions,
    walk: &WalkOptions,
    paths: &[PathBuf],
    list: Option<ListFormat>,
    pretty: bool,
    pacer: ThreadPacer,
) {
    if list != Some(ListFormat::Json) {
        println!("Reading file list");
    }
    let files = match resolve_paths(&select_paths(paths), walk, &pacer.cancel_flag()) {
        Ok(files) => files,
        Err(ScrollError::Interrupted) => {
            println!("{}", INTERRUPTED_MARKER);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    if list != Some(ListFormat::Json) {
        println!("{} files to display", files.len());
    }

    let mut engine = ScrollEngine::new(
        scroll,
        files,
        io::stdout(),
        pacer,
        RngSource::from_entropy(),
    );

    if let Some(format) = list {
        if let Err(e) = engine.list_files(format, pretty) {
            eprintln!("Error: {}", e);
            exit(1);
        }
        return;
    }

    if let Err(e) = engine.execute() {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run_stream(scroll: ScrollOptions, pacer: ThreadPacer) {
    let mut engine = ScrollEngine::new(
        scroll,
        Vec::new(),
        io::stdout(),
        pacer,
        RngSource::from_entropy(),
    );
    if let Err(e) = engine.display_stream(io::stdin().lock()) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
