use crate::types::OutputStyle;
use serde::{Deserialize, Serialize};
use std::time::Duration;
pub const DEFAULT_COLUMNS: u16 = 120;
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollOptions {
    pub repeat: bool,
    pub columns: u16,
    /// A pinned style disables the per-file coin flip.
    pub style: Option<OutputStyle>,
    pub min_pause: Duration,
    pub max_pause: Duration,
    pub char_delay: Duration,
}
impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            repeat: false,
            columns: DEFAULT_COLUMNS,
            style: None,
            min_pause: Duration::ZERO,
            max_pause: Duration::from_secs(1),
            char_delay: Duration::from_millis(100),
        }
    }
}
#[derive(Debug, Default)]
pub struct ScrollBuilder {
    options: ScrollOptions,
}
impl ScrollBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn repeat(mut self, yes: bool) -> Self {
        self.options.repeat = yes;
        self
    }
    pub fn columns(mut self, columns: u16) -> Self {
        self.options.columns = columns;
        self
    }
    pub fn style(mut self, style: Option<OutputStyle>) -> Self {
        self.options.style = style;
        self
    }
    pub fn pause_range(mut self, min: Duration, max: Duration) -> Self {
        if min <= max {
            self.options.min_pause = min;
            self.options.max_pause = max;
        } else {
            self.options.min_pause = max;
            self.options.max_pause = min;
        }
        self
    }
    pub fn char_delay(mut self, delay: Duration) -> Self {
        self.options.char_delay = delay;
        self
    }
    pub fn build(self) -> ScrollOptions {
        self.options
    }
}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
}
#[derive(Debug, Default)]
pub struct FileListBuilder {
    options: WalkOptions,
}
impl FileListBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> WalkOptions {
        self.options
    }
}
