use crate::error::ScrollError;
use crate::options::WalkOptions;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &WalkOptions) -> Result<Self, ScrollError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if let Some(matcher) = build_matcher(&options.ignore_patterns)? {
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_files(self) -> impl Iterator<Item = Result<PathBuf, ScrollError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.file_type().is_some_and(|t| !t.is_dir()) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(ScrollError::Walk(e.to_string()))),
        })
    }
}
fn build_matcher(patterns: &[String]) -> Result<Option<globset::GlobSet>, ScrollError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut glob_builder = globset::GlobSetBuilder::new();
    for pattern in patterns {
        let glob = globset::Glob::new(pattern).map_err(|e| {
            ScrollError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
        })?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map(Some)
        .map_err(|e| ScrollError::Walk(format!("Failed to build glob set: {}", e)))
}
/// Canonicalizes the paths given by the user, dropping (and reporting) the missing ones.
pub fn select_paths<I, P>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut selected = Vec::new();
    for path in paths {
        let path = path.as_ref();
        match fs::canonicalize(path) {
            Ok(real) => selected.push(real),
            Err(_) => eprintln!("Warning: path '{}' not found.", path.display()),
        }
    }
    selected
}
/// Expands directories into the files beneath them.
///
/// Plain files are kept as given. The result holds no directories and no
/// duplicates, in the order the files were first seen. Entries that cannot be
/// read while walking are skipped; only an invalid ignore pattern is an error.
///
/// `cancel` is checked before every entry. Once it is set the walk stops with
/// [`ScrollError::Interrupted`].
pub fn resolve_paths(
    paths: &[PathBuf],
    options: &WalkOptions,
    cancel: &AtomicBool,
) -> Result<Vec<PathBuf>, ScrollError> {
    let cancelled = || cancel.load(Ordering::SeqCst);
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for path in paths {
        if cancelled() {
            return Err(ScrollError::Interrupted);
        }
        if !path.is_dir() {
            if seen.insert(path.clone()) {
                files.push(path.clone());
            }
            continue;
        }
        for entry in Walker::new(path, options)?.into_files() {
            if cancelled() {
                return Err(ScrollError::Interrupted);
            }
            match entry {
                Ok(file) => {
                    if seen.insert(file.clone()) {
                        files.push(file);
                    }
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping unreadable entry: {}", _e);
                }
            }
        }
    }
    Ok(files)
}
