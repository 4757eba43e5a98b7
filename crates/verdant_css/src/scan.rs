//! Content scanning
//!
//! Walks the files matched by the `content` globs and collects every
//! class-like token in them. A rule survives pruning when its owner class is
//! one of those tokens.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::{CssError, Result};

/// Directories never descended into
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[".git", ".hg", ".svn", "node_modules", "target"];

/// Files larger than this are skipped (10MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"[A-Za-z0-9_\-./%]+").expect("token regex is valid"))
}

/// The set of class-like tokens found in content
#[derive(Clone, Debug, Default)]
pub struct ContentSet {
    tokens: FxHashSet<String>,
    files: usize,
}

impl ContentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenise a single piece of text
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::new();
        set.add_text(text);
        set
    }

    /// Add every token in `text`
    ///
    /// A token ending in `.` (end of a sentence, `class="a b."`) is also
    /// recorded without it.
    pub fn add_text(&mut self, text: &str) {
        for m in token_regex().find_iter(text) {
            let token = m.as_str();
            let trimmed = token.trim_end_matches('.');
            if trimmed.len() != token.len() && !trimmed.is_empty() {
                self.tokens.insert(trimmed.to_string());
            }
            self.tokens.insert(token.to_string());
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of files that contributed tokens
    pub fn files(&self) -> usize {
        self.files
    }
}

/// Walks a root directory and reads every file matching the content globs
#[derive(Debug)]
pub struct ContentScanner {
    root: PathBuf,
    patterns: Vec<String>,
    globs: GlobSet,
    max_file_size: u64,
}

impl ContentScanner {
    /// Compile `patterns` relative to `root`
    ///
    /// A leading `./` is ignored; `*` never crosses a path separator.
    pub fn new(root: impl Into<PathBuf>, patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let normalized = normalize_pattern(pattern);
            let glob = GlobBuilder::new(normalized)
                .literal_separator(true)
                .build()
                .map_err(|source| CssError::InvalidGlob {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }
        let globs = builder.build().map_err(|source| CssError::InvalidGlob {
            pattern: patterns.join(", "),
            source,
        })?;

        Ok(Self {
            root: root.into(),
            patterns: patterns.to_vec(),
            globs,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        })
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether a path relative to the root is content
    pub fn is_match(&self, relative: &Path) -> bool {
        self.globs.is_match(relative)
    }

    /// Matching files, sorted by path
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_ignored_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                CssError::io(path, err.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            if self.globs.is_match(relative) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Read every matching file into a token set
    pub fn scan(&self) -> Result<ContentSet> {
        let mut set = ContentSet::new();
        for path in self.files()? {
            let size = fs::metadata(&path)
                .map_err(|err| CssError::io(&path, err))?
                .len();
            if size > self.max_file_size {
                debug!(path = %path.display(), size, "skipping oversized content file");
                continue;
            }

            let bytes = fs::read(&path).map_err(|err| CssError::io(&path, err))?;
            set.add_text(&String::from_utf8_lossy(&bytes));
            set.files += 1;
        }

        info!(
            root = %self.root.display(),
            files = set.files,
            tokens = set.len(),
            "scanned content"
        );
        Ok(set)
    }
}

fn normalize_pattern(pattern: &str) -> &str {
    let trimmed = pattern.trim();
    trimmed.strip_prefix("./").unwrap_or(trimmed)
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| DEFAULT_IGNORE_DIRS.contains(&name))
}
