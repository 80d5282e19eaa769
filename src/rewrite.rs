//! Regex substitution passes and the read → transform → write-if-changed loop
//! every script is built on.

use crate::errors::Result;
use crate::io;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// One named find/replace pass over a whole file.
#[derive(Debug, Clone)]
pub struct Substitution {
    pub name: &'static str,
    pub regex: Regex,
    pub replacement: String,
}

impl Substitution {
    pub fn new(name: &'static str, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }
}

/// Run every pass in order. Borrowed when nothing matched.
pub fn apply_all<'t>(text: &'t str, passes: &[Substitution]) -> Cow<'t, str> {
    let mut current = Cow::Borrowed(text);
    for pass in passes {
        let next = match pass.apply(&current) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = next {
            log::trace!("pass `{}` matched", pass.name);
            current = Cow::Owned(next);
        }
    }
    current
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Modified,
}

/// Read the whole file, transform it, and write it back only if it changed.
///
/// In dry-run mode a changed file is still reported as `Modified` but left on disk
/// as it was.
pub fn rewrite_file<F>(path: &Path, dry_run: bool, transform: F) -> Result<FileOutcome>
where
    F: FnOnce(&str) -> Result<String>,
{
    let content = io::read_file(path)?;
    let updated = transform(&content)?;

    if updated == content {
        return Ok(FileOutcome::Unchanged);
    }

    if dry_run {
        log::info!("would update {}", path.display());
    } else {
        io::write_file(path, &updated)?;
        log::debug!("wrote {}", path.display());
    }
    Ok(FileOutcome::Modified)
}

/// Counters for the status line printed at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub modified: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.scanned += 1;
        if outcome == FileOutcome::Modified {
            self.modified += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.scanned += 1;
        self.failed += 1;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.modified == 1 { "file" } else { "files" };
        write!(f, "{} {} modified ({} scanned", self.modified, noun, self.scanned)?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        write!(f, ")")
    }
}
