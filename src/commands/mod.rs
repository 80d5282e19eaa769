//! One module per maintenance script.
//!
//! Available commands:
//! - **params-promise**: await `params` in Next.js route handlers and pages
//! - **fix-stats-mock**: backfill `getUserStats` mock literals in tests
//! - **merge-locales**: deep-merge translation additions into message catalogs
//! - **clean-scenes**: normalize `category:` values in scene catalog files
//! - **splice**: replace generated component functions from fragment files
//! - **init**: write a `.codemend.toml` holding the built-in defaults
//!
//! The scripts share nothing but [`RunContext`].

pub mod clean_scenes;
pub mod init;
pub mod merge_locales;
pub mod params_promise;
pub mod splice_component;
pub mod stats_mock;

pub use clean_scenes::clean_scenes;
pub use init::init_config;
pub use merge_locales::merge_locales;
pub use params_promise::migrate_params;
pub use splice_component::splice_components;
pub use stats_mock::fix_stats_mocks;

use colored::*;
use std::path::{Path, PathBuf};

/// Where a script runs and whether it may write.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub root: PathBuf,
    pub dry_run: bool,
}

impl RunContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolve a configured path against the root; absolute paths pass through.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Path shown in status lines, relative to the root when possible.
    pub fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }

    pub(crate) fn report_modified(&self, path: &Path) {
        let verb = if self.dry_run { "Would update" } else { "Updated" };
        println!("{} {}", verb.green(), self.display_path(path));
    }
}
