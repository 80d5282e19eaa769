use crate::errors::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects the files a script should touch under one root.
///
/// A file is kept when its name is in `file_names` or its extension is in
/// `extensions`. Directories named in `excluded_dirs` are pruned before
/// descending, so nothing under `node_modules` is ever read.
pub struct FileWalker {
    root: PathBuf,
    file_names: Vec<String>,
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_names: vec![],
            extensions: vec![],
            excluded_dirs: vec![
                "node_modules".to_string(),
                ".next".to_string(),
                ".git".to_string(),
            ],
            ignore_patterns: vec![],
        }
    }

    pub fn with_file_names(mut self, names: Vec<String>) -> Self {
        self.file_names = names;
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.excluded_dirs = dirs;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !super::dir_exists(&self.root) {
            return Err(Error::file_system(
                format!("directory not found: {}", self.root.display()),
                &self.root,
            ));
        }

        let patterns = self
            .ignore_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let excluded = self.excluded_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .parents(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                !(is_dir
                    && excluded
                        .iter()
                        .any(|d| entry.file_name().to_string_lossy() == d.as_str()))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| Error::file_system(e.to_string(), &self.root))?;
            let path = entry.path();

            if path.is_file() && self.should_process(path, &patterns) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        log::debug!("{} candidate files under {}", files.len(), self.root.display());
        Ok(files)
    }

    fn should_process(&self, path: &Path, patterns: &[glob::Pattern]) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        let wanted = self.file_names.iter().any(|n| *n == name)
            || self.extensions.iter().any(|e| *e == ext);
        if !wanted {
            return false;
        }

        let path_str = path.to_string_lossy();
        !patterns.iter().any(|p| p.matches(&path_str))
    }
}

pub fn find_files(root: &Path, file_names: &[&str]) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_file_names(file_names.iter().map(|s| s.to_string()).collect())
        .walk()
}
