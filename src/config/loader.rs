use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CodemendConfig;
use crate::errors::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".codemend.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<CodemendConfig> {
    let config = toml::from_str::<CodemendConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &CodemendConfig) -> Result<()> {
    if config.params_promise.file_names.is_empty() {
        return Err(Error::Configuration(
            "params_promise.file_names must not be empty".to_string(),
        ));
    }
    if config.scenes.categories.is_empty() {
        return Err(Error::Configuration(
            "scenes.categories must not be empty".to_string(),
        ));
    }
    if let Some(bad) = config
        .scenes
        .categories
        .iter()
        .find(|c| c.is_empty() || !c.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_'))
    {
        return Err(Error::Configuration(format!(
            "scene category `{}` must be a non-empty identifier",
            bad
        )));
    }
    for job in &config.splice.jobs {
        if job.function.trim().is_empty() || job.comment.trim().is_empty() {
            return Err(Error::Configuration(format!(
                "splice job for {} needs both `function` and `comment`",
                job.target.display()
            )));
        }
    }
    Ok(())
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Absolute form of `start`, so ancestors of a relative root like `.` exist.
pub(crate) fn search_start(start: &Path) -> PathBuf {
    if let Ok(path) = fs::canonicalize(start) {
        return path;
    }
    match std::env::current_dir() {
        Ok(dir) => dir.join(start),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Searching from {} only.",
                e,
                start.display()
            );
            start.to_path_buf()
        }
    }
}

/// Find `.codemend.toml` in `start` or one of its ancestors.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    directory_ancestors(search_start(start), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load configuration for a run.
///
/// An explicit path must exist. Without one, the nearest `.codemend.toml`
/// above `start` is used, and the built-in defaults when there is none.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<CodemendConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover_config(start) {
            Some(path) => path,
            None => {
                log::debug!(
                    "No {} found after checking {} directories. Using defaults.",
                    CONFIG_FILE_NAME,
                    MAX_TRAVERSAL_DEPTH
                );
                return Ok(CodemendConfig::default());
            }
        },
    };

    let contents = read_config_file(&path).map_err(|e| Error::io_at(e, &path))?;
    let config = parse_and_validate_config(&contents).context(path.display().to_string())?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
