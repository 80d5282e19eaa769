pub mod walker;

pub use walker::{find_files, FileWalker};

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io_at(e, path))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io_at(e, path))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.ts");
        let err = read_file(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.ts"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("route.ts");
        write_file(&path, "export {}\n").unwrap();
        assert!(file_exists(&path));
        assert!(dir_exists(dir.path()));
        assert_eq!(read_file(&path).unwrap(), "export {}\n");
    }
}
