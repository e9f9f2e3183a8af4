//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;
use zentra_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ZentraError, ZentraResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ZentraResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ZentraResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ZentraResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> ZentraResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: format!("Failed to walk directory: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(dir) {
                files.push(relative.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    fn remove_file(&self, path: &Path) -> ZentraResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir(&self, path: &Path) -> ZentraResult<()> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ZentraError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_files_is_recursive_and_relative() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = temp.path();

        fs.create_dir_all(&root.join("ui")).unwrap();
        fs.create_dir_all(&root.join("uploadthing")).unwrap();
        fs.write_file(&root.join("ui/card.tsx"), "card").unwrap();
        fs.write_file(&root.join("ui/button.tsx"), "button").unwrap();
        fs.write_file(&root.join("uploadthing/file-upload.tsx"), "upload")
            .unwrap();

        assert_eq!(
            fs.list_files(root).unwrap(),
            vec![
                PathBuf::from("ui/button.tsx"),
                PathBuf::from("ui/card.tsx"),
                PathBuf::from("uploadthing/file-upload.tsx"),
            ]
        );
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.list_files(&temp.path().join("absent")).unwrap().is_empty());
    }

    #[test]
    fn remove_dir_rejects_non_empty_directory() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("ui");
        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("card.tsx"), "card").unwrap();

        let err = fs.remove_dir(&dir).unwrap_err();
        assert!(err.to_string().contains("Failed to remove directory"));

        fs.remove_file(&dir.join("card.tsx")).unwrap();
        fs.remove_dir(&dir).unwrap();
        assert!(!fs.exists(&dir));
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&temp.path().join("zentra.toml"))
            .unwrap_err();
        assert!(matches!(
            err,
            ZentraError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
