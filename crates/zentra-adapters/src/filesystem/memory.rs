//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use zentra_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ZentraResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents, so a test can hand one clone to a
/// service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Every stored file path, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn with_write<T>(
        &self,
        f: impl FnOnce(&mut MemoryFilesystemInner) -> ZentraResult<T>,
    ) -> ZentraResult<T> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        f(&mut inner)
    }

    fn with_read<T: Default>(&self, f: impl FnOnce(&MemoryFilesystemInner) -> T) -> T {
        self.inner.read().map(|inner| f(&inner)).unwrap_or_default()
    }
}

fn not_found(path: &Path, reason: &str) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ZentraResult<()> {
        self.with_write(|inner| {
            let mut current = PathBuf::new();
            for component in path.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
            Ok(())
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ZentraResult<()> {
        self.with_write(|inner| {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                    return Err(not_found(path, "Parent directory does not exist").into());
                }
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
            Ok(())
        })
    }

    fn read_to_string(&self, path: &Path) -> ZentraResult<String> {
        self.with_read(|inner| inner.files.get(path).cloned())
            .ok_or_else(|| not_found(path, "No such file").into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.with_read(|inner| {
            inner.files.contains_key(path) || inner.directories.contains(path)
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.with_read(|inner| inner.directories.contains(path))
    }

    fn list_files(&self, dir: &Path) -> ZentraResult<Vec<PathBuf>> {
        Ok(self.with_read(|inner| {
            inner
                .files
                .keys()
                .filter_map(|path| path.strip_prefix(dir).ok())
                .map(Path::to_path_buf)
                .collect()
        }))
    }

    fn remove_file(&self, path: &Path) -> ZentraResult<()> {
        self.with_write(|inner| match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(not_found(path, "No such file").into()),
        })
    }

    fn remove_dir(&self, path: &Path) -> ZentraResult<()> {
        self.with_write(|inner| {
            let occupied = inner.files.keys().any(|p| p.starts_with(path))
                || inner
                    .directories
                    .iter()
                    .any(|d| d != path && d.starts_with(path));
            if occupied {
                return Err(not_found(path, "Directory not empty").into());
            }
            if !inner.directories.remove(path) {
                return Err(not_found(path, "No such directory").into());
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/app/a.tsx"), "a").is_err());

        fs.create_dir_all(Path::new("/app")).unwrap();
        fs.write_file(Path::new("/app/a.tsx"), "a").unwrap();
        assert_eq!(fs.read_file(Path::new("/app/a.tsx")).as_deref(), Some("a"));
    }

    #[test]
    fn clones_share_contents() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/app")).unwrap();
        assert!(other.is_dir(Path::new("/app")));
    }

    #[test]
    fn list_files_is_relative_and_sorted() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/c/ui")).unwrap();
        fs.write_file(Path::new("/c/ui/card.tsx"), "").unwrap();
        fs.write_file(Path::new("/c/ui/badge.tsx"), "").unwrap();
        assert_eq!(
            fs.list_files(Path::new("/c")).unwrap(),
            vec![PathBuf::from("ui/badge.tsx"), PathBuf::from("ui/card.tsx")]
        );
        assert!(fs.list_files(Path::new("/missing")).unwrap().is_empty());
    }

    #[test]
    fn remove_dir_only_when_empty() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/c/ui")).unwrap();
        fs.write_file(Path::new("/c/ui/card.tsx"), "").unwrap();

        assert!(fs.remove_dir(Path::new("/c/ui")).is_err());
        fs.remove_file(Path::new("/c/ui/card.tsx")).unwrap();
        fs.remove_dir(Path::new("/c/ui")).unwrap();
        assert!(!fs.exists(Path::new("/c/ui")));
        assert!(fs.is_dir(Path::new("/c")));
    }
}
