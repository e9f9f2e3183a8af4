//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::services::Stage;
use crate::domain::Manifest;
use crate::error::ZentraResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `zentra_adapters::filesystem::LocalFilesystem` (production)
/// - `zentra_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ZentraResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ZentraResult<()>;

    fn read_to_string(&self, path: &Path) -> ZentraResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Every file below `dir`, relative to it and sorted.
    ///
    /// A missing directory yields an empty list.
    fn list_files(&self, dir: &Path) -> ZentraResult<Vec<PathBuf>>;

    fn remove_file(&self, path: &Path) -> ZentraResult<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> ZentraResult<()>;
}

/// Kind of a remote listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Directory,
    File,
}

/// One entry of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    pub path: String,
    pub content_type: ContentType,
}

impl TreeEntry {
    pub fn is_file(&self) -> bool {
        self.content_type == ContentType::File
    }
}

/// Port for reading the remote component source.
///
/// Implemented by:
/// - `zentra_adapters::retriever::GithubRetriever` (production)
/// - `zentra_adapters::retriever::MemoryRetriever` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ContentRetriever: Send + Sync {
    /// Entries of the directory at `url`.
    fn list_directory(&self, url: &str) -> ZentraResult<Vec<TreeEntry>>;

    /// Raw lines of the file at `url`.
    fn file_lines(&self, url: &str) -> ZentraResult<Vec<String>>;
}

/// Port for the manifest format.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestParser: Send + Sync {
    /// Parse manifest text read from `path`.
    ///
    /// Syntax and schema problems are `ApplicationError::InvalidConfig`.
    fn parse(&self, path: &Path, source: &str) -> ZentraResult<Manifest>;

    /// Text of the manifest written by `zentra init`.
    fn starter(&self) -> String;
}

/// Receives progress notifications from the generate pipeline.
pub trait StageListener {
    fn started(&self, stage: Stage);

    fn finished(&self, stage: Stage, ok: bool);
}
