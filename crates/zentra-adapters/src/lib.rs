//! Infrastructure adapters for Zentra.
//!
//! This crate implements the ports defined in `zentra-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod manifest;
pub mod retriever;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::{STARTER_MANIFEST, TomlManifestParser};
pub use retriever::{DEFAULT_TIMEOUT, GithubRetriever, MemoryRetriever};
