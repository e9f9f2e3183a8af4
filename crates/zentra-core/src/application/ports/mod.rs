//! Application ports (traits) for external dependencies.
//!
//! Adapters in `zentra-adapters` and the CLI implement these.
//!
//! - `Filesystem`: local file operations
//! - `ContentRetriever`: remote template listings and file bodies
//! - `ManifestParser`: turns manifest text into models
//! - `StageListener`: progress reporting for the generate pipeline

pub mod output;

pub use output::{
    ContentRetriever, ContentType, Filesystem, ManifestParser, StageListener, TreeEntry,
};

#[cfg(test)]
pub use output::{MockContentRetriever, MockFilesystem, MockManifestParser};
