//! Application layer for Zentra.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, SetupService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! model rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ALL_TARGET, CatalogEntry, CatalogService, GenerateOutcome, GenerateReport, GenerateService,
    SetupService, SetupStatus, SilentListener, Stage,
};

pub use ports::{ContentRetriever, ContentType, Filesystem, ManifestParser, StageListener, TreeEntry};

pub use error::ApplicationError;
