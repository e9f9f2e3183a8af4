//! Zentra Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Zentra
//! component generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            zentra-cli (CLI)             │
//! │       (init, generate, list, ...)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (GenerateService, SetupService, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Filesystem, ContentRetriever, Parser)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    zentra-adapters (Infrastructure)     │
//! │ (LocalFilesystem, GithubRetriever, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Component, Manifest, JSX builders)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zentra_core::prelude::*;
//!
//! let service = GenerateService::new(
//!     filesystem, // impl Filesystem
//!     retriever,  // impl ContentRetriever
//!     parser,     // impl ManifestParser
//!     ProjectPaths::new("."),
//!     "https://github.com/Achronus/zentra/tree/main/components",
//! );
//! let outcome = service.run(&SilentListener, ALL_TARGET)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ALL_TARGET, ApplicationError, CatalogEntry, CatalogService, GenerateOutcome,
        GenerateReport, GenerateService, SetupService, SetupStatus, SilentListener, Stage,
        ports::{ContentRetriever, ContentType, Filesystem, ManifestParser, StageListener, TreeEntry},
    };
    pub use crate::domain::{
        Component, ConfigExistStorage, LibraryNamePair, Manifest, ModelFileStorage, ModelStorage,
        PageBuilder, ProjectPaths,
    };
    pub use crate::error::{Context, ZentraError, ZentraResult};
}

/// Default location of the remote component templates.
pub const DEFAULT_BASE_URL: &str = "https://github.com/Achronus/zentra/tree/main/components";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
