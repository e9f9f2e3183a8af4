//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! `init`, `generate` and `list` use cases.

use std::fmt;

use crate::application::ports::StageListener;

pub mod builder;
pub mod catalog;
pub mod config_check;
pub mod extractor;
pub mod generate_service;
pub mod retrieval;
pub mod setup_service;

pub use builder::{BASE_FILE_TYPE, LIB_FILE_TYPE, LocalBuilder};
pub use catalog::{CatalogEntry, CatalogService};
pub use config_check::ConfigChecker;
pub use extractor::{Detection, LocalExtractor};
pub use generate_service::{ALL_TARGET, GenerateOutcome, GenerateReport, GenerateService};
pub use retrieval::{ListingCache, RemoteTree, Retriever, join_url};
pub use setup_service::{SetupService, SetupStatus};

/// Steps of the generate pipeline, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CheckConfig,
    DetectModels,
    RetrieveAssets,
    RemoveModels,
    BuildPages,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::CheckConfig,
        Stage::DetectModels,
        Stage::RetrieveAssets,
        Stage::RemoveModels,
        Stage::BuildPages,
    ];

    /// Progress line shown while the stage runs.
    pub fn description(self) -> &'static str {
        match self {
            Self::CheckConfig => "Checking config",
            Self::DetectModels => "Detecting model changes",
            Self::RetrieveAssets => "Retrieving component templates",
            Self::RemoveModels => "Removing unused components",
            Self::BuildPages => "Building pages",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentListener;

impl StageListener for SilentListener {
    fn started(&self, _stage: Stage) {}

    fn finished(&self, _stage: Stage, _ok: bool) {}
}
