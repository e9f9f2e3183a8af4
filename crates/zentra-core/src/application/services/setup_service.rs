//! Setup Service - makes a directory a Zentra project.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, ManifestParser};
use crate::application::services::config_check::ConfigChecker;
use crate::domain::{ConfigExistStorage, ProjectPaths};
use crate::error::ZentraResult;

/// Where a project stands before `init` writes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStatus {
    /// Some parts are missing; holds what already exists.
    NeedsSetup(ConfigExistStorage),
    AlreadyConfigured,
}

pub struct SetupService {
    filesystem: Box<dyn Filesystem>,
    parser: Box<dyn ManifestParser>,
    paths: ProjectPaths,
}

impl SetupService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        parser: Box<dyn ManifestParser>,
        paths: ProjectPaths,
    ) -> Self {
        Self {
            filesystem,
            parser,
            paths,
        }
    }

    fn checker(&self) -> ConfigChecker<'_> {
        ConfigChecker::new(self.filesystem.as_ref(), self.parser.as_ref(), &self.paths)
    }

    /// Inspect the project.
    ///
    /// An invalid manifest is reported as its load error. A valid
    /// manifest without components is [`ApplicationError::NoComponents`].
    pub fn status(&self) -> ZentraResult<SetupStatus> {
        let checker = self.checker();
        let exists = checker.exists_storage();

        if exists.config_file_exists && !exists.config_file_valid {
            checker.load()?;
        }

        if exists.app_configured() {
            if !checker.load()?.has_components() {
                return Err(ApplicationError::NoComponents.into());
            }
            return Ok(SetupStatus::AlreadyConfigured);
        }

        Ok(SetupStatus::NeedsSetup(exists))
    }

    /// Create whatever `exists` reports missing and the generated folders.
    ///
    /// Returns the paths created.
    #[instrument(skip_all, fields(root = %self.paths.root().display()))]
    pub fn initialise(&self, exists: &ConfigExistStorage) -> ZentraResult<Vec<PathBuf>> {
        let mut created = Vec::new();

        if !exists.models_folder_exists {
            self.filesystem.create_dir_all(&self.paths.models())?;
            created.push(self.paths.models());
        }

        if !exists.config_file_exists {
            self.filesystem
                .write_file(&self.paths.manifest(), &self.parser.starter())?;
            created.push(self.paths.manifest());
        }

        if !exists.root_exists {
            self.filesystem.write_file(&self.paths.root_marker(), "")?;
            created.push(self.paths.root_marker());
        }

        for dir in [self.paths.pages(), self.paths.components(), self.paths.lib()] {
            if !self.filesystem.is_dir(&dir) {
                self.filesystem.create_dir_all(&dir)?;
                created.push(dir);
            }
        }

        info!(created = created.len(), "Project initialised");
        Ok(created)
    }
}
