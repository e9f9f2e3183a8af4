//! Ordered checks on the project configuration.

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, ManifestParser};
use crate::domain::{ConfigExistStorage, Manifest, ProjectPaths};
use crate::error::ZentraResult;

/// Validates the models folder and manifest of a project.
///
/// The first failing check wins, in this order: models folder, manifest
/// file, empty manifest, parse and model rules, registered components.
pub struct ConfigChecker<'a> {
    filesystem: &'a dyn Filesystem,
    parser: &'a dyn ManifestParser,
    paths: &'a ProjectPaths,
}

impl<'a> ConfigChecker<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        parser: &'a dyn ManifestParser,
        paths: &'a ProjectPaths,
    ) -> Self {
        Self {
            filesystem,
            parser,
            paths,
        }
    }

    /// Read, parse and validate the manifest.
    ///
    /// Does not require any components to be registered.
    pub fn load(&self) -> ZentraResult<Manifest> {
        let models = self.paths.models();
        if !self.filesystem.is_dir(&models) {
            return Err(ApplicationError::ModelsDirMissing { path: models }.into());
        }

        let path = self.paths.manifest();
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ConfigMissing { path }.into());
        }

        let source = self.filesystem.read_to_string(&path)?;
        if source.trim().is_empty() {
            return Err(ApplicationError::ConfigEmpty { path }.into());
        }

        let manifest = self.parser.parse(&path, &source)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// [`load`](Self::load), then require at least one component.
    #[instrument(skip(self), fields(root = %self.paths.root().display()))]
    pub fn check(&self) -> ZentraResult<Manifest> {
        let manifest = self.load()?;
        if !manifest.has_components() {
            return Err(ApplicationError::NoComponents.into());
        }
        debug!(pages = manifest.app.register.len(), "configuration valid");
        Ok(manifest)
    }

    /// Which parts of the project are already present.
    pub fn exists_storage(&self) -> ConfigExistStorage {
        let manifest_path = self.paths.manifest();
        ConfigExistStorage {
            models_folder_exists: self.filesystem.is_dir(&self.paths.models()),
            config_file_exists: self.filesystem.exists(&manifest_path),
            config_file_valid: self.load().is_ok(),
            root_exists: self.filesystem.exists(&self.paths.root_marker()),
        }
    }
}
