//! Generate Service - turns the manifest into generated files.
//!
//! Stages run strictly in order and the first failure ends the run:
//! 1. Check the configuration
//! 2. Detect model changes
//! 3. Retrieve new component templates
//! 4. Remove unused components
//! 5. Build the registered pages

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::application::ports::{ContentRetriever, Filesystem, ManifestParser, StageListener};
use crate::application::services::Stage;
use crate::application::services::builder::{BASE_FILE_TYPE, LocalBuilder};
use crate::application::services::config_check::ConfigChecker;
use crate::application::services::extractor::{Detection, LocalExtractor};
use crate::application::services::retrieval::{ListingCache, Retriever};
use crate::domain::{ModelFileStorage, ModelStorage, ProjectPaths};
use crate::error::ZentraResult;

/// The `generate` argument that selects every file.
pub const ALL_TARGET: &str = "all";

/// What a finished run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub storage: ModelStorage,
    pub pages_written: Vec<PathBuf>,
}

/// Successful end states of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Complete(GenerateReport),
    /// Components were already current. Pages are still rebuilt.
    NoNewComponents(GenerateReport),
}

impl GenerateOutcome {
    pub fn report(&self) -> &GenerateReport {
        match self {
            Self::Complete(report) | Self::NoNewComponents(report) => report,
        }
    }
}

pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    retriever: Box<dyn ContentRetriever>,
    parser: Box<dyn ManifestParser>,
    paths: ProjectPaths,
    base_url: String,
}

impl GenerateService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        retriever: Box<dyn ContentRetriever>,
        parser: Box<dyn ManifestParser>,
        paths: ProjectPaths,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            filesystem,
            retriever,
            parser,
            paths,
            base_url: base_url.into(),
        }
    }

    /// Run the generate pipeline.
    ///
    /// Only [`ALL_TARGET`] is meaningful for `target`; any other value
    /// generates everything as well.
    #[instrument(
        skip_all,
        fields(root = %self.paths.root().display(), target = %target)
    )]
    pub fn run(
        &self,
        listener: &dyn StageListener,
        target: &str,
    ) -> ZentraResult<GenerateOutcome> {
        if target != ALL_TARGET {
            debug!(target, "single file generation is not supported, generating all");
        }

        let filesystem = self.filesystem.as_ref();
        let checker = ConfigChecker::new(filesystem, self.parser.as_ref(), &self.paths);
        let manifest = stage(listener, Stage::CheckConfig, || checker.check())?;

        let extractor = LocalExtractor::new(filesystem, &self.paths);
        let (storage, changed) = stage(listener, Stage::DetectModels, || {
            Ok(match extractor.detect(&manifest)? {
                Detection::NoNewComponents { existing } => {
                    let components = ModelFileStorage::new(existing, Vec::new(), Vec::new());
                    let pages = extractor.page_storage(&manifest)?;
                    (ModelStorage { pages, components }, false)
                }
                Detection::Changes(storage) => (storage, true),
            })
        })?;

        let cache = ListingCache::new();
        let retriever = Retriever::new(self.retriever.as_ref(), &cache);
        let builder = LocalBuilder::new(filesystem, &retriever, &self.paths, &self.base_url);

        if changed {
            let components = &storage.components;
            stage(listener, Stage::RetrieveAssets, || {
                if components.counts.generate > 0 {
                    builder.make_dirs(components)?;
                    builder.create_base_files(components, BASE_FILE_TYPE)?;
                }
                Ok(())
            })?;
            stage(listener, Stage::RemoveModels, || {
                if components.counts.remove > 0 {
                    builder.remove_models(components)?;
                }
                Ok(())
            })?;
        }

        let pages_written = stage(listener, Stage::BuildPages, || {
            builder.write_pages(&manifest, &storage.pages)
        })?;

        info!(
            generated = storage.components.counts.generate,
            removed = storage.components.counts.remove,
            pages = pages_written.len(),
            "Generation finished"
        );

        let report = GenerateReport {
            storage,
            pages_written,
        };
        Ok(if changed {
            GenerateOutcome::Complete(report)
        } else {
            GenerateOutcome::NoNewComponents(report)
        })
    }
}

fn stage<T>(
    listener: &dyn StageListener,
    stage: Stage,
    f: impl FnOnce() -> ZentraResult<T>,
) -> ZentraResult<T> {
    listener.started(stage);
    let result = f();
    listener.finished(stage, result.is_ok());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockContentRetriever, MockFilesystem, MockManifestParser};
    use crate::application::services::SilentListener;
    use crate::error::ZentraError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingListener {
        events: Mutex<Vec<(Stage, Option<bool>)>>,
    }

    impl StageListener for RecordingListener {
        fn started(&self, stage: Stage) {
            self.events.lock().unwrap().push((stage, None));
        }

        fn finished(&self, stage: Stage, ok: bool) {
            self.events.lock().unwrap().push((stage, Some(ok)));
        }
    }

    #[test]
    fn failed_check_stops_the_pipeline() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);

        let service = GenerateService::new(
            Box::new(fs),
            Box::new(MockContentRetriever::new()),
            Box::new(MockManifestParser::new()),
            ProjectPaths::new("/app"),
            "https://x.dev/components",
        );

        let listener = RecordingListener::default();
        let err = service.run(&listener, ALL_TARGET).unwrap_err();
        assert!(matches!(
            err,
            ZentraError::Application(ApplicationError::ModelsDirMissing { .. })
        ));
        assert_eq!(
            *listener.events.lock().unwrap(),
            vec![(Stage::CheckConfig, None), (Stage::CheckConfig, Some(false))]
        );
    }

    #[test]
    fn page_listing_failure_is_reported_by_detect_stage() {
        let manifest: crate::domain::Manifest = toml::from_str(
            "[app]\nregister = [\"Landing\"]\n\n[[pages]]\nname = \"Landing\"\n\n\
             [[pages.blocks]]\nname = \"Hero\"\n\n[[pages.blocks.components]]\n\
             type = \"Button\"\ntext = \"Go\"\n",
        )
        .expect("manifest should parse");

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("[app]\nregister = [\"Landing\"]\n".into()));
        fs.expect_list_files().returning(|dir| {
            if dir.ends_with("components") {
                Ok(vec![PathBuf::from("ui/button.tsx")])
            } else {
                Err(ApplicationError::FilesystemError {
                    path: dir.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            }
        });
        let mut parser = MockManifestParser::new();
        parser
            .expect_parse()
            .returning(move |_, _| Ok(manifest.clone()));

        let service = GenerateService::new(
            Box::new(fs),
            Box::new(MockContentRetriever::new()),
            Box::new(parser),
            ProjectPaths::new("/app"),
            "https://x.dev/components",
        );

        let listener = RecordingListener::default();
        let err = service.run(&listener, ALL_TARGET).unwrap_err();
        assert!(matches!(
            err,
            ZentraError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert_eq!(
            *listener.events.lock().unwrap(),
            vec![
                (Stage::CheckConfig, None),
                (Stage::CheckConfig, Some(true)),
                (Stage::DetectModels, None),
                (Stage::DetectModels, Some(false)),
            ]
        );
    }

    #[test]
    fn outcome_exposes_report() {
        let report = GenerateReport::default();
        let outcome = GenerateOutcome::NoNewComponents(report.clone());
        assert_eq!(outcome.report(), &report);
    }

    #[test]
    fn stage_passes_result_through() {
        let value = stage(&SilentListener, Stage::BuildPages, || Ok(7)).unwrap();
        assert_eq!(value, 7);
    }
}
