//! Writes and removes generated files.
//!
//! Component templates are staged in memory before anything touches the
//! disk. A failed fetch leaves the project untouched and a failed write
//! removes the files this run created. Files from earlier runs are kept.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::application::ports::Filesystem;
use crate::application::services::retrieval::{Retriever, join_url};
use crate::domain::pair::folders;
use crate::domain::{
    ComponentDetails, DetailsLookup, Manifest, ModelFileStorage, PageBuilder, ProjectPaths,
    UPLOADTHING_LIBRARY,
};
use crate::error::ZentraResult;

/// Remote folder holding the plain component templates.
pub const BASE_FILE_TYPE: &str = "base";
/// Remote folder holding shared helper files.
pub const LIB_FILE_TYPE: &str = "lib";

#[derive(Debug)]
struct StagedFile {
    path: PathBuf,
    content: String,
}

pub struct LocalBuilder<'a> {
    filesystem: &'a dyn Filesystem,
    retriever: &'a Retriever<'a>,
    paths: &'a ProjectPaths,
    base_url: &'a str,
}

impl<'a> LocalBuilder<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        retriever: &'a Retriever<'a>,
        paths: &'a ProjectPaths,
        base_url: &'a str,
    ) -> Self {
        Self {
            filesystem,
            retriever,
            paths,
            base_url,
        }
    }

    /// Create `components/{folder}` for each folder being generated.
    pub fn make_dirs(&self, storage: &ModelFileStorage) -> ZentraResult<()> {
        for folder in folders(&storage.generate) {
            self.filesystem
                .create_dir_all(&self.paths.components().join(folder))?;
        }
        Ok(())
    }

    /// Fetch and write every pair in `storage.generate`.
    ///
    /// Returns the paths written.
    #[instrument(skip_all, fields(count = storage.generate.len(), file_type = %file_type))]
    pub fn create_base_files(
        &self,
        storage: &ModelFileStorage,
        file_type: &str,
    ) -> ZentraResult<Vec<PathBuf>> {
        let staged = self.stage_files(storage, file_type)?;
        debug!(files = staged.len(), "templates staged");
        self.commit(staged)
    }

    fn stage_files(
        &self,
        storage: &ModelFileStorage,
        file_type: &str,
    ) -> ZentraResult<Vec<StagedFile>> {
        let mut staged = Vec::with_capacity(storage.generate.len());

        for pair in &storage.generate {
            let url = join_url(self.base_url, &[&pair.library, file_type, &pair.filename]);
            staged.push(StagedFile {
                path: self.paths.component_file(pair),
                content: self.retriever.file_content(&url)?,
            });
        }

        let needs_lib = storage
            .generate
            .iter()
            .any(|pair| pair.library == UPLOADTHING_LIBRARY);
        if needs_lib {
            let lib_url = self.lib_url();
            for name in self.retriever.filenames(&lib_url)? {
                staged.push(StagedFile {
                    path: self.paths.lib().join(&name),
                    content: self.retriever.file_content(&join_url(&lib_url, &[&name]))?,
                });
            }
        }

        Ok(staged)
    }

    fn commit(&self, staged: Vec<StagedFile>) -> ZentraResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(staged.len());
        // Files this run brought into existence; only these are rolled back.
        let mut created = Vec::new();

        for file in staged {
            let existed = self.filesystem.exists(&file.path);
            match self.write(&file) {
                Ok(()) => {
                    if !existed {
                        created.push(file.path.clone());
                    }
                    written.push(file.path);
                }
                Err(e) => {
                    warn!(path = %file.path.display(), "Write failed, attempting rollback");
                    self.rollback(&created);
                    return Err(e);
                }
            }
        }

        info!(files = written.len(), "Successfully wrote all files");
        Ok(written)
    }

    fn write(&self, file: &StagedFile) -> ZentraResult<()> {
        if let Some(parent) = file.path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&file.path, &file.content)
    }

    /// Best-effort removal of files created by the current run.
    ///
    /// Files that were already on disk before the run stay in place.
    fn rollback(&self, created: &[PathBuf]) {
        let mut failed = 0;
        for path in created.iter().rev() {
            if let Err(e) = self.filesystem.remove_file(path) {
                failed += 1;
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        if failed == 0 {
            info!(files = created.len(), "Rollback successful");
        }
    }

    /// Delete every pair in `storage.remove` and tidy empty folders.
    #[instrument(skip_all, fields(count = storage.remove.len()))]
    pub fn remove_models(&self, storage: &ModelFileStorage) -> ZentraResult<()> {
        for pair in &storage.remove {
            let path = self.paths.component_file(pair);
            if self.filesystem.exists(&path) {
                self.filesystem.remove_file(&path)?;
            }
        }

        let removed_folders = folders(&storage.remove);
        for folder in &removed_folders {
            let dir = self.paths.components().join(folder);
            if self.filesystem.is_dir(&dir) && self.filesystem.list_files(&dir)?.is_empty() {
                debug!(folder = %folder, "removing empty folder");
                self.filesystem.remove_dir(&dir)?;
            }
        }

        let lib_still_used = storage
            .next_existing()
            .iter()
            .any(|pair| pair.library == UPLOADTHING_LIBRARY);
        if removed_folders.iter().any(|f| f == UPLOADTHING_LIBRARY) && !lib_still_used {
            for name in self.retriever.filenames(&self.lib_url())? {
                let path = self.paths.lib().join(name);
                if self.filesystem.exists(&path) {
                    self.filesystem.remove_file(&path)?;
                }
            }
        }

        Ok(())
    }

    /// Render every registered page and delete the stale ones.
    #[instrument(skip_all, fields(pages = manifest.app.register.len()))]
    pub fn write_pages(
        &self,
        manifest: &Manifest,
        pages: &ModelFileStorage,
    ) -> ZentraResult<Vec<PathBuf>> {
        let details = self.details_lookup(manifest)?;
        self.filesystem.create_dir_all(&self.paths.pages())?;

        let mut written = Vec::new();
        for page in manifest.registered_pages() {
            let path = self.paths.page_file(&page.pair());
            let source = PageBuilder::new(page).with_details(&details).build();
            self.filesystem.write_file(&path, &source)?;
            written.push(path);
        }

        for pair in &pages.remove {
            let path = self.paths.page_file(pair);
            if self.filesystem.exists(&path) {
                self.filesystem.remove_file(&path)?;
            }
        }

        Ok(written)
    }

    /// Export details of the generated component files the manifest uses.
    fn details_lookup(&self, manifest: &Manifest) -> ZentraResult<DetailsLookup> {
        let mut lookup = DetailsLookup::new();
        for pair in manifest.component_pairs() {
            let path = self.paths.component_file(&pair);
            let details = if self.filesystem.exists(&path) {
                let source = self.filesystem.read_to_string(&path)?;
                ComponentDetails::from_source(&pair.library, &pair.filename, &source)
            } else {
                ComponentDetails::without_children(&pair.library, &pair.filename)
            };
            lookup.insert(pair, details);
        }
        Ok(lookup)
    }

    fn lib_url(&self) -> String {
        join_url(self.base_url, &[UPLOADTHING_LIBRARY, LIB_FILE_TYPE])
    }
}
