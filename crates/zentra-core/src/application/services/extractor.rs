//! Compares the declared models with the files already generated.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::naming::TSX_EXTENSION;
use crate::domain::pair::canonicalize;
use crate::domain::{
    LibraryNamePair, Manifest, ModelFileStorage, ModelStorage, PAGES_FOLDER, ProjectPaths,
};
use crate::error::ZentraResult;

/// Result of comparing declared and generated components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The generated components already match the manifest.
    NoNewComponents { existing: Vec<LibraryNamePair> },
    Changes(ModelStorage),
}

pub struct LocalExtractor<'a> {
    filesystem: &'a dyn Filesystem,
    paths: &'a ProjectPaths,
}

impl<'a> LocalExtractor<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, paths: &'a ProjectPaths) -> Self {
        Self { filesystem, paths }
    }

    pub fn user_models(&self, manifest: &Manifest) -> Vec<LibraryNamePair> {
        manifest.component_pairs()
    }

    pub fn user_pages(&self, manifest: &Manifest) -> Vec<LibraryNamePair> {
        manifest.page_pairs()
    }

    /// `(folder, filename)` for every file exactly two levels below the
    /// generated components folder.
    pub fn existing_models(&self) -> ZentraResult<Vec<LibraryNamePair>> {
        let files = self.filesystem.list_files(&self.paths.components())?;
        let mut pairs: Vec<LibraryNamePair> = files
            .iter()
            .filter_map(|path| two_level_pair(path))
            .collect();
        canonicalize(&mut pairs);
        Ok(pairs)
    }

    /// Page files directly inside the generated pages folder.
    pub fn existing_pages(&self) -> ZentraResult<Vec<LibraryNamePair>> {
        let files = self.filesystem.list_files(&self.paths.pages())?;
        let mut pairs: Vec<LibraryNamePair> = files
            .iter()
            .filter(|path| path.components().count() == 1)
            .filter_map(|path| path.to_str())
            .filter(|name| name.ends_with(TSX_EXTENSION))
            .map(|name| LibraryNamePair::new(PAGES_FOLDER, name))
            .collect();
        canonicalize(&mut pairs);
        Ok(pairs)
    }

    /// Split two pair lists into `(add, remove)`.
    ///
    /// `add` keeps the order of `user`, `remove` keeps the order of
    /// `existing`.
    pub fn model_changes(
        &self,
        existing: &[LibraryNamePair],
        user: &[LibraryNamePair],
    ) -> (Vec<LibraryNamePair>, Vec<LibraryNamePair>) {
        let add = user
            .iter()
            .filter(|pair| !existing.contains(pair))
            .cloned()
            .collect();
        let remove = existing
            .iter()
            .filter(|pair| !user.contains(pair))
            .cloned()
            .collect();
        (add, remove)
    }

    pub fn detect(&self, manifest: &Manifest) -> ZentraResult<Detection> {
        let user = self.user_models(manifest);
        let existing = self.existing_models()?;

        if user == existing {
            debug!(count = existing.len(), "generated components are current");
            return Ok(Detection::NoNewComponents { existing });
        }

        let (generate, remove) = self.model_changes(&existing, &user);
        let components = ModelFileStorage::new(existing, generate, remove);
        let pages = self.page_storage(manifest)?;

        Ok(Detection::Changes(ModelStorage { pages, components }))
    }

    pub fn page_storage(&self, manifest: &Manifest) -> ZentraResult<ModelFileStorage> {
        let user = self.user_pages(manifest);
        let existing = self.existing_pages()?;
        let (generate, remove) = self.model_changes(&existing, &user);
        Ok(ModelFileStorage::new(existing, generate, remove))
    }
}

fn two_level_pair(path: &Path) -> Option<LibraryNamePair> {
    let parts: Vec<&str> = path
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;

    match parts.as_slice() {
        [folder, filename] => Some(LibraryNamePair::new(*folder, *filename)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::path::PathBuf;

    fn pair(lib: &str, name: &str) -> LibraryNamePair {
        LibraryNamePair::new(lib, name)
    }

    fn extractor_with(files: Vec<&'static str>) -> (MockFilesystem, ProjectPaths) {
        let mut fs = MockFilesystem::new();
        fs.expect_list_files()
            .returning(move |_| Ok(files.iter().map(PathBuf::from).collect()));
        (fs, ProjectPaths::new("/app"))
    }

    #[test]
    fn model_changes_splits_add_and_remove() {
        let (fs, paths) = extractor_with(vec![]);
        let extractor = LocalExtractor::new(&fs, &paths);

        let existing = vec![
            pair("ui", "input.tsx"),
            pair("ui", "form.tsx"),
            pair("uploadthing", "file-upload.tsx"),
            pair("ui", "button.tsx"),
        ];
        let user = vec![
            pair("ui", "card.tsx"),
            pair("ui", "form.tsx"),
            pair("ui", "button.tsx"),
            pair("ui", "label.tsx"),
        ];

        let (add, remove) = extractor.model_changes(&existing, &user);
        assert_eq!(add, vec![pair("ui", "card.tsx"), pair("ui", "label.tsx")]);
        assert_eq!(
            remove,
            vec![pair("ui", "input.tsx"), pair("uploadthing", "file-upload.tsx")]
        );
    }

    #[test]
    fn model_changes_of_equal_lists_is_empty() {
        let (fs, paths) = extractor_with(vec![]);
        let extractor = LocalExtractor::new(&fs, &paths);
        let list = vec![pair("ui", "button.tsx")];
        let (add, remove) = extractor.model_changes(&list, &list);
        assert!(add.is_empty());
        assert!(remove.is_empty());
    }

    #[test]
    fn existing_models_keeps_two_level_files() {
        let (fs, paths) = extractor_with(vec![
            "ui/button.tsx",
            "stray.tsx",
            "uploadthing/file-upload.tsx",
            "ui/nested/deep.tsx",
        ]);
        let extractor = LocalExtractor::new(&fs, &paths);
        assert_eq!(
            extractor.existing_models().unwrap(),
            vec![pair("ui", "button.tsx"), pair("uploadthing", "file-upload.tsx")]
        );
    }

    #[test]
    fn existing_pages_are_direct_tsx_files() {
        let (fs, paths) = extractor_with(vec!["landing.tsx", "notes.txt", "old/page.tsx"]);
        let extractor = LocalExtractor::new(&fs, &paths);
        assert_eq!(
            extractor.existing_pages().unwrap(),
            vec![pair(PAGES_FOLDER, "landing.tsx")]
        );
    }
}
