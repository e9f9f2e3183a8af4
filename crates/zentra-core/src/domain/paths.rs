//! Layout of a Zentra project on disk.

use std::path::{Path, PathBuf};

use crate::domain::pair::LibraryNamePair;

pub const ZENTRA_DIR: &str = "zentra";
pub const MODELS_DIR: &str = "models";
pub const MANIFEST_FILE: &str = "zentra.toml";
pub const ROOT_MARKER: &str = "zentra.root";
pub const GENERATED_DIR: &str = "generated";
pub const PAGES_DIR: &str = "pages";
pub const COMPONENTS_DIR: &str = "components";
pub const LIB_DIR: &str = "lib";

/// Absolute locations of every folder and file a run reads or writes,
/// resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn zentra(&self) -> PathBuf {
        self.root.join(ZENTRA_DIR)
    }

    /// `zentra/models`
    pub fn models(&self) -> PathBuf {
        self.zentra().join(MODELS_DIR)
    }

    /// `zentra/models/zentra.toml`
    pub fn manifest(&self) -> PathBuf {
        self.models().join(MANIFEST_FILE)
    }

    /// `zentra/models/zentra.root`
    pub fn root_marker(&self) -> PathBuf {
        self.models().join(ROOT_MARKER)
    }

    pub fn generated(&self) -> PathBuf {
        self.zentra().join(GENERATED_DIR)
    }

    pub fn pages(&self) -> PathBuf {
        self.generated().join(PAGES_DIR)
    }

    pub fn components(&self) -> PathBuf {
        self.generated().join(COMPONENTS_DIR)
    }

    /// Shared helper files, such as the uploadthing core.
    pub fn lib(&self) -> PathBuf {
        self.generated().join(LIB_DIR)
    }

    /// `components/{library}/{filename}`
    pub fn component_file(&self, pair: &LibraryNamePair) -> PathBuf {
        self.components().join(&pair.library).join(&pair.filename)
    }

    pub fn page_file(&self, pair: &LibraryNamePair) -> PathBuf {
        self.pages().join(&pair.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted() {
        let paths = ProjectPaths::new("/app");
        assert_eq!(paths.manifest(), PathBuf::from("/app/zentra/models/zentra.toml"));
        assert_eq!(
            paths.component_file(&LibraryNamePair::new("ui", "button.tsx")),
            PathBuf::from("/app/zentra/generated/components/ui/button.tsx")
        );
        assert_eq!(paths.lib(), PathBuf::from("/app/zentra/generated/lib"));
    }
}
