//! Plain data containers passed between pipeline stages.
//!
//! Each generation run builds fresh storage values; nothing here is shared
//! across invocations.

use serde::Serialize;

use crate::domain::pair::{LibraryNamePair, canonicalize};

/// How many files a run adds and removes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountStorage {
    pub generate: usize,
    pub remove: usize,
}

/// Add/remove/existing pair sets for one model category.
///
/// Invariant: `existing_next = existing - remove + generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelFileStorage {
    pub generate: Vec<LibraryNamePair>,
    pub remove: Vec<LibraryNamePair>,
    pub existing: Vec<LibraryNamePair>,
    pub counts: CountStorage,
}

impl ModelFileStorage {
    /// Build a storage with counts derived from the list lengths.
    pub fn new(
        existing: Vec<LibraryNamePair>,
        generate: Vec<LibraryNamePair>,
        remove: Vec<LibraryNamePair>,
    ) -> Self {
        let counts = CountStorage {
            generate: generate.len(),
            remove: remove.len(),
        };
        Self {
            generate,
            remove,
            existing,
            counts,
        }
    }

    /// The pairs that will exist once this storage has been applied.
    pub fn next_existing(&self) -> Vec<LibraryNamePair> {
        let mut next: Vec<LibraryNamePair> = self
            .existing
            .iter()
            .filter(|pair| !self.remove.contains(pair))
            .cloned()
            .chain(self.generate.iter().cloned())
            .collect();
        canonicalize(&mut next);
        next
    }

    /// `true` when nothing is added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.generate.is_empty() && self.remove.is_empty()
    }
}

/// Per-category storage reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelStorage {
    pub pages: ModelFileStorage,
    pub components: ModelFileStorage,
}

/// Which parts of a Zentra project are already in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigExistStorage {
    pub models_folder_exists: bool,
    pub config_file_exists: bool,
    pub config_file_valid: bool,
    pub root_exists: bool,
}

impl ConfigExistStorage {
    /// `true` when the models folder and a valid manifest are present.
    pub fn app_configured(&self) -> bool {
        self.models_folder_exists && self.config_file_exists && self.config_file_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(lib: &str, name: &str) -> LibraryNamePair {
        LibraryNamePair::new(lib, name)
    }

    #[test]
    fn counts_follow_list_lengths() {
        let storage = ModelFileStorage::new(
            vec![pair("ui", "input.tsx")],
            vec![pair("ui", "card.tsx"), pair("ui", "badge.tsx")],
            vec![pair("ui", "input.tsx")],
        );
        assert_eq!(storage.counts, CountStorage { generate: 2, remove: 1 });
    }

    #[test]
    fn next_existing_applies_changes() {
        let storage = ModelFileStorage::new(
            vec![pair("ui", "input.tsx"), pair("ui", "form.tsx")],
            vec![pair("ui", "card.tsx")],
            vec![pair("ui", "input.tsx")],
        );
        assert_eq!(
            storage.next_existing(),
            vec![pair("ui", "card.tsx"), pair("ui", "form.tsx")]
        );
    }

    #[test]
    fn app_configured_needs_valid_config() {
        let mut exists = ConfigExistStorage {
            models_folder_exists: true,
            config_file_exists: true,
            ..Default::default()
        };
        assert!(!exists.app_configured());
        exists.config_file_valid = true;
        assert!(exists.app_configured());
    }
}
