//! Library-name pairs: the primary key of every generated asset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(library_folder, filename)` tuple identifying one generated file,
/// e.g. `("ui", "accordion.tsx")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LibraryNamePair {
    pub library: String,
    pub filename: String,
}

impl LibraryNamePair {
    pub fn new(library: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            filename: filename.into(),
        }
    }
}

impl fmt::Display for LibraryNamePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.library, self.filename)
    }
}

impl<L: Into<String>, F: Into<String>> From<(L, F)> for LibraryNamePair {
    fn from((library, filename): (L, F)) -> Self {
        Self::new(library, filename)
    }
}

/// Sort and dedupe a list of pairs in place.
pub fn canonicalize(pairs: &mut Vec<LibraryNamePair>) {
    pairs.sort();
    pairs.dedup();
}

/// The distinct library folders of a set of pairs, in first-seen order.
pub fn folders(pairs: &[LibraryNamePair]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for pair in pairs {
        if !out.contains(&pair.library) {
            out.push(pair.library.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_slash() {
        assert_eq!(LibraryNamePair::new("ui", "card.tsx").to_string(), "ui/card.tsx");
    }

    #[test]
    fn canonicalize_sorts_and_dedupes() {
        let mut pairs: Vec<LibraryNamePair> = vec![
            ("ui", "input.tsx").into(),
            ("uploadthing", "file-upload.tsx").into(),
            ("ui", "card.tsx").into(),
            ("ui", "input.tsx").into(),
        ];
        canonicalize(&mut pairs);
        assert_eq!(
            pairs,
            vec![
                LibraryNamePair::new("ui", "card.tsx"),
                LibraryNamePair::new("ui", "input.tsx"),
                LibraryNamePair::new("uploadthing", "file-upload.tsx"),
            ]
        );
    }

    #[test]
    fn folders_are_distinct() {
        let pairs: Vec<LibraryNamePair> = vec![
            ("ui", "a.tsx").into(),
            ("uploadthing", "b.tsx").into(),
            ("ui", "c.tsx").into(),
        ];
        assert_eq!(folders(&pairs), vec!["ui", "uploadthing"]);
    }
}
