//! Browse the templates available on the remote source.

use serde::Serialize;
use tracing::instrument;

use crate::application::ports::ContentRetriever;
use crate::application::services::retrieval::{ListingCache, Retriever};
use crate::error::ZentraResult;

/// One remote template, addressed as `library/file_type/filename`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CatalogEntry {
    pub library: String,
    pub file_type: String,
    pub filename: String,
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.library, self.file_type, self.filename)
    }
}

pub struct CatalogService {
    retriever: Box<dyn ContentRetriever>,
    base_url: String,
}

impl CatalogService {
    pub fn new(retriever: Box<dyn ContentRetriever>, base_url: impl Into<String>) -> Self {
        Self {
            retriever,
            base_url: base_url.into(),
        }
    }

    /// Every template three levels below the base URL, sorted.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub fn entries(&self) -> ZentraResult<Vec<CatalogEntry>> {
        let cache = ListingCache::new();
        let tree = Retriever::new(self.retriever.as_ref(), &cache).walk(&self.base_url)?;

        let mut entries: Vec<CatalogEntry> = tree
            .file_paths()
            .iter()
            .filter_map(|path| match path.split('/').collect::<Vec<_>>().as_slice() {
                [library, file_type, filename] => Some(CatalogEntry {
                    library: library.to_string(),
                    file_type: file_type.to_string(),
                    filename: filename.to_string(),
                }),
                _ => None,
            })
            .collect();
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ContentType, MockContentRetriever, TreeEntry};

    fn entry(name: &str, content_type: ContentType) -> TreeEntry {
        TreeEntry {
            name: name.into(),
            path: name.into(),
            content_type,
        }
    }

    #[test]
    fn entries_are_three_levels_deep() {
        let mut source = MockContentRetriever::new();
        source.expect_list_directory().returning(|url| {
            Ok(match url {
                "base" => vec![
                    entry("ui", ContentType::Directory),
                    entry("README.md", ContentType::File),
                ],
                "base/ui" => vec![entry("base", ContentType::Directory)],
                _ => vec![
                    entry("card.tsx", ContentType::File),
                    entry("button.tsx", ContentType::File),
                ],
            })
        });

        let entries = CatalogService::new(Box::new(source), "base").entries().unwrap();
        let names: Vec<String> = entries.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["ui/base/button.tsx", "ui/base/card.tsx"]);
    }
}
