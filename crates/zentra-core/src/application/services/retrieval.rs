//! Run-scoped access to the remote component source.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::application::ports::{ContentRetriever, TreeEntry};
use crate::error::ZentraResult;

/// Join URL segments with single slashes.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            url.push('/');
            url.push_str(segment);
        }
    }
    url
}

/// Directory listings fetched during one run, keyed by URL.
///
/// Owned by the caller of a single run and dropped with it.
#[derive(Debug, Default)]
pub struct ListingCache {
    entries: RwLock<HashMap<String, Vec<TreeEntry>>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, url: &str) -> ZentraResult<Option<Vec<TreeEntry>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(entries.get(url).cloned())
    }

    fn insert(&self, url: &str, listing: Vec<TreeEntry>) -> ZentraResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        entries.insert(url.to_string(), listing);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A remote directory, fully expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteTree {
    pub files: Vec<String>,
    pub dirs: BTreeMap<String, RemoteTree>,
}

impl RemoteTree {
    /// Every file path below this tree, `/`-separated and sorted.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.clone();
        for (name, tree) in &self.dirs {
            paths.extend(
                tree.file_paths()
                    .into_iter()
                    .map(|path| format!("{name}/{path}")),
            );
        }
        paths.sort();
        paths
    }
}

/// Reads listings and files through a [`ContentRetriever`], caching
/// listings for the lifetime of the borrowed [`ListingCache`].
pub struct Retriever<'a> {
    source: &'a dyn ContentRetriever,
    cache: &'a ListingCache,
}

impl<'a> Retriever<'a> {
    pub fn new(source: &'a dyn ContentRetriever, cache: &'a ListingCache) -> Self {
        Self { source, cache }
    }

    /// Entries of the directory at `url`, fetched at most once per run.
    pub fn list(&self, url: &str) -> ZentraResult<Vec<TreeEntry>> {
        if let Some(listing) = self.cache.get(url)? {
            debug!(url, "listing cache hit");
            return Ok(listing);
        }

        let listing = self.source.list_directory(url)?;
        self.cache.insert(url, listing.clone())?;
        Ok(listing)
    }

    /// Names of the files (not folders) at `url`.
    pub fn filenames(&self, url: &str) -> ZentraResult<Vec<String>> {
        Ok(self
            .list(url)?
            .into_iter()
            .filter(TreeEntry::is_file)
            .map(|entry| entry.name)
            .collect())
    }

    /// The file at `url` as one string.
    pub fn file_content(&self, url: &str) -> ZentraResult<String> {
        Ok(self.source.file_lines(url)?.join("\n"))
    }

    /// Recursively expand the directory at `url`.
    #[instrument(skip(self))]
    pub fn walk(&self, url: &str) -> ZentraResult<RemoteTree> {
        let mut tree = RemoteTree::default();
        for entry in self.list(url)? {
            if entry.is_file() {
                tree.files.push(entry.name);
            } else {
                let child = self.walk(&join_url(url, &[&entry.name]))?;
                tree.dirs.insert(entry.name, child);
            }
        }
        Ok(tree)
    }
}
