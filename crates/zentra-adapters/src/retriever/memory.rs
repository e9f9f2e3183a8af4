//! In-memory content retriever for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use zentra_core::{
    application::{ApplicationError, ContentRetriever, ContentType, TreeEntry},
    application::services::join_url,
    error::ZentraResult,
};

/// Serves listings and files from URL maps and records every request.
///
/// Unknown URLs answer with a 404 `RequestFailed`.
#[derive(Debug, Clone, Default)]
pub struct MemoryRetriever {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    listings: HashMap<String, Vec<TreeEntry>>,
    files: HashMap<String, Vec<String>>,
    requests: Vec<String>,
}

impl MemoryRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` at `{base}/{library}/{file_type}/{filename}`
    /// and add the listing entries leading to it.
    pub fn with_template(
        self,
        base: &str,
        library: &str,
        file_type: &str,
        filename: &str,
        content: &str,
    ) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut parent = base.trim_end_matches('/').to_string();
            let mut relative = String::new();
            for (name, content_type) in [
                (library, ContentType::Directory),
                (file_type, ContentType::Directory),
                (filename, ContentType::File),
            ] {
                relative = join_url(&relative, &[name]);
                let listing = inner.listings.entry(parent.clone()).or_default();
                if !listing.iter().any(|entry| entry.name == name) {
                    listing.push(TreeEntry {
                        name: name.to_string(),
                        path: relative.trim_start_matches('/').to_string(),
                        content_type,
                    });
                }
                parent = join_url(&parent, &[name]);
            }
            inner
                .files
                .insert(parent, content.lines().map(str::to_string).collect());
        }
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.requests.clone())
            .unwrap_or_default()
    }

    fn record(&self, url: &str) -> ZentraResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.requests.push(url.to_string());
        Ok(())
    }
}

fn not_found(url: &str) -> ApplicationError {
    ApplicationError::RequestFailed {
        status: 404,
        url: url.to_string(),
    }
}

impl ContentRetriever for MemoryRetriever {
    fn list_directory(&self, url: &str) -> ZentraResult<Vec<TreeEntry>> {
        self.record(url)?;
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner
            .listings
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url).into())
    }

    fn file_lines(&self, url: &str) -> ZentraResult<Vec<String>> {
        self.record(url)?;
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner
            .files
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_registers_listings_and_file() {
        let retriever = MemoryRetriever::new()
            .with_template("base", "ui", "base", "button.tsx", "a\nb")
            .with_template("base", "ui", "base", "card.tsx", "c");

        let root = retriever.list_directory("base").unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].content_type, ContentType::Directory);
        assert_eq!(retriever.list_directory("base/ui/base").unwrap().len(), 2);
        assert_eq!(
            retriever.file_lines("base/ui/base/button.tsx").unwrap(),
            vec!["a", "b"]
        );
        assert_eq!(retriever.requests().len(), 3);
    }

    #[test]
    fn unknown_url_is_404() {
        let err = MemoryRetriever::new().file_lines("nope").unwrap_err();
        assert!(matches!(
            err,
            zentra_core::error::ZentraError::Application(ApplicationError::RequestFailed {
                status: 404,
                ..
            })
        ));
    }
}
