//! Embedded data of a GitHub tree or blob page.
//!
//! GitHub renders repository pages as a `<react-app>` element whose first
//! `<script>` child holds the page data as JSON.

use regex::Regex;
use serde::Deserialize;
use zentra_core::{
    application::{ApplicationError, ContentType, TreeEntry},
    error::{Context, ZentraResult},
};

#[derive(Debug, Deserialize)]
struct EmbeddedPage {
    payload: Payload,
}

#[derive(Debug, Deserialize)]
struct Payload {
    tree: Option<Tree>,
    blob: Option<Blob>,
}

#[derive(Debug, Deserialize)]
struct Tree {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Item {
    name: String,
    path: String,
    content_type: ContentType,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Blob {
    raw_lines: Vec<String>,
}

impl From<Item> for TreeEntry {
    fn from(item: Item) -> Self {
        TreeEntry {
            name: item.name,
            path: item.path,
            content_type: item.content_type,
        }
    }
}

/// Pulls the embedded JSON out of a page and reads it.
#[derive(Debug, Clone)]
pub struct PayloadParser {
    script: Regex,
}

impl PayloadParser {
    pub fn new() -> ZentraResult<Self> {
        let script = Regex::new(r"(?s)<react-app\b[^>]*>.*?<script\b[^>]*>(.*?)</script>")
            .context("compiling page script pattern")?;
        Ok(Self { script })
    }

    /// The body of the first `<script>` inside `<react-app>`.
    pub fn script<'h>(&self, html: &'h str) -> Option<&'h str> {
        self.script
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|body| body.as_str().trim())
            .filter(|body| !body.is_empty())
    }

    fn page(&self, url: &str, html: &str) -> ZentraResult<Payload> {
        let script = self.script(html).ok_or_else(|| malformed(url, "no react-app script"))?;
        let page: EmbeddedPage =
            serde_json::from_str(script).map_err(|e| malformed(url, &e.to_string()))?;
        Ok(page.payload)
    }

    /// `payload.tree.items` of a directory page.
    pub fn listing(&self, url: &str, html: &str) -> ZentraResult<Vec<TreeEntry>> {
        let tree = self
            .page(url, html)?
            .tree
            .ok_or_else(|| malformed(url, "missing payload.tree"))?;
        Ok(tree.items.into_iter().map(TreeEntry::from).collect())
    }

    /// `payload.blob.rawLines` of a file page.
    pub fn raw_lines(&self, url: &str, html: &str) -> ZentraResult<Vec<String>> {
        let blob = self
            .page(url, html)?
            .blob
            .ok_or_else(|| malformed(url, "missing payload.blob"))?;
        Ok(blob.raw_lines)
    }
}

fn malformed(url: &str, reason: &str) -> ApplicationError {
    ApplicationError::MalformedPayload {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap a JSON payload the way GitHub embeds it. Used by tests and the
/// in-memory retriever.
pub fn embed(json: &str) -> String {
    format!(
        "<html><body><react-app app-name=\"react-code-view\">\
         <script type=\"application/json\" data-target=\"react-app.embeddedData\">{json}</script>\
         </react-app></body></html>"
    )
}
