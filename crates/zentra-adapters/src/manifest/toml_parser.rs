//! TOML manifest parser.

use std::path::Path;

use tracing::debug;
use zentra_core::{
    application::{ApplicationError, ManifestParser},
    domain::Manifest,
    error::ZentraResult,
};

use super::starter::STARTER_MANIFEST;

/// Reads `zentra.toml` into a [`Manifest`] with serde.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlManifestParser;

impl TomlManifestParser {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestParser for TomlManifestParser {
    fn parse(&self, path: &Path, source: &str) -> ZentraResult<Manifest> {
        let manifest: Manifest = toml::from_str(source).map_err(|e| {
            let reason = match e.span() {
                Some(span) => format!("line {}: {}", line_of(source, span.start), e.message()),
                None => e.message().to_string(),
            };
            ApplicationError::InvalidConfig {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        debug!(pages = manifest.pages.len(), "manifest parsed");
        Ok(manifest)
    }

    fn starter(&self) -> String {
        STARTER_MANIFEST.to_string()
    }
}

fn line_of(source: &str, offset: usize) -> usize {
    source
        .get(..offset)
        .map_or(1, |before| before.matches('\n').count() + 1)
}
