//! Manifest format adapters.

mod starter;
mod toml_parser;

pub use starter::STARTER_MANIFEST;
pub use toml_parser::TomlManifestParser;
