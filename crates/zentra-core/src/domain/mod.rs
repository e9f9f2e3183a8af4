//! Core domain layer for Zentra.
//!
//! Pure data and rules: the component models, the manifest, library-name
//! pairs and the JSX mapping tables. Nothing here touches the filesystem or
//! the network; that happens behind the ports in the application layer.

pub mod component;
pub mod details;
pub mod error;
pub mod jsx;
pub mod manifest;
pub mod naming;
pub mod pair;
pub mod paths;
pub mod storage;

mod validation;

pub use component::{Component, StateNames, UI_LIBRARY, UPLOADTHING_LIBRARY};
pub use details::ComponentDetails;
pub use error::{DomainError, ErrorCategory};
pub use jsx::{ComponentBuilder, DetailsLookup, JsxComponent, PageBuilder};
pub use manifest::{AppSection, Block, Manifest, PAGES_FOLDER, Page};
pub use pair::LibraryNamePair;
pub use paths::ProjectPaths;
pub use storage::{ConfigExistStorage, CountStorage, ModelFileStorage, ModelStorage};
pub use validation::{DomainValidator, MAX_NAME_LENGTH};
