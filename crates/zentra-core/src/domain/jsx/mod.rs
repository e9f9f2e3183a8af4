//! Component → JSX mapping.
//!
//! Attributes, content, imports and logic are each an exhaustive match over
//! [`Component`](crate::domain::component::Component). [`ComponentBuilder`]
//! combines them for one component and [`PageBuilder`] lays out a whole page.

pub mod attributes;
pub mod builder;
pub mod content;
pub mod imports;
pub mod logic;
pub mod page;

pub use builder::{ComponentBuilder, JsxComponent};
pub use page::{DetailsLookup, PageBuilder};
