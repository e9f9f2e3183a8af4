//! The declared-models manifest (`zentra/models/zentra.toml`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::component::Component;
use crate::domain::error::DomainError;
use crate::domain::naming::tsx_filename;
use crate::domain::pair::{LibraryNamePair, canonicalize};
use crate::domain::validation::DomainValidator;

/// Library folder used for page pairs.
pub const PAGES_FOLDER: &str = "pages";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub app: AppSection,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// The `[app]` table: project name and the pages to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default)]
    pub name: String,
    pub register: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A titled group of components rendered as one `<div>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Page {
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.blocks.iter().flat_map(|block| block.components.iter())
    }

    /// `("pages", "{kebab}.tsx")`.
    pub fn pair(&self) -> LibraryNamePair {
        LibraryNamePair::new(PAGES_FOLDER, tsx_filename(&self.name))
    }

    /// Model names and the state variables they derive must not repeat
    /// within one page.
    fn validate_names(&self) -> Result<(), DomainError> {
        let mut names = HashSet::new();
        let mut states = HashSet::new();

        for component in self.components() {
            if let Some(name) = component.name() {
                if !names.insert(name) {
                    return Err(DomainError::DuplicateName {
                        page: self.name.clone(),
                        name: name.to_string(),
                    });
                }
            }
            for state in component.state_names() {
                if !states.insert(state.getter.clone()) {
                    return Err(DomainError::StateConflict {
                        page: self.name.clone(),
                        state: state.getter,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Manifest {
    /// Check page names, registration and every component's fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (idx, page) in self.pages.iter().enumerate() {
            DomainValidator::validate_page_name(&page.name)?;
            if self.pages[..idx].iter().any(|p| p.name == page.name) {
                return Err(DomainError::DuplicatePage {
                    name: page.name.clone(),
                });
            }
            for component in page.components() {
                component.validate()?;
            }
            page.validate_names()?;
        }

        for name in &self.app.register {
            if !self.pages.iter().any(|page| &page.name == name) {
                return Err(DomainError::UnknownPage { name: name.clone() });
            }
        }

        Ok(())
    }

    /// Registered pages in `register` order.
    pub fn registered_pages(&self) -> Vec<&Page> {
        self.app
            .register
            .iter()
            .filter_map(|name| self.pages.iter().find(|page| &page.name == name))
            .collect()
    }

    /// Every component of every registered page.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.registered_pages()
            .into_iter()
            .flat_map(|page| page.components())
    }

    /// `true` when at least one registered page declares a component.
    pub fn has_components(&self) -> bool {
        self.components().next().is_some()
    }

    /// Sorted, distinct pairs of all registered components and their children.
    pub fn component_pairs(&self) -> Vec<LibraryNamePair> {
        let mut pairs: Vec<LibraryNamePair> =
            self.components().flat_map(Component::pairs).collect();
        canonicalize(&mut pairs);
        pairs
    }

    /// Sorted pairs of the registered pages.
    pub fn page_pairs(&self) -> Vec<LibraryNamePair> {
        let mut pairs: Vec<LibraryNamePair> =
            self.registered_pages().into_iter().map(Page::pair).collect();
        canonicalize(&mut pairs);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[app]
name = "demo"
register = ["Landing"]

[[pages]]
name = "Landing"

[[pages.blocks]]
name = "Hero"

[[pages.blocks.components]]
type = "Button"
text = "Get started"

[[pages.blocks.components]]
type = "Collapsible"
name = "faq"
title = "FAQ"
items = ["One", "Two"]

[[pages]]
name = "Draft"

[[pages.blocks]]
name = "Body"

[[pages.blocks.components]]
type = "Badge"
text = "wip"
"#;

    fn manifest() -> Manifest {
        toml::from_str(MANIFEST).expect("manifest should parse")
    }

    #[test]
    fn only_registered_pages_contribute_pairs() {
        let manifest = manifest();
        assert!(manifest.validate().is_ok());
        assert_eq!(
            manifest.component_pairs(),
            vec![
                LibraryNamePair::new("ui", "button.tsx"),
                LibraryNamePair::new("ui", "collapsible.tsx"),
            ]
        );
        assert_eq!(
            manifest.page_pairs(),
            vec![LibraryNamePair::new("pages", "landing.tsx")]
        );
    }

    #[test]
    fn unknown_registered_page_fails() {
        let mut manifest = manifest();
        manifest.app.register.push("Pricing".into());
        assert_eq!(
            manifest.validate(),
            Err(DomainError::UnknownPage {
                name: "Pricing".into()
            })
        );
    }

    #[test]
    fn duplicate_pages_fail() {
        let mut manifest = manifest();
        let copy = manifest.pages[0].clone();
        manifest.pages.push(copy);
        assert!(matches!(
            manifest.validate(),
            Err(DomainError::DuplicatePage { .. })
        ));
    }

    const TWO_CALENDARS: &str = r#"
[app]
register = ["Trips"]

[[pages]]
name = "Trips"

[[pages.blocks]]
name = "Dates"

[[pages.blocks.components]]
type = "Calendar"
name = "trip"

[[pages.blocks.components]]
type = "Calendar"
name = "trip"
"#;

    #[test]
    fn repeated_model_name_on_a_page_fails() {
        let manifest: Manifest = toml::from_str(TWO_CALENDARS).expect("manifest should parse");
        assert_eq!(
            manifest.validate(),
            Err(DomainError::DuplicateName {
                page: "Trips".into(),
                name: "trip".into(),
            })
        );
    }

    #[test]
    fn same_name_on_different_pages_is_fine() {
        let mut manifest: Manifest = toml::from_str(TWO_CALENDARS).expect("manifest should parse");
        let mut other = manifest.pages[0].clone();
        other.name = "Returns".into();
        other.blocks[0].components.truncate(1);
        manifest.pages[0].blocks[0].components.truncate(1);
        manifest.pages.push(other);
        manifest.app.register.push("Returns".into());

        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn checkbox_menus_sharing_an_item_conflict() {
        let source = r#"
[app]
register = ["Settings"]

[[pages]]
name = "Settings"

[[pages.blocks]]
name = "Menus"

[[pages.blocks.components]]
type = "DropdownMenu"
name = "view"
trigger = "View"
kind = "checkbox"
items = ["Status bar", "Panel"]

[[pages.blocks.components]]
type = "DropdownMenu"
name = "layout"
trigger = "Layout"
kind = "checkbox"
items = ["Status line"]
"#;
        let manifest: Manifest = toml::from_str(source).expect("manifest should parse");
        assert_eq!(
            manifest.validate(),
            Err(DomainError::StateConflict {
                page: "Settings".into(),
                state: "showStatus".into(),
            })
        );
    }

    #[test]
    fn missing_register_is_a_parse_error() {
        let result: Result<Manifest, _> = toml::from_str("[app]\nname = \"demo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn empty_register_has_no_components() {
        let mut manifest = manifest();
        manifest.app.register.clear();
        assert!(manifest.validate().is_ok());
        assert!(!manifest.has_components());
    }
}
