//! Export metadata extracted from a component's template source.

use crate::domain::naming::{file_stem, kebab_to_pascal};

/// Metadata about one template file on the remote source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDetails {
    pub library: String,
    pub filename: String,
    /// Primary exported symbol.
    pub name: String,
    /// Secondary exported symbols (sub-components).
    pub child_names: Vec<String>,
}

impl ComponentDetails {
    /// Build details from a file's source text.
    ///
    /// Looks for the first `export {` block and keeps the component-like
    /// names: lowercase helpers, `*Variants`/`*Style` exports, `type`
    /// aliases and `use*` hooks are dropped. When no block exists the name
    /// falls back to the PascalCase form of the filename.
    pub fn from_source(library: &str, filename: &str, source: &str) -> Self {
        let mut names = exported_names(source).into_iter();
        let name = names
            .next()
            .unwrap_or_else(|| kebab_to_pascal(file_stem(filename)));

        Self {
            library: library.to_string(),
            filename: filename.to_string(),
            name,
            child_names: names.collect(),
        }
    }

    /// Details for a file whose source is not available.
    pub fn without_children(library: &str, filename: &str) -> Self {
        Self::from_source(library, filename, "")
    }
}

/// Names listed in the first `export { ... }` block, filtered to components.
pub fn exported_names(source: &str) -> Vec<String> {
    let lines: Vec<&str> = source.lines().collect();
    let Some(start) = lines.iter().position(|line| line.contains("export {")) else {
        return Vec::new();
    };

    let block = lines[start..].join("");
    let cleaned: String = block
        .replace("export", "")
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | ';') && !c.is_whitespace())
        .collect();

    cleaned
        .split(',')
        .filter(|item| !item.is_empty())
        .filter(|item| is_component_export(item))
        .map(str::to_string)
        .collect()
}

fn is_component_export(item: &str) -> bool {
    let starts_upper = item.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    starts_upper
        && !item.ends_with("Variants")
        && !item.ends_with("Style")
        && !item.starts_with("type")
        && !item.starts_with("use")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALERT_SOURCE: &str = r#"import * as React from "react"

const alertVariants = cva("relative w-full")

const Alert = React.forwardRef<HTMLDivElement>(() => null)
Alert.displayName = "Alert"

export {
  Alert,
  AlertTitle,
  AlertDescription,
  alertVariants,
}
"#;

    #[test]
    fn primary_and_children_from_export_block() {
        let details = ComponentDetails::from_source("ui", "alert.tsx", ALERT_SOURCE);
        assert_eq!(details.name, "Alert");
        assert_eq!(details.child_names, vec!["AlertTitle", "AlertDescription"]);
    }

    #[test]
    fn helper_exports_are_filtered() {
        let source = "export { Toggle, toggleVariants, ToggleStyle, useToggle, ToggleGroup };";
        assert_eq!(exported_names(source), vec!["Toggle", "ToggleGroup"]);
    }

    #[test]
    fn single_line_export_block() {
        let source = "const x = 1\nexport { Button, buttonVariants }\n";
        assert_eq!(exported_names(source), vec!["Button"]);
    }

    #[test]
    fn missing_block_falls_back_to_filename() {
        let details = ComponentDetails::without_children("ui", "aspect-ratio.tsx");
        assert_eq!(details.name, "AspectRatio");
        assert!(details.child_names.is_empty());
    }
}
