//! Full page files.

use std::collections::BTreeMap;

use crate::domain::component::Component;
use crate::domain::details::ComponentDetails;
use crate::domain::jsx::builder::{ComponentBuilder, JsxComponent};
use crate::domain::jsx::imports::merge_imports;
use crate::domain::manifest::Page;
use crate::domain::pair::LibraryNamePair;

const INDENT: &str = "  ";

/// Template export details keyed by the file they were read from.
pub type DetailsLookup = BTreeMap<LibraryNamePair, ComponentDetails>;

/// Renders one page into a TSX file.
pub struct PageBuilder<'a> {
    page: &'a Page,
    details: Option<&'a DetailsLookup>,
}

impl<'a> PageBuilder<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self {
            page,
            details: None,
        }
    }

    pub fn with_details(mut self, details: &'a DetailsLookup) -> Self {
        self.details = Some(details);
        self
    }

    fn build_component(&self, component: &Component) -> JsxComponent {
        let details = self
            .details
            .and_then(|lookup| lookup.get(&component.pair()));
        ComponentBuilder::new(component).with_details(details).build()
    }

    pub fn build(&self) -> String {
        let mut imports: Vec<String> = Vec::new();
        let mut logic: Vec<String> = Vec::new();
        let mut body: Vec<String> = Vec::new();
        let mut use_client = false;

        for block in &self.page.blocks {
            body.push(format!("{{/* {} */}}", block.name));
            body.push("<div>".to_string());
            for component in &block.components {
                let jsx = self.build_component(component);
                use_client |= jsx.use_client;
                imports.extend(jsx.imports);
                logic.extend(jsx.logic);
                body.extend(jsx.content);
            }
            body.push("</div>".to_string());
        }

        let hooks: Vec<&str> = ["useEffect", "useState"]
            .into_iter()
            .filter(|hook| logic.iter().any(|line| line.contains(&format!("{hook}("))))
            .collect();
        if !hooks.is_empty() {
            imports.push(format!("import {{ {} }} from \"react\"", hooks.join(", ")));
        }

        let mut out = Vec::new();
        if use_client {
            out.push("\"use client\"".to_string());
            out.push(String::new());
        }
        let imports = merge_imports(&imports);
        if !imports.is_empty() {
            out.extend(imports);
            out.push(String::new());
        }

        out.push(format!("export default function {}() {{", self.page.name));
        out.extend(indent_lines(&logic, 1));
        if !logic.is_empty() {
            out.push(String::new());
        }
        out.push(format!("{INDENT}return ("));
        out.push(format!("{}<>", INDENT.repeat(2)));
        out.extend(indent_lines(&body, 3));
        out.push(format!("{}</>", INDENT.repeat(2)));
        out.push(format!("{INDENT});"));
        out.push("}".to_string());

        let mut file = out.join("\n");
        file.push('\n');
        file
    }
}

fn opens_block(line: &str) -> bool {
    if line.starts_with('<') {
        !line.starts_with("</") && line.ends_with('>') && !line.ends_with("/>") && !line.contains("</")
    } else {
        line.ends_with('{') || line.ends_with('(')
    }
}

fn closes_block(line: &str) -> bool {
    line.starts_with("</") || line.starts_with('}') || line.starts_with(')')
}

/// Indent JSX and statement lines by nesting depth.
pub fn indent_lines(lines: &[String], base: usize) -> Vec<String> {
    let mut depth = base;
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        let trimmed = line.trim();
        if closes_block(trimmed) {
            depth = depth.saturating_sub(1).max(base);
        }
        out.push(format!("{}{trimmed}", INDENT.repeat(depth)));
        if opens_block(trimmed) {
            depth += 1;
        }
    }

    out
}
