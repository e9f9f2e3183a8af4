use crate::domain::component::Component;
use crate::domain::details::ComponentDetails;
use crate::domain::jsx::attributes::build_attributes;
use crate::domain::jsx::content::{component_content, sibling_content};
use crate::domain::jsx::imports::{core_import, extra_imports};
use crate::domain::jsx::logic::component_logic;

/// Everything a page needs to render one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsxComponent {
    pub imports: Vec<String>,
    pub attributes: Vec<String>,
    pub logic: Vec<String>,
    /// The full element, wrapper included, one tag or text per line.
    pub content: Vec<String>,
    pub use_client: bool,
}

/// Wraps `inner` in `<name attrs>...</name>`, self-closing when empty.
///
/// A single text line is kept on the same line as its tags.
pub fn element(name: &str, attributes: &[String], inner: Vec<String>) -> Vec<String> {
    let open = if attributes.is_empty() {
        format!("<{name}")
    } else {
        format!("<{name} {}", attributes.join(" "))
    };

    match inner.as_slice() {
        [] => vec![format!("{open} />")],
        [text] if !text.starts_with('<') => vec![format!("{open}>{text}</{name}>")],
        _ => {
            let mut lines = Vec::with_capacity(inner.len() + 2);
            lines.push(format!("{open}>"));
            lines.extend(inner);
            lines.push(format!("</{name}>"));
            lines
        }
    }
}

/// `className` of the `<div>` some components are wrapped in.
fn wrapper_class(component: &Component) -> Option<&'static str> {
    match component {
        Component::Checkbox(_) => Some("flex items-top space-x-2"),
        _ => None,
    }
}

fn requires_client(component: &Component) -> bool {
    matches!(component, Component::Checkbox(_))
}

pub struct ComponentBuilder<'a> {
    component: &'a Component,
    details: Option<&'a ComponentDetails>,
}

impl<'a> ComponentBuilder<'a> {
    pub fn new(component: &'a Component) -> Self {
        Self {
            component,
            details: None,
        }
    }

    /// Use the template's export names for the core import.
    pub fn with_details(mut self, details: Option<&'a ComponentDetails>) -> Self {
        self.details = details;
        self
    }

    pub fn build(&self) -> JsxComponent {
        let component = self.component;
        let attributes = build_attributes(component);
        let logic = component_logic(component);

        let mut content = element(
            component.container_name(),
            &attributes,
            component_content(component),
        );
        if let Some(class) = wrapper_class(component) {
            let mut inner = content;
            inner.extend(sibling_content(component));
            content = element("div", &[format!("className=\"{class}\"")], inner);
        }

        let mut imports = vec![core_import(component, self.details, &content)];
        imports.extend(extra_imports(component));

        let use_client =
            requires_client(component) || logic.iter().any(|line| line.contains("useState"));

        JsxComponent {
            imports,
            attributes,
            logic,
            content,
            use_client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(source: &str) -> JsxComponent {
        let component: Component = toml::from_str(source).expect("component should parse");
        ComponentBuilder::new(&component).build()
    }

    #[test]
    fn self_closing_without_content() {
        let jsx = build("type = \"Input\"\nid = \"email\"\ninput_type = \"email\"\nplaceholder = \"Email\"");
        assert_eq!(
            jsx.content,
            vec!["<Input id=\"email\" type=\"email\" placeholder=\"Email\" />"]
        );
        assert!(!jsx.use_client);
    }

    #[test]
    fn text_stays_inline() {
        let jsx = build("type = \"Badge\"\ntext = \"New\"\nvariant = \"secondary\"");
        assert_eq!(jsx.content, vec!["<Badge variant=\"secondary\">New</Badge>"]);
        assert_eq!(
            jsx.imports,
            vec!["import { Badge } from \"@/components/ui/badge\""]
        );
    }

    #[test]
    fn checkbox_is_wrapped_and_client_side() {
        let jsx = build("type = \"Checkbox\"\nid = \"terms\"\nlabel = \"Accept terms\"");
        assert_eq!(jsx.content[0], "<div className=\"flex items-top space-x-2\">");
        assert_eq!(jsx.content[1], "<Checkbox id=\"terms\" />");
        assert_eq!(jsx.content.last().map(String::as_str), Some("</div>"));
        assert!(jsx.use_client);
        assert!(jsx.imports.contains(&"import { Label } from \"@/components/ui/label\"".to_string()));
    }

    #[test]
    fn stateful_component_needs_client() {
        let jsx = build("type = \"Collapsible\"\nname = \"faq\"\ntitle = \"FAQ\"\nitems = [\"One\", \"Two\"]");
        assert!(jsx.use_client);
        assert_eq!(
            jsx.content[0],
            "<Collapsible open={faqIsOpen} onOpenChange={faqSetIsOpen} className=\"w-[350px] space-y-2\">"
        );
        assert_eq!(
            jsx.imports[0],
            "import { Collapsible, CollapsibleTrigger, CollapsibleContent } from \"@/components/ui/collapsible\""
        );
    }

    #[test]
    fn tooltip_renders_inside_provider() {
        let jsx = build("type = \"Tooltip\"\ntext = \"Add to library\"\ntrigger = \"Hover\"");
        assert_eq!(jsx.content[0], "<TooltipProvider>");
        assert_eq!(jsx.content[1], "<Tooltip>");
        assert_eq!(jsx.content.last().map(String::as_str), Some("</TooltipProvider>"));
    }
}
