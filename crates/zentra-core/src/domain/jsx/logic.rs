//! Hook and constant declarations placed before a page's `return`.

use crate::domain::component::{CalendarMode, Component, MenuType, StateNames, item_value};

/// `const [getter, setter] = useState<T>(value);`
pub fn hook_simple(state: &StateNames, value: &str, type_hint: Option<&str>) -> String {
    let hint = type_hint.map(|t| format!("<{t}>")).unwrap_or_default();
    format!(
        "const [{}, {}] = useState{hint}({value});",
        state.getter, state.setter
    )
}

/// A `useEffect` with a body and a cleanup function, run once on mount.
pub fn hook_use_effect(body: &[String], cleanup: &[String]) -> Vec<String> {
    let mut lines = vec!["useEffect(() => {".to_string()];
    lines.extend(body.iter().cloned());
    lines.push("return () => {".to_string());
    lines.extend(cleanup.iter().cloned());
    lines.push("};".to_string());
    lines.push("}, []);".to_string());
    lines
}

/// Logic lines for one component, empty when it owns no state.
pub fn component_logic(component: &Component) -> Vec<String> {
    let states = component.state_names();
    let Some(first) = states.first() else {
        return Vec::new();
    };

    match component {
        Component::Calendar(c) => match c.mode {
            CalendarMode::Single => {
                vec![hook_simple(first, "new Date()", Some("Date | undefined"))]
            }
            CalendarMode::Multiple => {
                let initial = format!("{}Initial", c.name);
                vec![
                    format!("const {initial} = [new Date(), addDays(new Date(), 1)];"),
                    hook_simple(first, &initial, Some("Date[] | undefined")),
                ]
            }
            CalendarMode::Range => vec![hook_simple(
                first,
                "{ from: new Date(), to: addDays(new Date(), 4) }",
                Some("DateRange | undefined"),
            )],
        },
        Component::Collapsible(_) => vec![hook_simple(first, "false", None)],
        Component::Pagination(p) => {
            let per_page = format!("{}ItemsPerPage", p.name);
            let mut lines = vec![
                format!("const {per_page} = {};", p.items_per_page),
                format!("const {}MaxItems = {};", p.name, p.total_items),
                hook_simple(first, "0", None),
            ];
            if let Some(end) = states.get(1) {
                lines.push(hook_simple(end, &per_page, None));
            }
            lines
        }
        Component::Progress(p) => {
            let mut lines = vec![hook_simple(first, &p.min.to_string(), None)];
            lines.extend(hook_use_effect(
                &[format!(
                    "const timer = setTimeout(() => {}({}), {});",
                    first.setter, p.value, p.max
                )],
                &["clearTimeout(timer);".to_string()],
            ));
            lines
        }
        Component::DropdownMenu(menu) => match menu.kind {
            MenuType::Checkbox => states
                .iter()
                .enumerate()
                .map(|(idx, state)| {
                    let checked = if idx == 0 { "true" } else { "false" };
                    hook_simple(state, checked, Some("boolean"))
                })
                .collect(),
            MenuType::Radio => {
                let initial = menu
                    .items
                    .first()
                    .map(|item| format!("\"{}\"", item_value(item)))
                    .unwrap_or_else(|| "\"\"".to_string());
                vec![hook_simple(first, &initial, None)]
            }
            MenuType::Default => Vec::new(),
        },
        _ => Vec::new(),
    }
}
