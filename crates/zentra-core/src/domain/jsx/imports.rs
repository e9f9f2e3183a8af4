//! Import statements required by a component.

use std::collections::BTreeMap;

use crate::domain::component::{CalendarMode, Component, UI_LIBRARY};
use crate::domain::details::ComponentDetails;
use crate::domain::jsx::attributes::otp_pattern_constant;
use crate::domain::jsx::content::icon_name;
use crate::domain::naming::{file_stem, tsx_filename};

fn named(names: &[&str], module: &str) -> String {
    format!("import {{ {} }} from \"{module}\"", names.join(", "))
}

fn ui_import(type_name: &str) -> String {
    named(
        &[type_name],
        &format!("@/components/{UI_LIBRARY}/{}", file_stem(&tsx_filename(type_name))),
    )
}

/// `true` when `lines` contain an element tag named exactly `name`.
pub fn uses_element(lines: &[String], name: &str) -> bool {
    let tag = format!("<{name}");
    lines.iter().any(|line| {
        line.match_indices(&tag).any(|(idx, _)| {
            line[idx + tag.len()..]
                .chars()
                .next()
                .is_none_or(|c| matches!(c, ' ' | '>' | '/'))
        })
    })
}

/// `import { Name, Child } from "@/components/{library}/{stem}"`.
///
/// Child names come from the template's export block when known, otherwise
/// from the component's static list, and are kept only when the rendered
/// `lines` use them.
pub fn core_import(
    component: &Component,
    details: Option<&ComponentDetails>,
    lines: &[String],
) -> String {
    let (name, children): (String, Vec<String>) = match details {
        Some(details) => (details.name.clone(), details.child_names.clone()),
        None => (
            component.type_name().to_string(),
            component
                .default_child_names()
                .iter()
                .map(|child| child.to_string())
                .collect(),
        ),
    };

    let mut names = vec![name.as_str()];
    names.extend(
        children
            .iter()
            .map(String::as_str)
            .filter(|child| *child != name && uses_element(lines, child)),
    );

    let stem = file_stem(&component.filename()).to_string();
    named(
        &names,
        &format!("@/components/{}/{stem}", component.library()),
    )
}

/// Imports beyond the component's own file.
pub fn extra_imports(component: &Component) -> Vec<String> {
    match component {
        Component::Collapsible(_) => vec![
            ui_import("Button"),
            named(&["ChevronsUpDown"], "lucide-react"),
        ],
        Component::Checkbox(_) | Component::RadioGroup(_) => vec![ui_import("Label")],
        Component::Slider(_) => vec![named(&["cn"], "@/lib/utils")],
        Component::Calendar(c) => match c.mode {
            CalendarMode::Single => Vec::new(),
            CalendarMode::Multiple => vec![named(&["addDays"], "date-fns")],
            CalendarMode::Range => vec![
                named(&["addDays"], "date-fns"),
                named(&["DateRange"], "react-day-picker"),
            ],
        },
        Component::Button(b) => {
            let mut imports = Vec::new();
            if b.url.is_some() {
                imports.push("import Link from \"next/link\"".to_string());
            }
            if let Some(icon) = &b.icon {
                imports.push(named(&[icon_name(icon).as_str()], "lucide-react"));
            }
            imports
        }
        Component::Alert(a) => a
            .icon
            .iter()
            .map(|icon| named(&[icon_name(icon).as_str()], "lucide-react"))
            .collect(),
        Component::InputOtp(o) => o
            .pattern
            .as_deref()
            .and_then(otp_pattern_constant)
            .map(|constant| vec![named(&[constant], "input-otp")])
            .unwrap_or_default(),
        Component::Tooltip(t) if t.trigger_button => vec![ui_import("Button")],
        Component::AspectRatio(_) => vec!["import Image from \"next/image\"".to_string()],
        _ => Vec::new(),
    }
}

/// Merge named imports from the same module, then sort and dedupe.
///
/// Default imports (`import Link from "next/link"`) pass through untouched.
pub fn merge_imports(imports: &[String]) -> Vec<String> {
    let mut by_module: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut passthrough: Vec<String> = Vec::new();

    for statement in imports {
        let parsed = statement
            .strip_prefix("import { ")
            .and_then(|rest| rest.split_once(" } from "));
        match parsed {
            Some((names, module)) => {
                let entry = by_module.entry(module).or_default();
                for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                    if !entry.contains(&name) {
                        entry.push(name);
                    }
                }
            }
            None => passthrough.push(statement.clone()),
        }
    }

    let mut merged: Vec<String> = by_module
        .into_iter()
        .map(|(module, names)| format!("import {{ {} }} from {module}", names.join(", ")))
        .chain(passthrough)
        .collect();
    merged.sort();
    merged.dedup();
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Component {
        toml::from_str(source).expect("component should parse")
    }

    #[test]
    fn element_match_is_exact() {
        let lines = vec!["<SelectValue placeholder=\"x\" />".to_string()];
        assert!(uses_element(&lines, "SelectValue"));
        assert!(!uses_element(&lines, "Select"));
    }

    #[test]
    fn core_import_keeps_used_children() {
        let alert = parse("type = \"Alert\"\ntitle = \"Heads up\"\ndescription = \"Careful\"");
        let details = ComponentDetails {
            library: "ui".into(),
            filename: "alert.tsx".into(),
            name: "Alert".into(),
            child_names: vec!["AlertTitle".into(), "AlertDescription".into(), "AlertIcon".into()],
        };
        let lines = vec![
            "<Alert>".to_string(),
            "<AlertTitle>Heads up</AlertTitle>".to_string(),
            "<AlertDescription>Careful</AlertDescription>".to_string(),
            "</Alert>".to_string(),
        ];
        assert_eq!(
            core_import(&alert, Some(&details), &lines),
            "import { Alert, AlertTitle, AlertDescription } from \"@/components/ui/alert\""
        );
    }

    #[test]
    fn core_import_falls_back_to_static_children() {
        let otp = parse("type = \"InputOTP\"");
        let lines = vec!["<InputOTPGroup>".to_string(), "<InputOTPSlot index={0} />".to_string()];
        assert_eq!(
            core_import(&otp, None, &lines),
            "import { InputOTP, InputOTPGroup, InputOTPSlot } from \"@/components/ui/input-otp\""
        );
    }

    #[test]
    fn range_calendar_imports_date_helpers() {
        let calendar = parse("type = \"Calendar\"\nname = \"trip\"\nmode = \"range\"");
        assert_eq!(
            extra_imports(&calendar),
            vec![
                "import { addDays } from \"date-fns\"",
                "import { DateRange } from \"react-day-picker\"",
            ]
        );
    }

    #[test]
    fn merge_combines_same_module() {
        let merged = merge_imports(&[
            "import { Mail } from \"lucide-react\"".to_string(),
            "import Link from \"next/link\"".to_string(),
            "import { ChevronsUpDown } from \"lucide-react\"".to_string(),
            "import { Mail } from \"lucide-react\"".to_string(),
        ]);
        assert_eq!(
            merged,
            vec![
                "import Link from \"next/link\"",
                "import { Mail, ChevronsUpDown } from \"lucide-react\"",
            ]
        );
    }
}
