//! JSX attribute rendering.
//!
//! Two tables feed a component's attribute list: the common table keyed by
//! field ([`CommonField`]) and the per-component table
//! ([`component_attributes`]). Common attributes always come first.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::domain::component::{AccordionType, CalendarMode, Component, Orientation};

// ── helpers ───────────────────────────────────────────────────────────────────

/// `name="value"`
pub fn str_attr(name: &str, value: &str) -> String {
    format!("{name}=\"{value}\"")
}

/// `name={value}` with any leading `$` stripped.
pub fn param_attr(name: &str, value: impl Display) -> String {
    let value = value.to_string();
    let value = value.strip_prefix('$').unwrap_or(&value);
    format!("{name}={{{value}}}")
}

/// ``name={`value`}``
pub fn param_attr_backticks(name: &str, value: &str) -> String {
    format!("{name}={{`{value}`}}")
}

/// Replace every `$word` with `{word}`.
///
/// Returns the new text and whether anything was substituted.
pub fn substitute_params(text: &str) -> (String, bool) {
    let mut out = String::with_capacity(text.len());
    let mut substituted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let starts_word = chars
            .peek()
            .is_some_and(|next| next.is_ascii_alphabetic() || *next == '_');
        if ch == '$' && starts_word {
            let mut word = String::new();
            while let Some(next) = chars.peek().copied() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    word.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            out.push('{');
            out.push_str(&word);
            out.push('}');
            substituted = true;
        } else {
            out.push(ch);
        }
    }

    (out, substituted)
}

/// Text rendered between tags, with `$param` markers turned into expressions.
pub fn text_content(text: &str) -> String {
    substitute_params(text).0
}

pub fn size_attr(value: &FieldValue<'_>) -> Option<String> {
    match value {
        FieldValue::Text("default") => None,
        FieldValue::Text(size) => Some(str_attr("size", size)),
        FieldValue::Number(size) => Some(param_attr("size", size)),
        _ => None,
    }
}

/// `className`, as an expression when it starts with `cn(` or `$`.
pub fn style_attr(value: &str) -> String {
    if value.starts_with("cn(") || value.starts_with('$') {
        param_attr("className", value)
    } else {
        str_attr("className", value)
    }
}

pub fn src_attr(value: &str) -> String {
    if value.starts_with('$') {
        param_attr("src", value)
    } else {
        str_attr("src", value)
    }
}

/// `alt`, switching to a template literal when it embeds parameters.
pub fn alt_attr(value: &str) -> String {
    let (text, substituted) = substitute_params(value);
    if substituted {
        let template = text.replace('{', "${");
        param_attr_backticks("alt", &template)
    } else {
        str_attr("alt", value)
    }
}

/// Free-form attributes: `$`-prefixed values become expressions.
pub fn other_attrs(map: &BTreeMap<String, String>) -> Vec<String> {
    map.iter()
        .map(|(key, value)| {
            if value.starts_with('$') {
                param_attr(key, value)
            } else {
                str_attr(key, value)
            }
        })
        .collect()
}

// ── common table ──────────────────────────────────────────────────────────────

/// A model field value as seen by the common table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
    Flag(bool),
    Map(&'a BTreeMap<String, String>),
}

/// Fields shared between components, each with one rendering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonField {
    Id,
    Href,
    Type,
    Placeholder,
    Color,
    Orientation,
    DefaultValue,
    Mode,
    Url,
    Name,
    Variant,
    Size,
    Disabled,
    ApiEndpoint,
    NumInputs,
    Key,
    NewTab,
    Styles,
    Src,
    Alt,
    Width,
    Height,
    Checked,
    Pressed,
    StrokeWidth,
    Min,
    Max,
    Step,
    Ratio,
    Fill,
    Open,
    OpenChange,
    Other,
}

impl CommonField {
    /// Render this field. Values of the wrong shape render nothing.
    pub fn render(self, value: FieldValue<'_>) -> Vec<String> {
        use FieldValue::{Flag, Map, Number, Text};

        let attr = match (self, value) {
            (Self::Id, Text(v)) => str_attr("id", v),
            (Self::Href, Text(v)) => str_attr("href", v),
            (Self::Type, Text(v)) => str_attr("type", v),
            (Self::Placeholder, Text(v)) => str_attr("placeholder", v),
            (Self::Color, Text(v)) => str_attr("color", v),
            (Self::Orientation, Text(v)) => str_attr("orientation", v),
            (Self::DefaultValue, Text(v)) => str_attr("defaultValue", v),
            (Self::Mode, Text(v)) => str_attr("mode", v),
            (Self::Url, Text(_)) => "asChild".to_string(),
            (Self::Name, Text(v)) => str_attr("htmlFor", v),
            (Self::Variant, Text("default")) => return Vec::new(),
            (Self::Variant, Text(v)) => str_attr("variant", v),
            (Self::Size, value) => return size_attr(&value).into_iter().collect(),
            (Self::Disabled, Flag(true)) => "disabled".to_string(),
            (Self::ApiEndpoint, Text(v)) => str_attr("apiEndpoint", v),
            (Self::NumInputs, Number(v)) => param_attr("maxLength", v),
            (Self::Key, Text(v)) => param_attr("key", v),
            (Self::NewTab, Flag(true)) => str_attr("target", "_blank"),
            (Self::Styles, Text(v)) => style_attr(v),
            (Self::Src, Text(v)) => src_attr(v),
            (Self::Alt, Text(v)) => alt_attr(v),
            (Self::Width, Number(v)) => param_attr("width", v),
            (Self::Height, Number(v)) => param_attr("height", v),
            (Self::Checked, Flag(true)) => "checked".to_string(),
            (Self::Pressed, Flag(v)) => param_attr("pressed", v),
            (Self::StrokeWidth, Number(v)) => param_attr("strokeWidth", v),
            (Self::Min, Number(v)) => param_attr("min", v),
            (Self::Max, Number(v)) => param_attr("max", v),
            (Self::Step, Number(v)) => param_attr("step", v),
            (Self::Ratio, Text(v)) => param_attr("ratio", v),
            (Self::Fill, Text(v)) => str_attr("fill", v),
            (Self::Open, Text(v)) => param_attr("open", v),
            (Self::OpenChange, Text(v)) => param_attr("onOpenChange", v),
            (Self::Other, Map(map)) => return other_attrs(map),
            _ => return Vec::new(),
        };

        vec![attr]
    }
}

fn opt_text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}

fn number(value: u32) -> FieldValue<'static> {
    FieldValue::Number(i64::from(value))
}

impl Component {
    /// The fields this component exposes to the common table, in output order.
    pub fn common_fields(&self) -> Vec<(CommonField, FieldValue<'_>)> {
        use CommonField as F;
        use FieldValue::{Flag, Map, Text};

        let fields: Vec<(CommonField, Option<FieldValue<'_>>)> = match self {
            Self::Accordion(a) => vec![(
                F::Type,
                Some(Text(match a.kind {
                    AccordionType::Single => "single",
                    AccordionType::Multiple => "multiple",
                })),
            )],
            Self::Alert(a) => vec![(F::Variant, Some(Text(&a.variant)))],
            Self::AspectRatio(a) => vec![(F::Ratio, Some(Text(&a.ratio)))],
            Self::Badge(b) => vec![
                (F::Variant, Some(Text(&b.variant))),
                (F::Styles, opt_text(&b.styles)),
            ],
            Self::Button(b) => vec![
                (F::Url, opt_text(&b.url)),
                (F::Variant, Some(Text(&b.variant))),
                (F::Size, Some(Text(&b.size))),
                (F::Disabled, Some(Flag(b.disabled))),
                (F::Styles, opt_text(&b.styles)),
                (F::Other, Some(Map(&b.other))),
            ],
            Self::Calendar(c) => vec![(
                F::Mode,
                Some(Text(match c.mode {
                    CalendarMode::Single => "single",
                    CalendarMode::Multiple => "multiple",
                    CalendarMode::Range => "range",
                })),
            )],
            Self::Checkbox(c) => vec![
                (F::Id, Some(Text(&c.id))),
                (F::Checked, Some(Flag(c.checked))),
                (F::Disabled, Some(Flag(c.disabled))),
            ],
            Self::FileUpload(f) => vec![(F::ApiEndpoint, Some(Text(&f.api_endpoint)))],
            Self::Input(i) => vec![
                (F::Id, Some(Text(&i.id))),
                (F::Type, Some(Text(&i.input_type))),
                (F::Placeholder, opt_text(&i.placeholder)),
                (F::Disabled, Some(Flag(i.disabled))),
                (F::Styles, opt_text(&i.styles)),
                (F::Other, Some(Map(&i.other))),
            ],
            Self::InputOtp(o) => vec![(F::NumInputs, Some(number(o.num_inputs)))],
            Self::Label(l) => vec![
                (F::Name, Some(Text(&l.name))),
                (F::Styles, opt_text(&l.styles)),
            ],
            Self::RadioGroup(r) => vec![(F::DefaultValue, Some(Text(&r.default_value)))],
            Self::Separator(s) => vec![
                (
                    F::Orientation,
                    Some(Text(match s.orientation {
                        Orientation::Horizontal => "horizontal",
                        Orientation::Vertical => "vertical",
                    })),
                ),
                (F::Styles, opt_text(&s.styles)),
            ],
            Self::Slider(s) => vec![
                (F::Min, Some(number(s.min))),
                (F::Max, Some(number(s.max))),
                (F::Step, Some(number(s.step))),
            ],
            Self::Switch(s) => vec![
                (F::Id, Some(Text(&s.id))),
                (F::Checked, Some(Flag(s.checked))),
                (F::Disabled, Some(Flag(s.disabled))),
            ],
            Self::Textarea(t) => vec![
                (F::Id, Some(Text(&t.id))),
                (F::Placeholder, opt_text(&t.placeholder)),
                (F::Styles, opt_text(&t.styles)),
            ],
            Self::Toggle(t) => vec![
                (F::Size, Some(Text(&t.size))),
                (F::Disabled, Some(Flag(t.disabled))),
                (F::Pressed, t.pressed.map(Flag)),
            ],
            Self::Avatar(_)
            | Self::Collapsible(_)
            | Self::DropdownMenu(_)
            | Self::Pagination(_)
            | Self::Progress(_)
            | Self::Select(_)
            | Self::Tooltip(_) => Vec::new(),
        };

        fields
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect()
    }
}

// ── component table ───────────────────────────────────────────────────────────

/// Attributes specific to one component, rendered after the common ones.
pub fn component_attributes(component: &Component) -> Vec<String> {
    let states = component.state_names();

    match component {
        Component::Calendar(c) => {
            let Some(state) = states.first() else {
                return Vec::new();
            };
            let on_select = match c.mode {
                CalendarMode::Multiple => param_attr(
                    "onSelect",
                    format!("(dates) => {}(dates || [])", state.setter),
                ),
                _ => param_attr("onSelect", &state.setter),
            };
            let mut attrs = vec![param_attr("selected", &state.getter), on_select];
            if c.required {
                attrs.push("required".into());
            }
            if let Some(months) = c.num_months {
                attrs.push(param_attr("numberOfMonths", months));
            }
            if let Some(year) = c.from_year {
                attrs.push(param_attr("fromYear", year));
            }
            if let Some(year) = c.to_year {
                attrs.push(param_attr("toYear", year));
            }
            attrs.push(str_attr("className", "rounded-md border"));
            attrs
        }
        Component::Collapsible(_) => match states.first() {
            Some(state) => vec![
                param_attr("open", &state.getter),
                param_attr("onOpenChange", &state.setter),
                str_attr("className", "w-[350px] space-y-2"),
            ],
            None => Vec::new(),
        },
        Component::InputOtp(otp) => match otp.pattern.as_deref() {
            Some(pattern) => match otp_pattern_constant(pattern) {
                Some(constant) => vec![param_attr("pattern", constant)],
                None => vec![str_attr("pattern", pattern)],
            },
            None => Vec::new(),
        },
        Component::Slider(s) => vec![
            param_attr("defaultValue", format!("[{}]", s.value)),
            param_attr("className", format!("cn(\"w-[{}%]\")", s.bar_size)),
        ],
        Component::Toggle(t) => {
            let label = if t.style == "default" {
                "Toggle".to_string()
            } else {
                format!("Toggle {}", t.style)
            };
            vec![str_attr("aria-label", &label)]
        }
        Component::Accordion(a) => {
            let mut attrs = Vec::new();
            if a.kind == AccordionType::Single {
                attrs.push("collapsible".to_string());
            }
            if a.orientation != Orientation::Vertical {
                attrs.push(str_attr("orientation", &a.orientation.to_string()));
            }
            attrs
        }
        Component::Progress(_) => states
            .first()
            .map(|state| vec![param_attr("value", &state.getter)])
            .unwrap_or_default(),
        Component::DropdownMenu(menu) if !menu.modal => vec![param_attr("modal", false)],
        _ => Vec::new(),
    }
}

/// The `input-otp` constant for a known pattern name.
pub fn otp_pattern_constant(pattern: &str) -> Option<&'static str> {
    match pattern {
        "digits" => Some("REGEXP_ONLY_DIGITS"),
        "chars" => Some("REGEXP_ONLY_CHARS"),
        "digits_and_chars" => Some("REGEXP_ONLY_DIGITS_AND_CHARS"),
        _ => None,
    }
}

/// Full attribute list: common table first, then the component table.
pub fn build_attributes(component: &Component) -> Vec<String> {
    let mut attrs: Vec<String> = component
        .common_fields()
        .into_iter()
        .flat_map(|(field, value)| field.render(value))
        .collect();
    attrs.extend(component_attributes(component));
    attrs
}
