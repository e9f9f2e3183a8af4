//! Typed field sets for every supported component.
//!
//! Field names mirror the keys accepted in `zentra/models/zentra.toml`.
//! Unknown keys are rejected so typos surface as invalid configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── shared value enums ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccordionType {
    #[default]
    Single,
    Multiple,
}

impl fmt::Display for AccordionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    #[default]
    Single,
    Multiple,
    Range,
}

impl fmt::Display for CalendarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multiple => write!(f, "multiple"),
            Self::Range => write!(f, "range"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuType {
    #[default]
    Default,
    Checkbox,
    Radio,
}

fn default_variant() -> String {
    "default".into()
}

fn default_input_type() -> String {
    "text".into()
}

fn default_true() -> bool {
    true
}

// ── presentation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Accordion {
    pub items: Vec<AccordionItem>,
    #[serde(default)]
    pub kind: AccordionType,
    #[serde(default)]
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AspectRatio {
    /// JavaScript expression such as `16 / 9`.
    pub ratio: String,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
    pub fallback_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Badge {
    pub text: String,
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default)]
    pub styles: Option<String>,
}

/// A value shown with an animated fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Progress {
    pub name: String,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub min: u32,
    #[serde(default = "Progress::default_max")]
    pub max: u32,
}

impl Progress {
    fn default_max() -> u32 {
        100
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Separator {
    #[serde(default = "Separator::default_orientation")]
    pub orientation: Orientation,
    #[serde(default)]
    pub styles: Option<String>,
}

impl Separator {
    fn default_orientation() -> Orientation {
        Orientation::Horizontal
    }
}

// ── notification ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alert {
    pub title: String,
    pub description: String,
    /// Lucide icon name in kebab-case, e.g. `circle-alert`.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_variant")]
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tooltip {
    pub text: String,
    pub trigger: String,
    /// Render the trigger as an outline `Button`.
    #[serde(default)]
    pub trigger_button: bool,
}

// ── control ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Button {
    pub text: String,
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default = "default_variant")]
    pub size: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Lucide icon placed before the text.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub styles: Option<String>,
    #[serde(default)]
    pub other: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Calendar {
    pub name: String,
    #[serde(default)]
    pub mode: CalendarMode,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub num_months: Option<u32>,
    #[serde(default)]
    pub from_year: Option<u32>,
    #[serde(default)]
    pub to_year: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Checkbox {
    pub id: String,
    pub label: String,
    /// Optional description shown under the label.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Collapsible {
    pub name: String,
    pub title: String,
    /// The first item is always visible, the rest collapse.
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileUpload {
    pub api_endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Input {
    pub id: String,
    #[serde(default = "default_input_type")]
    pub input_type: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub styles: Option<String>,
    #[serde(default)]
    pub other: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputOtp {
    #[serde(default = "InputOtp::default_inputs")]
    pub num_inputs: u32,
    #[serde(default = "InputOtp::default_groups")]
    pub num_groups: u32,
    /// Either a known pattern name (`digits`, `chars`, `digits_and_chars`)
    /// or a literal regular expression.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl InputOtp {
    fn default_inputs() -> u32 {
        6
    }

    fn default_groups() -> u32 {
        1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Label {
    /// The `id` of the element this label describes.
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub styles: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pagination {
    pub name: String,
    #[serde(default = "Pagination::default_items_per_page")]
    pub items_per_page: u32,
    pub total_items: u32,
    pub links: Vec<String>,
    #[serde(default)]
    pub ellipsis: bool,
}

impl Pagination {
    fn default_items_per_page() -> u32 {
        10
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadioButton {
    pub id: String,
    pub value: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadioGroup {
    pub default_value: String,
    pub items: Vec<RadioButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectGroup {
    #[serde(default)]
    pub label: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Select {
    pub display_text: String,
    pub groups: Vec<SelectGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slider {
    #[serde(default = "Slider::default_value")]
    pub value: u32,
    #[serde(default)]
    pub min: u32,
    #[serde(default = "Slider::default_max")]
    pub max: u32,
    #[serde(default = "Slider::default_step")]
    pub step: u32,
    /// Width of the bar as a percentage of its container.
    #[serde(default = "Slider::default_bar_size")]
    pub bar_size: u32,
}

impl Slider {
    fn default_value() -> u32 {
        50
    }

    fn default_max() -> u32 {
        100
    }

    fn default_step() -> u32 {
        1
    }

    fn default_bar_size() -> u32 {
        60
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Switch {
    pub id: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Textarea {
    pub id: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub styles: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Toggle {
    pub text: String,
    /// Appended to the `aria-label`; `default` adds nothing.
    #[serde(default = "default_variant")]
    pub style: String,
    #[serde(default = "default_variant")]
    pub size: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub pressed: Option<bool>,
}

// ── navigation ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DropdownMenu {
    pub name: String,
    pub trigger: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: MenuType,
    pub items: Vec<String>,
    /// Close the menu after an item is picked.
    #[serde(default = "default_true")]
    pub modal: bool,
}
