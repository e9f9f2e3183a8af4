//! The closed set of components a manifest may declare.
//!
//! Each variant owns a typed field set (see [`models`]). Behaviour that
//! differs per component (library folder, children, state names) is matched
//! here once, so adding a component means adding one variant and following
//! the compiler.

pub mod models;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::naming::{capitalize, tsx_filename};
use crate::domain::pair::LibraryNamePair;
use crate::domain::validation::DomainValidator;

pub use models::*;

/// Folder holding shadcn/ui components.
pub const UI_LIBRARY: &str = "ui";
/// Folder holding uploadthing components.
pub const UPLOADTHING_LIBRARY: &str = "uploadthing";

/// A component declared in a page block.
///
/// The manifest selects the variant with `type = "<Name>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    Accordion(Accordion),
    Alert(Alert),
    AspectRatio(AspectRatio),
    Avatar(Avatar),
    Badge(Badge),
    Button(Button),
    Calendar(Calendar),
    Checkbox(Checkbox),
    Collapsible(Collapsible),
    DropdownMenu(DropdownMenu),
    FileUpload(FileUpload),
    Input(Input),
    #[serde(rename = "InputOTP")]
    InputOtp(InputOtp),
    Label(Label),
    Pagination(Pagination),
    Progress(Progress),
    RadioGroup(RadioGroup),
    Select(Select),
    Separator(Separator),
    Slider(Slider),
    Switch(Switch),
    Textarea(Textarea),
    Toggle(Toggle),
    Tooltip(Tooltip),
}

/// A `[value, setter]` pair produced by a `useState` hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNames {
    pub getter: String,
    pub setter: String,
}

impl StateNames {
    fn prefixed(name: &str, suffix: &str) -> Self {
        Self {
            getter: format!("{name}{suffix}"),
            setter: format!("{name}Set{suffix}"),
        }
    }
}

impl Component {
    /// The component's type name as written in the manifest.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Accordion(_) => "Accordion",
            Self::Alert(_) => "Alert",
            Self::AspectRatio(_) => "AspectRatio",
            Self::Avatar(_) => "Avatar",
            Self::Badge(_) => "Badge",
            Self::Button(_) => "Button",
            Self::Calendar(_) => "Calendar",
            Self::Checkbox(_) => "Checkbox",
            Self::Collapsible(_) => "Collapsible",
            Self::DropdownMenu(_) => "DropdownMenu",
            Self::FileUpload(_) => "FileUpload",
            Self::Input(_) => "Input",
            Self::InputOtp(_) => "InputOTP",
            Self::Label(_) => "Label",
            Self::Pagination(_) => "Pagination",
            Self::Progress(_) => "Progress",
            Self::RadioGroup(_) => "RadioGroup",
            Self::Select(_) => "Select",
            Self::Separator(_) => "Separator",
            Self::Slider(_) => "Slider",
            Self::Switch(_) => "Switch",
            Self::Textarea(_) => "Textarea",
            Self::Toggle(_) => "Toggle",
            Self::Tooltip(_) => "Tooltip",
        }
    }

    /// The library folder the component's template lives in.
    pub fn library(&self) -> &'static str {
        match self {
            Self::FileUpload(_) => UPLOADTHING_LIBRARY,
            _ => UI_LIBRARY,
        }
    }

    /// Template filename, e.g. `input-otp.tsx`.
    pub fn filename(&self) -> String {
        tsx_filename(self.type_name())
    }

    pub fn pair(&self) -> LibraryNamePair {
        LibraryNamePair::new(self.library(), self.filename())
    }

    /// Other components whose files this one renders inside itself.
    pub fn children(&self) -> Vec<&'static str> {
        match self {
            Self::Collapsible(_) => vec!["Button"],
            Self::Checkbox(_) | Self::RadioGroup(_) => vec!["Label"],
            Self::Tooltip(tooltip) if tooltip.trigger_button => vec!["Button"],
            _ => Vec::new(),
        }
    }

    /// The component's own pair followed by its children's pairs.
    pub fn pairs(&self) -> Vec<LibraryNamePair> {
        let mut pairs = vec![self.pair()];
        pairs.extend(
            self.children()
                .into_iter()
                .map(|child| LibraryNamePair::new(UI_LIBRARY, tsx_filename(child))),
        );
        pairs
    }

    /// Sub-component names used when a template's exports are unknown.
    pub fn default_child_names(&self) -> &'static [&'static str] {
        match self {
            Self::Accordion(_) => &["AccordionItem", "AccordionTrigger", "AccordionContent"],
            Self::Alert(_) => &["AlertTitle", "AlertDescription"],
            Self::Avatar(_) => &["AvatarImage", "AvatarFallback"],
            Self::Collapsible(_) => &["CollapsibleTrigger", "CollapsibleContent"],
            Self::DropdownMenu(_) => &[
                "DropdownMenuTrigger",
                "DropdownMenuContent",
                "DropdownMenuLabel",
                "DropdownMenuSeparator",
                "DropdownMenuGroup",
                "DropdownMenuItem",
                "DropdownMenuCheckboxItem",
                "DropdownMenuRadioGroup",
                "DropdownMenuRadioItem",
            ],
            Self::InputOtp(_) => &["InputOTPGroup", "InputOTPSlot", "InputOTPSeparator"],
            Self::Pagination(_) => &[
                "PaginationContent",
                "PaginationItem",
                "PaginationLink",
                "PaginationPrevious",
                "PaginationNext",
                "PaginationEllipsis",
            ],
            Self::RadioGroup(_) => &["RadioGroupItem"],
            Self::Select(_) => &[
                "SelectTrigger",
                "SelectValue",
                "SelectContent",
                "SelectGroup",
                "SelectLabel",
                "SelectItem",
            ],
            Self::Tooltip(_) => &["TooltipProvider", "TooltipTrigger", "TooltipContent"],
            _ => &[],
        }
    }

    /// The JSX element that encloses the component's output.
    pub fn container_name(&self) -> &'static str {
        match self {
            Self::Tooltip(_) => "TooltipProvider",
            other => other.type_name(),
        }
    }

    /// The instance name for components that own React state.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Calendar(c) => Some(&c.name),
            Self::Collapsible(c) => Some(&c.name),
            Self::DropdownMenu(c) => Some(&c.name),
            Self::Pagination(c) => Some(&c.name),
            Self::Progress(c) => Some(&c.name),
            _ => None,
        }
    }

    /// State hooks owned by this component, in declaration order.
    pub fn state_names(&self) -> Vec<StateNames> {
        match self {
            Self::Calendar(c) => vec![StateNames::prefixed(&c.name, "Date")],
            Self::Collapsible(c) => vec![StateNames::prefixed(&c.name, "IsOpen")],
            Self::Pagination(c) => vec![
                StateNames::prefixed(&c.name, "StartIdx"),
                StateNames::prefixed(&c.name, "EndIdx"),
            ],
            Self::Progress(c) => vec![StateNames::prefixed(&c.name, "Progress")],
            Self::DropdownMenu(menu) => match menu.kind {
                MenuType::Default => Vec::new(),
                MenuType::Checkbox => menu
                    .items
                    .iter()
                    .map(|item| {
                        let word = item_identifier(item);
                        StateNames {
                            getter: format!("show{word}"),
                            setter: format!("setShow{word}"),
                        }
                    })
                    .collect(),
                MenuType::Radio => vec![StateNames::prefixed(&menu.name, "Position")],
            },
            _ => Vec::new(),
        }
    }

    /// Check the field constraints the type system cannot express.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = self.name() {
            DomainValidator::validate_model_name(name)?;
        }

        let invalid = |reason: &str| DomainError::InvalidComponent {
            component: self.type_name(),
            reason: reason.to_string(),
        };

        match self {
            Self::Accordion(a) if a.items.is_empty() => Err(invalid("needs at least one item")),
            Self::Collapsible(c) if c.items.is_empty() => Err(invalid("needs at least one item")),
            Self::DropdownMenu(d) if d.items.is_empty() => Err(invalid("needs at least one item")),
            Self::RadioGroup(r) if r.items.is_empty() => Err(invalid("needs at least one item")),
            Self::Select(s) if s.groups.iter().all(|g| g.items.is_empty()) => {
                Err(invalid("needs at least one item"))
            }
            Self::InputOtp(otp) if otp.num_groups == 0 || otp.num_groups > otp.num_inputs => Err(
                invalid("`num_groups` must be between 1 and `num_inputs`"),
            ),
            Self::InputOtp(otp) if otp.num_inputs % otp.num_groups != 0 => {
                Err(invalid("`num_inputs` must divide evenly into `num_groups`"))
            }
            Self::Pagination(p) if p.items_per_page == 0 => {
                Err(invalid("`items_per_page` must be greater than 0"))
            }
            Self::Progress(p) if p.min > p.max || p.value > p.max => {
                Err(invalid("`value` and `min` must not exceed `max`"))
            }
            Self::Slider(s) if s.min > s.max || s.value > s.max || s.value < s.min => {
                Err(invalid("`value` must sit between `min` and `max`"))
            }
            Self::Slider(s) if s.bar_size == 0 || s.bar_size > 100 => {
                Err(invalid("`bar_size` is a percentage between 1 and 100"))
            }
            Self::Calendar(Calendar {
                from_year: Some(from),
                to_year: Some(to),
                ..
            }) if from > to => Err(invalid("`from_year` must not be after `to_year`")),
            _ => Ok(()),
        }
    }
}

/// The capitalized first word of a menu item, used for state names.
pub fn item_identifier(item: &str) -> String {
    let first = item.split_whitespace().next().unwrap_or_default();
    let cleaned: String = first.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    capitalize(&cleaned)
}

/// A lowercase `value` for menu and select items: the first two words
/// joined by a dash.
pub fn item_value(item: &str) -> String {
    item.split_whitespace()
        .take(2)
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Component {
        toml::from_str(source).expect("component should parse")
    }

    #[test]
    fn input_otp_uses_acronym_tag() {
        let component = parse("type = \"InputOTP\"\nnum_inputs = 6\nnum_groups = 2");
        assert_eq!(component.type_name(), "InputOTP");
        assert_eq!(component.filename(), "input-otp.tsx");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Component, _> = toml::from_str("type = \"Button\"\ntext = \"Go\"\ncolour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result: Result<Component, _> = toml::from_str("type = \"Carousel\"");
        assert!(result.is_err());
    }

    #[test]
    fn file_upload_lives_in_uploadthing() {
        let component = parse("type = \"FileUpload\"\napi_endpoint = \"media\"");
        assert_eq!(
            component.pair(),
            LibraryNamePair::new("uploadthing", "file-upload.tsx")
        );
    }

    #[test]
    fn children_add_pairs() {
        let collapsible = parse("type = \"Collapsible\"\nname = \"faq\"\ntitle = \"FAQ\"\nitems = [\"a\"]");
        assert_eq!(
            collapsible.pairs(),
            vec![
                LibraryNamePair::new("ui", "collapsible.tsx"),
                LibraryNamePair::new("ui", "button.tsx"),
            ]
        );

        let tooltip = parse("type = \"Tooltip\"\ntext = \"hi\"\ntrigger = \"hover\"");
        assert!(tooltip.children().is_empty());
    }

    #[test]
    fn state_names_follow_prefix_convention() {
        let pagination =
            parse("type = \"Pagination\"\nname = \"posts\"\ntotal_items = 40\nlinks = [\"#\"]");
        let names = pagination.state_names();
        assert_eq!(names[0].getter, "postsStartIdx");
        assert_eq!(names[1].setter, "postsSetEndIdx");
    }

    #[test]
    fn checkbox_menu_state_per_item() {
        let menu = parse(
            "type = \"DropdownMenu\"\nname = \"view\"\ntrigger = \"Open\"\nkind = \"checkbox\"\nitems = [\"Status bar\", \"panel\"]",
        );
        let getters: Vec<String> = menu.state_names().into_iter().map(|s| s.getter).collect();
        assert_eq!(getters, vec!["showStatus", "showPanel"]);
    }

    #[test]
    fn bad_instance_name_fails_validation() {
        let calendar = parse("type = \"Calendar\"\nname = \"Monthly\"");
        assert!(matches!(
            calendar.validate(),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn otp_groups_must_divide_inputs() {
        let otp = parse("type = \"InputOTP\"\nnum_inputs = 5\nnum_groups = 2");
        assert!(otp.validate().is_err());
        let otp = parse("type = \"InputOTP\"\nnum_inputs = 6\nnum_groups = 3");
        assert!(otp.validate().is_ok());
    }

    #[test]
    fn item_helpers() {
        assert_eq!(item_identifier("status bar"), "Status");
        assert_eq!(item_value("Top Left corner"), "top-left");
    }
}
