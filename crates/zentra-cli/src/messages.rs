//! Status codes and the message shown for each of them.
//!
//! Every exit code the CLI can produce, success or failure, has exactly one
//! entry in [`TEMPLATES`]. Codes without an entry fall back to the
//! unexpected-error template.

pub const GETTING_STARTED_URL: &str = "https://zentra.achronus.dev/starting/";
pub const ERROR_GUIDE_URL: &str = "https://zentra.achronus.dev/help/errors/";
pub const ISSUES_URL: &str = "https://github.com/Achronus/zentra/issues";

/// Exit codes.
pub mod code {
    pub const CONFIG_MISSING: u8 = 1;
    pub const INVALID_CONFIG: u8 = 2;
    pub const CONFIG_EMPTY: u8 = 3;
    pub const MODELS_DIR_MISSING: u8 = 5;

    pub const SETUP_COMPLETE: u8 = 10;
    pub const ALREADY_CONFIGURED: u8 = 11;
    pub const SETUP_NO_COMPONENTS: u8 = 12;

    pub const GENERATE_COMPLETE: u8 = 20;
    pub const NO_NEW_COMPONENTS: u8 = 21;
    pub const NO_COMPONENTS: u8 = 22;

    pub const USAGE: u8 = 64;
    pub const INTERNAL: u8 = 70;
    pub const REQUEST_FAILED: u8 = 90;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Title and follow-up lines for one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTemplate {
    pub code: u8,
    pub kind: MessageKind,
    pub title: &'static str,
    /// Things to check for errors, next steps for successes.
    pub details: &'static [&'static str],
}

impl MessageTemplate {
    const fn error(code: u8, title: &'static str, details: &'static [&'static str]) -> Self {
        Self {
            code,
            kind: MessageKind::Error,
            title,
            details,
        }
    }

    const fn success(code: u8, title: &'static str, details: &'static [&'static str]) -> Self {
        Self {
            code,
            kind: MessageKind::Success,
            title,
            details,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

const PROJECT_CHECKS: &[&str] = &[
    "You are running zentra from the project root (or pass -C <DIR>)",
    "The project was set up with `zentra init`",
];

const UNKNOWN: MessageTemplate = MessageTemplate::error(
    code::INTERNAL,
    "Well, this is awkward... something unexpected went wrong!",
    &[],
);

pub static TEMPLATES: &[MessageTemplate] = &[
    MessageTemplate::error(
        code::CONFIG_MISSING,
        "Models file missing!",
        PROJECT_CHECKS,
    ),
    MessageTemplate::error(
        code::INVALID_CONFIG,
        "Invalid models file detected!",
        &[
            "zentra/models/zentra.toml is valid TOML",
            "Every page listed in [app] register has a [[pages]] entry",
            "Each component only sets the fields its type supports",
        ],
    ),
    MessageTemplate::error(
        code::CONFIG_EMPTY,
        "Models file is empty!",
        &["The models file was saved after your last edit"],
    ),
    MessageTemplate::error(
        code::MODELS_DIR_MISSING,
        "Models folder is missing!",
        PROJECT_CHECKS,
    ),
    MessageTemplate::success(
        code::SETUP_COMPLETE,
        "Project set up!",
        &[
            "Describe your pages in zentra/models/zentra.toml",
            "Add each page name to the `register` list in [app]",
            "Run `zentra generate` to build them",
        ],
    ),
    MessageTemplate::success(
        code::ALREADY_CONFIGURED,
        "Project already configured!",
        &["Run `zentra generate` to build your pages"],
    ),
    MessageTemplate::error(
        code::SETUP_NO_COMPONENTS,
        "Project set up, but no components are registered!",
        &[
            "A page with components is listed in [app] register",
        ],
    ),
    MessageTemplate::success(
        code::GENERATE_COMPLETE,
        "Components and pages generated!",
        &["Copy what you need from zentra/generated into your app"],
    ),
    MessageTemplate::success(
        code::NO_NEW_COMPONENTS,
        "No new components to add!",
        &[
            "Pages were rebuilt from the current models",
            "Add new components to zentra/models/zentra.toml to fetch more",
        ],
    ),
    MessageTemplate::error(
        code::NO_COMPONENTS,
        "No components found in the models file!",
        &[
            "At least one page is listed in [app] register",
            "Registered pages have components under [[pages.blocks.components]]",
        ],
    ),
    MessageTemplate::error(code::USAGE, "Invalid command usage!", &[]),
    UNKNOWN,
    MessageTemplate::error(
        code::REQUEST_FAILED,
        "Could not fetch component templates!",
        &[
            "You are connected to the internet",
            "`remote.base_url` points at the Zentra components tree",
        ],
    ),
];

/// Shown instead of the [`code::REQUEST_FAILED`] entry when the remote
/// source answered but its page could not be read.
pub static MALFORMED_PAYLOAD: MessageTemplate = MessageTemplate::error(
    code::REQUEST_FAILED,
    "Component source returned a page Zentra could not read!",
    &[
        "`remote.base_url` points at a GitHub tree, not a raw file or another host",
        "You are running the latest zentra release",
    ],
);

/// Find the template for `code`, falling back to the unexpected-error one.
pub fn lookup(code: u8) -> &'static MessageTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.code == code)
        .unwrap_or(&UNKNOWN)
}

/// Links appended to every error panel.
pub fn more_help() -> [(&'static str, &'static str); 2] {
    [("Error guide", ERROR_GUIDE_URL), ("Issues", ISSUES_URL)]
}
