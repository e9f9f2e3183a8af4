//! `zentra init`: make a directory a Zentra project.

use std::io::IsTerminal as _;
use std::path::Path;

use tracing::info;

use zentra_adapters::{LocalFilesystem, TomlManifestParser};
use zentra_core::application::{SetupService, SetupStatus};
use zentra_core::domain::ProjectPaths;

use crate::{
    cli::{GlobalArgs, InitArgs},
    error::{CliError, CliResult},
    messages::{self, code},
    output::OutputManager,
};

pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<u8> {
    let paths = ProjectPaths::new(&global.project_dir);
    let service = SetupService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TomlManifestParser::new()),
        paths.clone(),
    );

    let exists = match service.status().map_err(CliError::Setup)? {
        SetupStatus::AlreadyConfigured => {
            output.panel(messages::lookup(code::ALREADY_CONFIGURED), &[])?;
            return Ok(code::ALREADY_CONFIGURED);
        }
        SetupStatus::NeedsSetup(exists) => exists,
    };

    if !args.yes && std::io::stdin().is_terminal() && !confirm(paths.root())? {
        return Err(CliError::Cancelled);
    }

    let created = service.initialise(&exists).map_err(CliError::Setup)?;
    info!(created = created.len(), root = %paths.root().display(), "Project set up");

    let body: Vec<String> = created
        .iter()
        .map(|path| format!("+ {}", relative(path, paths.root()).display()))
        .collect();
    output.panel(messages::lookup(code::SETUP_COMPLETE), &body)?;

    Ok(code::SETUP_COMPLETE)
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(feature = "interactive")]
fn confirm(root: &Path) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!("Make {} a Zentra project?", root.display()))
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e.to_string()),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(root: &Path) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Make {} a Zentra project? [Y/n] ", root.display());
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
