//! `zentra generate`: build components and pages from the models file.

use tracing::{debug, info};

use zentra_adapters::{GithubRetriever, LocalFilesystem, TomlManifestParser};
use zentra_core::application::{ALL_TARGET, GenerateOutcome, GenerateReport, GenerateService};
use zentra_core::domain::{ModelFileStorage, ProjectPaths};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    messages::{self, code},
    output::OutputManager,
    progress::StageProgress,
};

pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<u8> {
    if args.filename != ALL_TARGET {
        output.warning(&format!(
            "Generating a single file is not supported yet, building everything instead of '{}'",
            args.filename
        ))?;
    }

    let paths = ProjectPaths::new(&global.project_dir);
    let retriever =
        GithubRetriever::new(config.timeout()).with_cli_context(|| "building HTTP client")?;
    debug!(base_url = %config.remote.base_url, "using remote source");

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(retriever),
        Box::new(TomlManifestParser::new()),
        paths,
        config.remote.base_url.clone(),
    );

    let progress = StageProgress::new(
        output.is_interactive(),
        output.is_quiet(),
        !output.supports_color(),
    );
    let outcome = service.run(&progress, &args.filename)?;

    let status = match &outcome {
        GenerateOutcome::Complete(_) => code::GENERATE_COMPLETE,
        GenerateOutcome::NoNewComponents(_) => code::NO_NEW_COMPONENTS,
    };
    let report = outcome.report();
    info!(
        added = report.storage.components.counts.generate,
        removed = report.storage.components.counts.remove,
        pages = report.pages_written.len(),
        "Generation finished"
    );

    output.panel(messages::lookup(status), &summary(report))?;
    Ok(status)
}

/// Added/removed lines for the success panel.
fn summary(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    section(&mut lines, "Components", &report.storage.components);
    section(&mut lines, "Pages", &report.storage.pages);
    lines
}

fn section(lines: &mut Vec<String>, label: &str, storage: &ModelFileStorage) {
    if storage.is_unchanged() {
        return;
    }
    lines.push(format!(
        "{label}: {} added, {} removed",
        storage.counts.generate, storage.counts.remove
    ));
    lines.extend(storage.generate.iter().map(|pair| format!("  + {pair}")));
    lines.extend(storage.remove.iter().map(|pair| format!("  - {pair}")));
}
