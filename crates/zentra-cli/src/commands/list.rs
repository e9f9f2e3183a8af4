//! Implementation of the `zentra list` command.

use zentra_adapters::GithubRetriever;
use zentra_core::application::{CatalogEntry, CatalogService};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<u8> {
    let retriever =
        GithubRetriever::new(config.timeout()).with_cli_context(|| "building HTTP client")?;
    let service = CatalogService::new(Box::new(retriever), config.remote.base_url.clone());

    let entries = service
        .entries()
        .with_cli_context(|| format!("listing {}", config.remote.base_url))?;
    let entries = filter(entries, args.library.as_deref());

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for entry in &entries {
                output.print(&format!(
                    "  {:<14} {:<10} {}",
                    entry.library, entry.file_type, entry.filename
                ))?;
            }
            output.print(&format!("\n{} templates", entries.len()))?;
        }

        ListFormat::List => {
            for entry in &entries {
                println!("{entry}");
            }
        }

        // Printed directly so piped output stays parseable.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| CliError::IoError {
                message: "failed to serialise template list".into(),
                source: e.into(),
            })?;
            println!("{json}");
        }
    }

    Ok(0)
}

fn filter(entries: Vec<CatalogEntry>, library: Option<&str>) -> Vec<CatalogEntry> {
    match library {
        Some(library) => entries
            .into_iter()
            .filter(|entry| entry.library == library)
            .collect(),
        None => entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(library: &str, filename: &str) -> CatalogEntry {
        CatalogEntry {
            library: library.into(),
            file_type: "base".into(),
            filename: filename.into(),
        }
    }

    #[test]
    fn library_filter_keeps_matches() {
        let entries = vec![entry("ui", "button.tsx"), entry("uploadthing", "file-upload.tsx")];
        let kept = filter(entries, Some("ui"));
        assert_eq!(kept, vec![entry("ui", "button.tsx")]);
    }

    #[test]
    fn no_filter_keeps_everything() {
        let entries = vec![entry("ui", "button.tsx"), entry("uploadthing", "file-upload.tsx")];
        assert_eq!(filter(entries.clone(), None), entries);
    }
}
