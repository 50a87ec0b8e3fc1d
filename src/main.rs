mod adapters;
mod application;
mod bom_graph;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::network::{LicenseScannerClient, ProductTrackerClient};
use adapters::outbound::spdx::SpdxIdentifierParser;
use application::dto::BomRequest;
use application::use_cases::BuildBomUseCase;
use bom_graph::services::{DEFAULT_MAX_CONCURRENT_SCANS, DEFAULT_PAGE_LIMIT};
use cli::Args;
use config::ConfigFile;
use ports::outbound::OutputPresenter;
use shared::error::{BomError, ExitCode};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            match e.downcast_ref::<BomError>() {
                Some(BomError::Configuration { .. }) => ExitCode::InvalidArguments,
                _ => ExitCode::ApplicationError,
            }
        }
    };

    process::exit(exit_code.as_i32());
}

/// Effective settings after merging CLI arguments over the config file.
#[derive(Debug)]
struct Settings {
    url: String,
    token: Option<String>,
    project: String,
    project_version: String,
    scanner_url: Option<String>,
    max_scans: usize,
    page_limit: usize,
}

fn merge_settings(args: &Args, config: &ConfigFile) -> Result<Settings> {
    let url = args
        .url
        .clone()
        .or_else(|| config.url.clone())
        .ok_or_else(|| BomError::Configuration {
            message: "no product-tracking service URL given (--url or config 'url')".to_string(),
        })?;
    let project = args
        .project
        .clone()
        .or_else(|| config.project.clone())
        .ok_or_else(|| BomError::Configuration {
            message: "no project name given (--project or config 'project')".to_string(),
        })?;
    let project_version = args
        .project_version
        .clone()
        .or_else(|| config.project_version.clone())
        .ok_or_else(|| BomError::Configuration {
            message: "no project version given (--project-version or config 'project_version')"
                .to_string(),
        })?;

    Ok(Settings {
        url,
        token: args.token.clone().or_else(|| config.token.clone()),
        project,
        project_version,
        scanner_url: args.scanner_url.clone().or_else(|| config.scanner_url.clone()),
        max_scans: args
            .max_scans
            .or(config.max_scans)
            .unwrap_or(DEFAULT_MAX_CONCURRENT_SCANS),
        page_limit: config.page_limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    })
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration: explicit path, or auto-discovery in cwd
    let config = match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let settings = merge_settings(&args, &config)?;

    // Connect and resolve the selected product version
    let (source, product) = ProductTrackerClient::connect(
        &settings.url,
        settings.token.clone(),
        &settings.project,
        &settings.project_version,
    )
    .await?;

    // Create adapters (Dependency Injection)
    let scanner = match (&settings.scanner_url, args.no_scan) {
        (Some(scanner_url), false) => Some(LicenseScannerClient::new(
            scanner_url,
            SpdxIdentifierParser::new(),
        )?),
        _ => None,
    };
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = BuildBomUseCase::new(source, scanner, SpdxIdentifierParser::new(), progress_reporter);

    let request = BomRequest::new(Some(product), args.no_scan)
        .with_max_concurrent_scans(settings.max_scans)
        .with_page_limit(settings.page_limit);

    // Execute use case
    let response = use_case.execute(request).await?;
    let conditions_reported = !response.report.is_clean();

    // Serialize and present the document
    let document = serde_json::to_string_pretty(&response)?;
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&format!("{}\n", document))?;

    if args.strict && conditions_reported {
        return Ok(ExitCode::ConditionsReported);
    }

    Ok(ExitCode::Success)
}
