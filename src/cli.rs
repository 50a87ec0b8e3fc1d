use clap::Parser;

/// Export the BOM of a product version tracked on a Black Duck style service
#[derive(Parser, Debug)]
#[command(name = "bomsmith")]
#[command(version)]
#[command(
    about = "Export the hierarchical bill of materials of a tracked product version",
    long_about = None
)]
pub struct Args {
    /// Base URL of the product-tracking service
    #[arg(long)]
    pub url: Option<String>,

    /// API token for the product-tracking service
    #[arg(long)]
    pub token: Option<String>,

    /// Name of the project to export
    #[arg(short, long)]
    pub project: Option<String>,

    /// Name of the project version to export
    #[arg(long = "project-version")]
    pub project_version: Option<String>,

    /// Base URL of the license-scanning service
    #[arg(long)]
    pub scanner_url: Option<String>,

    /// Skip the license-scanning enrichment phase
    #[arg(long)]
    pub no_scan: bool,

    /// Maximum number of concurrent license scan requests
    #[arg(long, value_name = "N")]
    pub max_scans: Option<usize>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a configuration file (defaults to ./bomsmith.config.yml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Exit non-zero when the build report contains any condition
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
