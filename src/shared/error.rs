use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - BOM built without conditions, or conditions not treated as fatal
    Success = 0,
    /// The build report contains conditions and --strict was requested
    ConditionsReported = 1,
    /// Invalid command-line arguments or configuration
    InvalidArguments = 2,
    /// Application error (service error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConditionsReported => write!(f, "Conditions Reported (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the component source collaborator.
///
/// Both variants are recoverable when they concern a single subtree;
/// only a failure on the root set aborts the whole build.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("component service is not reachable: {0}")]
    Unavailable(String),

    #[error("component service returned unexpected response: status {0}")]
    UnexpectedStatus(u16),
}

/// Errors raised by the license scan collaborator.
///
/// Scan failures never abort the build; the affected package simply
/// keeps its unresolved license and the condition ends up in the report.
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    #[error("license scanner is not reachable: {0}")]
    Unavailable(String),

    #[error("license scanner returned unexpected response: status {0}")]
    UnexpectedStatus(u16),
}

/// Fatal application errors for the BOM build.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("Failed to fetch the root component set: {details}\n\n💡 Hint: Verify the service URL and that the configured token grants read access to the project")]
    RootFetchFailed { details: String },

    #[error("Project '{name}' was not found on the product-tracking service")]
    ProjectNotFound { name: String },

    #[error("Version '{version}' was not found for project '{project}'")]
    VersionNotFound { project: String, version: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}
