/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network services, console, files).
pub mod component_source;
pub mod license_parser;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_service;

pub use component_source::ComponentSource;
pub use license_parser::LicenseIdentifierParser;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_service::LicenseScanService;
