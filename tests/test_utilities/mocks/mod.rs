/// Mock implementations for testing
mod mock_component_source;
mod mock_progress_reporter;
mod mock_scan_service;

pub use mock_component_source::MockComponentSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_service::MockScanService;
