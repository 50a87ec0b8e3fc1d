/// Network adapters for external service APIs
mod product_client;
mod scan_client;

pub use product_client::ProductTrackerClient;
pub use scan_client::LicenseScannerClient;
