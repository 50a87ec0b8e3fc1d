use crate::bom_graph::domain::{PackageCoordinate, ScanResult};
use crate::shared::error::ScanError;
use async_trait::async_trait;

/// LicenseScanService port for the license-detection service.
///
/// One scan request covers one package coordinate, optionally hinting at
/// the package's source location so the scanner can fetch the code itself.
#[async_trait]
pub trait LicenseScanService: Send + Sync {
    /// Queries the detected license for a single package.
    ///
    /// # Errors
    /// * [`ScanError::Unavailable`] when the scanner cannot be reached
    /// * [`ScanError::UnexpectedStatus`] for a non-success response
    async fn scan(
        &self,
        coordinate: &PackageCoordinate,
        source_location: Option<&str>,
    ) -> Result<ScanResult, ScanError>;
}
