use crate::bom_graph::domain::ProductDescriptor;
use crate::bom_graph::services::{DEFAULT_MAX_CONCURRENT_SCANS, DEFAULT_PAGE_LIMIT};

/// BomRequest - Internal request DTO for the BOM build use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external CLI surface.
#[derive(Debug, Clone)]
pub struct BomRequest {
    /// The product version selected on the product-tracking service,
    /// resolved during connection setup
    pub product: Option<ProductDescriptor>,
    /// Whether to skip the license-scanning enrichment phase
    pub skip_scan: bool,
    /// Bound on in-flight license scan requests
    pub max_concurrent_scans: usize,
    /// Children page bound; a full page is flagged as possibly truncated
    pub page_limit: usize,
}

impl BomRequest {
    pub fn new(product: Option<ProductDescriptor>, skip_scan: bool) -> Self {
        Self {
            product,
            skip_scan,
            max_concurrent_scans: DEFAULT_MAX_CONCURRENT_SCANS,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_max_concurrent_scans(mut self, max_concurrent_scans: usize) -> Self {
        self.max_concurrent_scans = max_concurrent_scans;
        self
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit;
        self
    }
}
