use crate::bom_graph::domain::{BuildReport, ComponentNode, ProductDescriptor};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// BomResponse - Internal response DTO from the BOM build use case
///
/// This DTO contains the rich data structures produced by the use case,
/// which adapters can then serialize to the appropriate output format.
#[derive(Debug, Clone, Serialize)]
pub struct BomResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductDescriptor>,
    pub components: Vec<ComponentNode>,
    pub report: BuildReport,
    pub metadata: BomMetadata,
}

impl BomResponse {
    pub fn new(
        product: Option<ProductDescriptor>,
        components: Vec<ComponentNode>,
        report: BuildReport,
        metadata: BomMetadata,
    ) -> Self {
        Self {
            product,
            components,
            report,
            metadata,
        }
    }
}

/// Document metadata: generation timestamp, tool identity and a unique
/// serial number per generated document.
#[derive(Debug, Clone, Serialize)]
pub struct BomMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl BomMetadata {
    pub fn generate() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}
