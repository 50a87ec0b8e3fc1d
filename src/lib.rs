//! bomsmith - BOM acquisition tool for product-tracking services
//!
//! This library rebuilds the hierarchical bill of materials of a product
//! version tracked on a Black Duck style service and enriches it with
//! detected licenses from a scanning service, following hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_graph`): Coordinates, license expressions, the
//!   component tree and the services that build and enrich it
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bomsmith::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Connect and resolve the selected product version
//! let (source, product) = ProductTrackerClient::connect(
//!     "https://tracker.example.com",
//!     Some("api-token".to_string()),
//!     "router-firmware",
//!     "2.1.0",
//! )
//! .await?;
//!
//! // Create remaining adapters
//! let scanner = LicenseScannerClient::new("https://scanner.example.com", SpdxIdentifierParser::new())?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create and execute the use case
//! let use_case = BuildBomUseCase::new(source, Some(scanner), SpdxIdentifierParser::new(), progress_reporter);
//! let response = use_case.execute(BomRequest::new(Some(product), false)).await?;
//!
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_graph;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{LicenseScannerClient, ProductTrackerClient};
    pub use crate::adapters::outbound::spdx::SpdxIdentifierParser;
    pub use crate::application::dto::{BomRequest, BomResponse};
    pub use crate::application::use_cases::BuildBomUseCase;
    pub use crate::bom_graph::domain::{
        BomCondition, BuildReport, ComponentNode, ComponentSummary, LicenseExpression,
        PackageCoordinate, ProductDescriptor, ScanResult,
    };
    pub use crate::bom_graph::services::{
        ComponentTreeBuilder, CoordinateResolver, KnowledgeBaseEnhancer, LicenseExpressionBuilder,
    };
    pub use crate::ports::outbound::{
        ComponentSource, LicenseIdentifierParser, LicenseScanService, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
