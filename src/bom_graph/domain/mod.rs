/// Domain model for the BOM graph: coordinates, license expressions,
/// component nodes and the build report.
pub mod component;
pub mod coordinate;
pub mod license;
pub mod report;

pub use component::{
    node_count, ComponentNode, ComponentSummary, ProductDescriptor, ScanResult, SUBPROJECT_TYPE,
};
pub use coordinate::{OriginDescriptor, PackageCoordinate};
pub use license::{LicenseCombinator, LicenseDescription, LicenseExpression};
pub use report::{BomCondition, BuildReport};
