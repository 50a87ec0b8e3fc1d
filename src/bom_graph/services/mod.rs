pub mod coordinate_resolver;
pub mod enhancer;
pub mod license_builder;
pub mod tree_builder;

pub use coordinate_resolver::CoordinateResolver;
pub use enhancer::{KnowledgeBaseEnhancer, DEFAULT_MAX_CONCURRENT_SCANS};
pub use license_builder::LicenseExpressionBuilder;
pub use tree_builder::{ComponentTreeBuilder, DEFAULT_PAGE_LIMIT};
