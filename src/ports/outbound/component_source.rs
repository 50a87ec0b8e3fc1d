use crate::bom_graph::domain::ComponentSummary;
use crate::shared::error::SourceError;
use async_trait::async_trait;
use uuid::Uuid;

/// ComponentSource port for the product-tracking service.
///
/// This port abstracts the upstream BOM endpoint that lists the root
/// components of the selected product version and, for each component,
/// the paginated children behind its hierarchical link id.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync` so the
/// build can issue fetches from a shared runtime.
#[async_trait]
pub trait ComponentSource: Send + Sync {
    /// Fetches the root component set of the selected product version.
    ///
    /// # Errors
    /// A failure here is fatal to the whole build.
    async fn fetch_roots(&self) -> Result<Vec<ComponentSummary>, SourceError>;

    /// Fetches the children of one component version.
    ///
    /// `hierarchical_id` is the opaque link id from the component's
    /// summary; callers never invoke this for an id of zero.
    ///
    /// # Errors
    /// A failure here only affects the subtree being fetched.
    async fn fetch_children(
        &self,
        component_id: Uuid,
        version_id: Uuid,
        hierarchical_id: i64,
    ) -> Result<Vec<ComponentSummary>, SourceError>;
}
