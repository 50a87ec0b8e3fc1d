use crate::shared::Result;

/// OutputPresenter port for presenting the final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// for the serialized BOM graph.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    fn present(&self, content: &str) -> Result<()>;
}
