use crate::bom_graph::domain::LicenseExpression;

/// LicenseIdentifierParser port for turning a single license identifier
/// into an expression leaf.
///
/// Parsing is total: unrecognized text yields a best-effort leaf rather
/// than an error, so callers never have to handle parse failures.
pub trait LicenseIdentifierParser: Send + Sync {
    fn parse(&self, identifier: &str) -> LicenseExpression;
}
