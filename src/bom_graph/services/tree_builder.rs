use crate::bom_graph::domain::{
    BomCondition, BuildReport, ComponentNode, ComponentSummary, LicenseExpression,
    PackageCoordinate, SUBPROJECT_TYPE,
};
use crate::ports::outbound::{ComponentSource, LicenseIdentifierParser};
use futures::future::BoxFuture;
use uuid::Uuid;

use super::coordinate_resolver::CoordinateResolver;
use super::license_builder::LicenseExpressionBuilder;

/// Upper bound on one children page; a listing that reaches it may have
/// been truncated by the upstream service.
pub const DEFAULT_PAGE_LIMIT: usize = 999;

/// Rebuilds the hierarchical component tree from the flat summaries the
/// product-tracking service serves page by page.
///
/// Descent is depth first. Each node keeps its own ancestor chain, so an
/// edge pointing back into that chain is cut and reported instead of
/// recursed into. A failed child fetch loses only that subtree; siblings
/// and the rest of the build continue.
pub struct ComponentTreeBuilder<'a, S, P>
where
    S: ComponentSource,
    P: LicenseIdentifierParser,
{
    source: &'a S,
    resolver: &'a CoordinateResolver,
    licenses: &'a LicenseExpressionBuilder<'a, P>,
    page_limit: usize,
}

impl<'a, S, P> ComponentTreeBuilder<'a, S, P>
where
    S: ComponentSource,
    P: LicenseIdentifierParser,
{
    pub fn new(
        source: &'a S,
        resolver: &'a CoordinateResolver,
        licenses: &'a LicenseExpressionBuilder<'a, P>,
    ) -> Self {
        Self {
            source,
            resolver,
            licenses,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Builds the full tree below the given root summaries.
    ///
    /// Never fails: everything that goes wrong below a root is recorded
    /// in the returned [`BuildReport`] against the node it concerns.
    pub async fn build(&self, roots: Vec<ComponentSummary>) -> (Vec<ComponentNode>, BuildReport) {
        let mut report = BuildReport::new();
        let mut nodes = Vec::with_capacity(roots.len());
        let mut ancestors: Vec<(Uuid, Uuid)> = Vec::new();

        for root in roots {
            nodes.push(self.build_node(root, &mut ancestors, &mut report).await);
        }

        (nodes, report)
    }

    fn build_node<'b>(
        &'b self,
        summary: ComponentSummary,
        ancestors: &'b mut Vec<(Uuid, Uuid)>,
        report: &'b mut BuildReport,
    ) -> BoxFuture<'b, ComponentNode> {
        Box::pin(async move {
            let coordinate = self.resolve_coordinate(&summary, report);
            let license = summary
                .declared_license
                .as_ref()
                .map(|description| self.licenses.build(description))
                .unwrap_or(LicenseExpression::None);

            let mut node = ComponentNode {
                component_id: summary.component_id,
                version_id: summary.version_id,
                name: summary.name,
                version: summary.version,
                coordinate,
                license,
                detected_license: None,
                license_confirmed: false,
                license_contested: false,
                source_location: summary.source_location,
                usages: summary.usages,
                hierarchical_id: summary.hierarchical_id,
                is_subproject: summary.component_type == SUBPROJECT_TYPE,
                children: Vec::new(),
            };

            // A zero link id means the service has no children endpoint
            // for this node.
            if node.hierarchical_id == 0 {
                return node;
            }

            let children = match self
                .source
                .fetch_children(node.component_id, node.version_id, node.hierarchical_id)
                .await
            {
                Ok(children) => children,
                Err(err) => {
                    report.record(BomCondition::SubtreeUnavailable {
                        component: node.label(),
                        details: err.to_string(),
                    });
                    return node;
                }
            };

            if children.len() >= self.page_limit {
                report.record(BomCondition::PartialTree {
                    component: node.label(),
                    fetched: children.len(),
                });
            }

            ancestors.push(node.identity());
            for child in children {
                if ancestors.contains(&child.identity()) {
                    report.record(BomCondition::CycleDetected {
                        parent: node.label(),
                        child: child.label(),
                    });
                    continue;
                }
                node.children
                    .push(self.build_node(child, ancestors, report).await);
            }
            ancestors.pop();

            node
        })
    }

    /// Derives the coordinate from the first origin, or falls back to a
    /// generic coordinate built from the plain name and version.
    fn resolve_coordinate(
        &self,
        summary: &ComponentSummary,
        report: &mut BuildReport,
    ) -> PackageCoordinate {
        match summary.origins.first() {
            Some(origin) => {
                let coordinate = self.resolver.resolve(origin);
                if coordinate.name().is_empty() || coordinate.version().is_empty() {
                    report.record(BomCondition::CoordinateAmbiguity {
                        component: summary.label(),
                        origin: origin.raw_identifier.clone(),
                    });
                }
                coordinate
            }
            None => PackageCoordinate::new("generic", "", &summary.name, &summary.version),
        }
    }
}
