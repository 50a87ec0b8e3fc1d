use serde::Serialize;
use uuid::Uuid;

use super::coordinate::{OriginDescriptor, PackageCoordinate};
use super::license::{LicenseDescription, LicenseExpression};

/// Component type value the product-tracking service uses for subprojects.
pub const SUBPROJECT_TYPE: &str = "SUB_PROJECT";

/// One component version as reported by the product-tracking service,
/// before normalization. Carries the raw origin encodings and the raw
/// nested license description alongside the plain fields.
#[derive(Debug, Clone)]
pub struct ComponentSummary {
    pub component_id: Uuid,
    pub version_id: Uuid,
    pub name: String,
    pub version: String,
    pub component_type: String,
    pub usages: Vec<String>,
    pub origins: Vec<OriginDescriptor>,
    pub declared_license: Option<LicenseDescription>,
    pub source_location: Option<String>,
    /// Opaque link id locating this component's children endpoint;
    /// zero means "no children".
    pub hierarchical_id: i64,
}

impl ComponentSummary {
    pub fn identity(&self) -> (Uuid, Uuid) {
        (self.component_id, self.version_id)
    }

    /// Human-readable label used in report conditions.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// A normalized node in the BOM graph.
///
/// Identity is `(component_id, version_id)`. Each node is owned exclusively
/// by its parent; roots are owned by the builder's caller. A node reachable
/// through several parents is rebuilt per occurrence, since each occurrence
/// may carry distinct usage annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentNode {
    pub component_id: Uuid,
    pub version_id: Uuid,
    pub name: String,
    pub version: String,
    pub coordinate: PackageCoordinate,
    /// Declared license, or the scanned one when nothing was declared.
    pub license: LicenseExpression,
    /// Scanned license, kept separately when it disagrees with the
    /// declared one so downstream reporting sees both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_license: Option<LicenseExpression>,
    pub license_confirmed: bool,
    pub license_contested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
    pub usages: Vec<String>,
    #[serde(skip)]
    pub hierarchical_id: i64,
    pub is_subproject: bool,
    pub children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn identity(&self) -> (Uuid, Uuid) {
        (self.component_id, self.version_id)
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    /// Whether the license knowledge base should still be consulted for
    /// this node: nothing declared, or declared but not yet confirmed.
    pub fn needs_license_knowledge(&self) -> bool {
        !self.license_confirmed && !self.license_contested
    }
}

/// Counts all nodes in a forest, children included.
pub fn node_count(nodes: &[ComponentNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + node_count(&node.children))
        .sum()
}

/// Result of consulting the license-scanning collaborator for one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub license: LicenseExpression,
    pub confirmed: bool,
}

/// The product selected for export on the product-tracking service.
///
/// The upstream API answers with differently shaped payloads for projects
/// and project versions; the tagged variant keeps that distinction
/// explicit in the output document.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProductDescriptor {
    Project {
        id: Uuid,
        name: String,
        description: Option<String>,
    },
    ProjectVersion {
        id: Uuid,
        name: String,
        description: Option<String>,
        declared_license: Option<LicenseDescription>,
    },
}

impl ProductDescriptor {
    pub fn id(&self) -> Uuid {
        match self {
            ProductDescriptor::Project { id, .. } => *id,
            ProductDescriptor::ProjectVersion { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProductDescriptor::Project { name, .. } => name,
            ProductDescriptor::ProjectVersion { name, .. } => name,
        }
    }
}
