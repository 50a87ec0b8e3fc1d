use serde::Serialize;
use std::fmt;

/// Canonical package coordinate: the purl-style 4-tuple identifying a package.
///
/// Coordinates are immutable once constructed and are used as map keys
/// throughout the build (equality over all four fields). The `ptype` field is
/// never empty; construction substitutes `"generic"` when no mapping exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageCoordinate {
    #[serde(rename = "type")]
    ptype: String,
    namespace: String,
    name: String,
    version: String,
}

impl PackageCoordinate {
    pub fn new(
        ptype: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let ptype = ptype.into();
        Self {
            ptype: if ptype.is_empty() {
                "generic".to_string()
            } else {
                ptype
            },
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn ptype(&self) -> &str {
        &self.ptype
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PackageCoordinate {
    /// Renders a purl-style string, omitting the empty namespace and version.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg:{}/", self.ptype)?;
        if !self.namespace.is_empty() {
            write!(f, "{}/", self.namespace)?;
        }
        write!(f, "{}", self.name)?;
        if !self.version.is_empty() {
            write!(f, "@{}", self.version)?;
        }
        Ok(())
    }
}

/// Raw upstream package identifier encoding, as reported by the
/// product-tracking service. Input to coordinate resolution only;
/// not retained once a coordinate has been derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginDescriptor {
    pub ecosystem_namespace: String,
    pub raw_identifier: String,
}

impl OriginDescriptor {
    pub fn new(ecosystem_namespace: impl Into<String>, raw_identifier: impl Into<String>) -> Self {
        Self {
            ecosystem_namespace: ecosystem_namespace.into(),
            raw_identifier: raw_identifier.into(),
        }
    }
}
