use crate::bom_graph::domain::LicenseExpression;
use crate::ports::outbound::LicenseIdentifierParser;

/// SpdxIdentifierParser adapter for normalizing license identifiers
///
/// Upstream services report licenses as SPDX identifiers, as long-form
/// display names, or as free text. Known display names map onto their
/// SPDX identifier; anything else is kept verbatim so no information
/// is lost downstream.
pub struct SpdxIdentifierParser;

impl SpdxIdentifierParser {
    pub fn new() -> Self {
        Self
    }

    /// Display names the upstream services are known to use instead of
    /// the SPDX identifier.
    fn normalize(identifier: &str) -> Option<&'static str> {
        match identifier {
            "MIT License" => Some("MIT"),
            "Apache License 2.0" | "Apache License, Version 2.0" => Some("Apache-2.0"),
            "BSD 2-clause \"Simplified\" License" => Some("BSD-2-Clause"),
            "BSD 3-clause \"New\" or \"Revised\" License" => Some("BSD-3-Clause"),
            "GNU General Public License v2.0 only" => Some("GPL-2.0-only"),
            "GNU General Public License v3.0 only" => Some("GPL-3.0-only"),
            "GNU Lesser General Public License v2.1 only" => Some("LGPL-2.1-only"),
            "GNU Lesser General Public License v3.0 only" => Some("LGPL-3.0-only"),
            "ISC License" => Some("ISC"),
            "Mozilla Public License 2.0" => Some("MPL-2.0"),
            "Eclipse Public License 2.0" => Some("EPL-2.0"),
            "The Unlicense" => Some("Unlicense"),
            _ => None,
        }
    }
}

impl Default for SpdxIdentifierParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseIdentifierParser for SpdxIdentifierParser {
    fn parse(&self, identifier: &str) -> LicenseExpression {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return LicenseExpression::None;
        }
        match Self::normalize(trimmed) {
            Some(spdx_id) => LicenseExpression::leaf(spdx_id),
            None => LicenseExpression::leaf(trimmed),
        }
    }
}
