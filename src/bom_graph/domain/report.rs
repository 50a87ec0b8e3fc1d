use serde::Serialize;
use std::fmt;

/// A non-fatal condition observed while building or enriching the BOM graph.
///
/// Conditions are values, not errors: they are attached to the node or edge
/// they concern and aggregated into the [`BuildReport`] so that nothing
/// observed during the build silently disappears.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BomCondition {
    /// An origin identifier had fewer positional fields than expected;
    /// the missing ones defaulted to empty strings.
    CoordinateAmbiguity { component: String, origin: String },
    /// A child edge pointed back into its own ancestor chain;
    /// descent stopped there.
    CycleDetected { parent: String, child: String },
    /// A child listing filled the page bound, so the upstream service
    /// may have truncated it.
    PartialTree { component: String, fetched: usize },
    /// Fetching one subtree failed; its siblings were unaffected.
    SubtreeUnavailable { component: String, details: String },
    /// The license scanner could not be reached for this coordinate.
    ScanUnavailable { coordinate: String, details: String },
    /// The license scanner answered with a non-success status;
    /// the license stays unresolved.
    UnexpectedScanResponse { coordinate: String, status: u16 },
    /// Declared and scanned licenses disagree; both are preserved.
    ContestedLicense {
        coordinate: String,
        declared: String,
        detected: String,
    },
}

impl fmt::Display for BomCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BomCondition::CoordinateAmbiguity { component, origin } => write!(
                f,
                "Ambiguous origin identifier '{}' for {}; missing fields left empty",
                origin, component
            ),
            BomCondition::CycleDetected { parent, child } => {
                write!(f, "Dependency cycle from {} back to {}", parent, child)
            }
            BomCondition::PartialTree { component, fetched } => write!(
                f,
                "Child list of {} may be truncated ({} entries returned)",
                component, fetched
            ),
            BomCondition::SubtreeUnavailable { component, details } => {
                write!(f, "Could not fetch children of {}: {}", component, details)
            }
            BomCondition::ScanUnavailable {
                coordinate,
                details,
            } => write!(f, "License scan unavailable for {}: {}", coordinate, details),
            BomCondition::UnexpectedScanResponse { coordinate, status } => write!(
                f,
                "License scanner returned status {} for {}",
                status, coordinate
            ),
            BomCondition::ContestedLicense {
                coordinate,
                declared,
                detected,
            } => write!(
                f,
                "Contested license for {}: declared '{}', detected '{}'",
                coordinate, declared, detected
            ),
        }
    }
}

/// Aggregated build report: every non-fatal condition from one BOM build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    conditions: Vec<BomCondition>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, condition: BomCondition) {
        self.conditions.push(condition);
    }

    pub fn conditions(&self) -> &[BomCondition] {
        &self.conditions
    }

    pub fn is_clean(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
