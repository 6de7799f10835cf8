//! Engine result types
//!
//! Shapes returned by the rule engine operations. The wire form lives in
//! [`crate::output`]; these carry the raw payload bytes instead of base64.

/// Result of a legality check
#[derive(Debug, Clone)]
pub struct LegalityAnalysis {
    /// Whether the entity is consistent with what the rules could produce
    pub legal: bool,
    /// One line per violation found; empty when legal
    pub report: Vec<String>,
}

impl LegalityAnalysis {
    /// Build an analysis from collected violation lines.
    #[must_use]
    pub fn from_report(report: Vec<String>) -> Self {
        Self {
            legal: report.is_empty(),
            report,
        }
    }
}

/// Result of an auto-legalization attempt
#[derive(Debug, Clone)]
pub struct LegalizeOutcome {
    /// Whether the returned entity is legal for the target
    pub legal: bool,
    /// Whether the attempt produced a usable entity
    pub success: bool,
    /// Whether a legalization pass actually ran (false when the input was
    /// already legal)
    pub ran: bool,
    /// Violation/progress lines accumulated along the way
    pub report: Vec<String>,
    /// Serialized result entity, when one was produced
    pub pokemon: Option<Vec<u8>>,
}
