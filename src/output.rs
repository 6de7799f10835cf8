//! Wire output for the console
//!
//! Every successful invocation prints exactly one line of JSON on stdout.
//! These types own the serialized shapes; the engine result types carry raw
//! bytes and are converted here, re-encoding payloads as base64.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::core::models::{LegalityAnalysis, LegalizeOutcome};

/// Reply for a legality check
#[derive(Debug, Serialize)]
pub struct LegalityReply {
    /// Whether the entity passed the check
    pub legal: bool,
    /// One line per violation found
    pub report: Vec<String>,
}

impl From<LegalityAnalysis> for LegalityReply {
    fn from(analysis: LegalityAnalysis) -> Self {
        Self {
            legal: analysis.legal,
            report: analysis.report,
        }
    }
}

/// Reply for an auto-legalization attempt
#[derive(Debug, Serialize)]
pub struct LegalizeReply {
    /// Whether the returned entity is legal for the target
    pub legal: bool,
    /// Whether the attempt produced a usable entity
    pub success: bool,
    /// Whether a legalization pass actually ran
    pub ran: bool,
    /// Violation/progress lines
    pub report: Vec<String>,
    /// Base64 of the result entity, or null when none was produced
    pub pokemon: Option<String>,
}

impl From<LegalizeOutcome> for LegalizeReply {
    fn from(outcome: LegalizeOutcome) -> Self {
        Self {
            legal: outcome.legal,
            success: outcome.success,
            ran: outcome.ran,
            report: outcome.report,
            pokemon: outcome.pokemon.map(|data| STANDARD.encode(data)),
        }
    }
}

/// Reply when the payload could not be decoded
#[derive(Debug, Serialize)]
pub struct ErrorReply {
    /// What went wrong
    pub error: String,
}

/// Print a reply as a single line of JSON on stdout.
pub fn emit<T: Serialize>(reply: &T) {
    println!(
        "{}",
        serde_json::to_string(reply)
            .unwrap_or_else(|_| r#"{"error":"failed to serialize reply"}"#.to_string())
    );
}
