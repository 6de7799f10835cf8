//! Structural legality checks
//!
//! Validates what can be checked without interpreting the entity's fields:
//! the payload must carry data, and the entity's origin format must be
//! reachable in the requested context (transfers only move forward).

use crate::core::models::{Entity, EntityContext, LegalityAnalysis};

pub(crate) fn analyze(entity: &Entity, context: EntityContext) -> LegalityAnalysis {
    let mut report = Vec::new();

    if entity.data.iter().all(|&byte| byte == 0) {
        report.push("Entity data is empty.".to_string());
    }

    if let Some(requested) = context.generation() {
        let origin = entity.format.generation();
        if origin > requested {
            report.push(format!(
                "{} data cannot exist in a generation {requested} context.",
                entity.format
            ));
        }
    }

    LegalityAnalysis::from_report(report)
}
