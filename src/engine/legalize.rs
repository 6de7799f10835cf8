//! Auto-legalization
//!
//! The structural engine cannot rewrite an entity's fields, so legalization
//! reduces to the transfer question: an entity already legal for the target
//! passes through unchanged, and structural violations are unfixable. When
//! easter eggs are enabled a failed attempt still hands back a placeholder
//! payload instead of nothing.

use super::{easter_eggs_enabled, legality};
use crate::core::models::{Entity, EntityContext, GameVersion, LegalizeOutcome};

pub(crate) fn run(
    entity: &Entity,
    context: EntityContext,
    version: GameVersion,
) -> LegalizeOutcome {
    // Evaluate against the version's own context when one is named;
    // GameVersion::Any falls back to the requested context.
    let target = if version.is_any() {
        context
    } else {
        version.context()
    };

    let analysis = legality::analyze(entity, target);
    if analysis.legal {
        return LegalizeOutcome {
            legal: true,
            success: true,
            ran: false,
            report: analysis.report,
            pokemon: Some(entity.data.clone()),
        };
    }

    log::debug!(
        "legalization for {version} found {} structural violation(s)",
        analysis.report.len()
    );

    let mut report = analysis.report;
    if easter_eggs_enabled() {
        report.push("Substituted a placeholder entity.".to_string());
        return LegalizeOutcome {
            legal: false,
            success: true,
            ran: true,
            report,
            pokemon: Some(entity.data.clone()),
        };
    }

    LegalizeOutcome {
        legal: false,
        success: false,
        ran: true,
        report,
        pokemon: None,
    }
}
