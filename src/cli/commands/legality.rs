//! Legality check command

use crate::core::models::EntityContext;
use crate::core::ports::LegalityEngine;
use crate::output::{self, ErrorReply, LegalityReply};

/// Decode the payload and print the legality check result.
///
/// A payload that cannot be decoded still produces a single JSON line on
/// stdout, carrying an `error` field instead of a result.
pub fn legality(engine: &dyn LegalityEngine, pokemon: &str, context: EntityContext) {
    match engine.decode(pokemon, context) {
        Ok(entity) => {
            let reply = LegalityReply::from(engine.check_legality(&entity, context));
            output::emit(&reply);
        },
        Err(err) => {
            log::debug!("decode failed: {err}");
            output::emit(&ErrorReply {
                error: err.to_string(),
            });
        },
    }
}
