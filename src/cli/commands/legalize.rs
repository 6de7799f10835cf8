//! Auto-legalization command

use crate::core::models::{EntityContext, GameVersion};
use crate::core::ports::LegalityEngine;
use crate::output::{self, ErrorReply, LegalizeReply};

/// Decode the payload and print the auto-legalization result.
pub fn legalize(
    engine: &dyn LegalityEngine,
    pokemon: &str,
    context: EntityContext,
    version: GameVersion,
) {
    match engine.decode(pokemon, context) {
        Ok(entity) => {
            let reply = LegalizeReply::from(engine.legalize(&entity, context, version));
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
