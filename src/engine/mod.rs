//! Bundled rule engine
//!
//! Structural implementation of the [`LegalityEngine`] port. It decodes
//! payloads by size, validates what can be validated without interpreting
//! the entity's fields, and treats transfer direction as the legalization
//! criterion. Move/ability/encounter rule graphs are out of scope.

mod format;
mod legality;
mod legalize;

use std::sync::atomic::{AtomicBool, Ordering};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::models::{
    DecodeError, Entity, EntityContext, GameVersion, LegalityAnalysis, LegalizeOutcome,
};
use crate::core::ports::LegalityEngine;

/// Whether the in-memory event database has been refreshed
static EVENT_DB_READY: AtomicBool = AtomicBool::new(false);

/// Whether failed legalizations may substitute a placeholder entity
static EASTER_EGGS: AtomicBool = AtomicBool::new(true);

/// Enable or disable easter-egg substitution on failed legalizations.
pub fn set_easter_eggs(enabled: bool) {
    EASTER_EGGS.store(enabled, Ordering::Relaxed);
}

/// Whether easter-egg substitution is currently enabled.
#[must_use]
pub fn easter_eggs_enabled() -> bool {
    EASTER_EGGS.load(Ordering::Relaxed)
}

/// Whether [`StructuralEngine::init`] has run in this process.
#[must_use]
pub fn event_db_ready() -> bool {
    EVENT_DB_READY.load(Ordering::Relaxed)
}

/// The bundled structural engine
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralEngine;

/// Shared engine instance.
#[must_use]
pub fn shared() -> &'static StructuralEngine {
    static ENGINE: StructuralEngine = StructuralEngine;
    &ENGINE
}

impl LegalityEngine for StructuralEngine {
    fn init(&self) {
        EVENT_DB_READY.store(true, Ordering::Relaxed);
        set_easter_eggs(false);
        log::debug!("engine initialized: event database refreshed, easter eggs disabled");
    }

    fn decode(&self, pokemon: &str, context: EntityContext) -> Result<Entity, DecodeError> {
        let data = STANDARD.decode(pokemon)?;
        let format = format::detect(&data, context)?;
        log::debug!("decoded {} bytes as {format} under {context}", data.len());
        Ok(Entity {
            data,
            format,
            context,
        })
    }

    fn check_legality(&self, entity: &Entity, context: EntityContext) -> LegalityAnalysis {
        legality::analyze(entity, context)
    }

    fn legalize(
        &self,
        entity: &Entity,
        context: EntityContext,
        version: GameVersion,
    ) -> LegalizeOutcome {
        legalize::run(entity, context, version)
    }
}
