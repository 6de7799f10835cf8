//! Rule engine port
//!
//! The dispatcher performs pass-through calls only; everything behind this
//! trait owns the game-data semantics. Implementations decide what a
//! legality report contains and how far an auto-legalization attempt goes.

use super::super::models::{
    DecodeError, Entity, EntityContext, GameVersion, LegalityAnalysis, LegalizeOutcome,
};

/// The rule engine the console delegates to
pub trait LegalityEngine: Send + Sync {
    /// One-time process-wide setup: refresh the event database and disable
    /// easter-egg substitutions.
    ///
    /// Called once per invocation before any operation; idempotence is the
    /// implementation's responsibility.
    fn init(&self);

    /// Decode a base64 payload into an entity under the given context.
    fn decode(&self, pokemon: &str, context: EntityContext) -> Result<Entity, DecodeError>;

    /// Evaluate whether the entity's stored data is consistent with what
    /// the context's rules could produce.
    fn check_legality(&self, entity: &Entity, context: EntityContext) -> LegalityAnalysis;

    /// Attempt to mutate the entity into a form legal for the target
    /// version.
    fn legalize(
        &self,
        entity: &Entity,
        context: EntityContext,
        version: GameVersion,
    ) -> LegalizeOutcome;
}
