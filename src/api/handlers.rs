//! Pure API handlers
//!
//! HTTP-agnostic counterparts of the CLI operations. Unlike the CLI, a
//! malformed payload is a client error here and surfaces as a 400.

use super::error::ApiError;
use super::types::{LegalityRequest, LegalizeRequest};
use crate::core::models::{EntityContext, GameVersion};
use crate::core::ports::LegalityEngine as _;
use crate::engine;
use crate::output::{LegalityReply, LegalizeReply};

/// Check legality of the submitted entity.
pub fn check_legality(request: &LegalityRequest) -> Result<LegalityReply, ApiError> {
    let context = EntityContext::from_token(&request.generation);
    let entity = engine::shared()
        .decode(&request.pokemon, context)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    Ok(engine::shared().check_legality(&entity, context).into())
}

/// Attempt to legalize the submitted entity for a target version.
pub fn legalize(request: &LegalizeRequest) -> Result<LegalizeReply, ApiError> {
    let Some(version_token) = request.version.as_deref() else {
        return Err(ApiError::bad_request(
            "version is required for auto legalization",
        ));
    };

    let context = EntityContext::from_token(&request.generation);
    let version = GameVersion::from_token(version_token);
    let entity = engine::shared()
        .decode(&request.pokemon, context)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    Ok(engine::shared().legalize(&entity, context, version).into())
}
