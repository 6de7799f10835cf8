//! Core domain layer
//!
//! - [`models`] - entity contexts, game versions, decoded entities, results
//! - [`ports`] - the rule engine seam

pub mod models;
pub mod ports;
