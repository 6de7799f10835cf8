//! Decoded creature entities
//!
//! An [`Entity`] is the in-memory form of a single creature's game-data
//! record. The byte payload stays opaque here; only the serialized format
//! and the context it was decoded under are tracked.

use thiserror::Error;

use super::EntityContext;

/// Serialized entity formats, one per data layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityFormat {
    /// Generation 1 layout
    Pk1,
    /// Generation 2 layout
    Pk2,
    /// Generation 3 layout
    Pk3,
    /// Generation 4 layout
    Pk4,
    /// Generation 5 layout
    Pk5,
    /// Generation 6 layout
    Pk6,
    /// Generation 7 layout
    Pk7,
    /// Sword/Shield layout
    Pk8,
    /// Legends: Arceus layout
    Pa8,
    /// Brilliant Diamond/Shining Pearl layout
    Pb8,
    /// Generation 9 layout
    Pk9,
}

impl EntityFormat {
    /// Numeric generation this format originates from.
    #[must_use]
    pub const fn generation(self) -> u8 {
        match self {
            Self::Pk1 => 1,
            Self::Pk2 => 2,
            Self::Pk3 => 3,
            Self::Pk4 => 4,
            Self::Pk5 => 5,
            Self::Pk6 => 6,
            Self::Pk7 => 7,
            Self::Pk8 | Self::Pa8 | Self::Pb8 => 8,
            Self::Pk9 => 9,
        }
    }

    /// The context this format natively belongs to.
    #[must_use]
    pub const fn native_context(self) -> EntityContext {
        match self {
            Self::Pk1 => EntityContext::Gen1,
            Self::Pk2 => EntityContext::Gen2,
            Self::Pk3 => EntityContext::Gen3,
            Self::Pk4 => EntityContext::Gen4,
            Self::Pk5 => EntityContext::Gen5,
            Self::Pk6 => EntityContext::Gen6,
            Self::Pk7 => EntityContext::Gen7,
            Self::Pk8 => EntityContext::Gen8,
            Self::Pa8 => EntityContext::Gen8a,
            Self::Pb8 => EntityContext::Gen8b,
            Self::Pk9 => EntityContext::Gen9,
        }
    }
}

impl std::fmt::Display for EntityFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pk1 => "PK1",
            Self::Pk2 => "PK2",
            Self::Pk3 => "PK3",
            Self::Pk4 => "PK4",
            Self::Pk5 => "PK5",
            Self::Pk6 => "PK6",
            Self::Pk7 => "PK7",
            Self::Pk8 => "PK8",
            Self::Pa8 => "PA8",
            Self::Pb8 => "PB8",
            Self::Pk9 => "PK9",
        };
        write!(f, "{name}")
    }
}

/// A decoded creature record
#[derive(Debug, Clone)]
pub struct Entity {
    /// Raw serialized bytes, as decoded from the base64 payload
    pub data: Vec<u8>,
    /// Detected serialized format
    pub format: EntityFormat,
    /// Context the entity was decoded under
    pub context: EntityContext,
}

/// Why a payload could not be decoded into an entity
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded blob is empty
    #[error("entity payload is empty")]
    Empty,

    /// The decoded blob does not match any known entity size
    #[error("unrecognized entity size: {size} bytes")]
    UnknownSize {
        /// Length of the decoded blob
        size: usize,
    },
}
