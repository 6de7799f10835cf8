//! Entity format detection
//!
//! Formats are recognized by serialized size. Several generations share a
//! size, so the requested context breaks ties; with no context the newest
//! matching layout wins.

use crate::core::models::{DecodeError, EntityContext, EntityFormat};

/// All formats, oldest to newest. Tie-breaking relies on this order.
const FORMATS: [EntityFormat; 11] = [
    EntityFormat::Pk1,
    EntityFormat::Pk2,
    EntityFormat::Pk3,
    EntityFormat::Pk4,
    EntityFormat::Pk5,
    EntityFormat::Pk6,
    EntityFormat::Pk7,
    EntityFormat::Pk8,
    EntityFormat::Pa8,
    EntityFormat::Pb8,
    EntityFormat::Pk9,
];

/// Known serialized sizes for a format (stored, party, and list variants).
const fn sizes(format: EntityFormat) -> &'static [usize] {
    match format {
        EntityFormat::Pk1 => &[33, 44, 69],
        EntityFormat::Pk2 => &[32, 48, 73],
        EntityFormat::Pk3 => &[80, 100],
        EntityFormat::Pk4 => &[136, 236],
        EntityFormat::Pk5 => &[136, 220],
        EntityFormat::Pk6 | EntityFormat::Pk7 => &[232, 260],
        EntityFormat::Pk8 | EntityFormat::Pb8 | EntityFormat::Pk9 => &[328, 344],
        EntityFormat::Pa8 => &[360, 376],
    }
}

/// Detect the serialized format of a blob.
///
/// The context is a hint: when several formats share the blob's size, a
/// format native to the requested context is preferred, and the newest
/// candidate wins otherwise.
pub(crate) fn detect(
    data: &[u8],
    context: EntityContext,
) -> Result<EntityFormat, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::Empty);
    }

    let candidates: Vec<EntityFormat> = FORMATS
        .into_iter()
        .filter(|format| sizes(*format).contains(&data.len()))
        .collect();

    match candidates.last() {
        None => Err(DecodeError::UnknownSize { size: data.len() }),
        Some(newest) => Ok(candidates
            .iter()
            .copied()
            .find(|format| format.native_context() == context)
            .unwrap_or(*newest)),
    }
}
