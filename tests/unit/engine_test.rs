//! Tests for the bundled structural engine

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use gpss_console::core::models::{DecodeError, EntityContext, EntityFormat, GameVersion};
use gpss_console::core::ports::LegalityEngine as _;
use gpss_console::engine;

#[test]
fn init_refreshes_event_db_and_disables_easter_eggs() {
    engine::shared().init();
    assert!(engine::event_db_ready());
    assert!(!engine::easter_eggs_enabled());
}

#[test]
fn decode_detects_format_from_size_and_context() {
    let pokemon = STANDARD.encode(vec![1u8; 344]);
    let entity = engine::shared()
        .decode(&pokemon, EntityContext::Gen9)
        .unwrap();
    assert_eq!(entity.format, EntityFormat::Pk9);
    assert_eq!(entity.context, EntityContext::Gen9);
    assert_eq!(entity.data.len(), 344);
}

#[test]
fn decode_respects_context_hint_on_shared_sizes() {
    let pokemon = STANDARD.encode(vec![1u8; 328]);
    let entity = engine::shared()
        .decode(&pokemon, EntityContext::Gen8b)
        .unwrap();
    assert_eq!(entity.format, EntityFormat::Pb8);
}

#[test]
fn decode_rejects_invalid_base64() {
    let result = engine::shared().decode("not base64!!!", EntityContext::Gen9);
    assert!(matches!(result, Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_unknown_sizes() {
    let pokemon = STANDARD.encode(vec![1u8; 12]);
    let result = engine::shared().decode(&pokemon, EntityContext::Gen9);
    assert!(matches!(result, Err(DecodeError::UnknownSize { size: 12 })));
}

#[test]
fn legality_check_flags_future_data() {
    let pokemon = STANDARD.encode(vec![1u8; 344]);
    let entity = engine::shared()
        .decode(&pokemon, EntityContext::Gen3)
        .unwrap();
    let analysis = engine::shared().check_legality(&entity, EntityContext::Gen3);
    assert!(!analysis.legal);
    assert!(analysis.report[0].contains("generation 3"));
}

#[test]
fn legalize_keeps_legal_entities_unchanged() {
    engine::shared().init();
    let pokemon = STANDARD.encode(vec![1u8; 100]);
    let entity = engine::shared()
        .decode(&pokemon, EntityContext::Gen3)
        .unwrap();
    let outcome = engine::shared().legalize(&entity, EntityContext::Gen3, GameVersion::VL);
    assert!(outcome.legal);
    assert!(outcome.success);
    assert!(!outcome.ran);
    assert_eq!(outcome.pokemon, Some(vec![1u8; 100]));
}

#[test]
fn legalize_cannot_demote_future_data() {
    engine::shared().init();
    let pokemon = STANDARD.encode(vec![1u8; 344]);
    let entity = engine::shared()
        .decode(&pokemon, EntityContext::Gen9)
        .unwrap();
    let outcome = engine::shared().legalize(&entity, EntityContext::Gen9, GameVersion::GD);
    assert!(!outcome.legal);
    assert!(!outcome.success);
    assert!(outcome.ran);
    assert!(outcome.pokemon.is_none());
}
