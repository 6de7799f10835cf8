//! Tests for the version token mapping

use gpss_console::core::models::{EntityContext, GameVersion};

#[test]
fn known_names_map_to_their_version() {
    assert_eq!(GameVersion::from_token("RD"), GameVersion::RD);
    assert_eq!(GameVersion::from_token("Pt"), GameVersion::Pt);
    assert_eq!(GameVersion::from_token("CXD"), GameVersion::CXD);
    assert_eq!(GameVersion::from_token("SW"), GameVersion::SW);
    assert_eq!(GameVersion::from_token("PLA"), GameVersion::PLA);
    assert_eq!(GameVersion::from_token("SL"), GameVersion::SL);
    assert_eq!(GameVersion::from_token("VL"), GameVersion::VL);
    assert_eq!(GameVersion::from_token("Any"), GameVersion::Any);
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!(GameVersion::from_token("sl"), GameVersion::Any);
    assert_eq!(GameVersion::from_token("PT"), GameVersion::Any);
    assert_eq!(GameVersion::from_token("pla"), GameVersion::Any);
}

#[test]
fn unknown_names_fall_back_to_any() {
    for token in ["", "Sword", "Scarlet", "42", "SL "] {
        assert_eq!(GameVersion::from_token(token), GameVersion::Any);
        assert!(GameVersion::from_token(token).is_any());
    }
}

#[test]
fn versions_map_to_their_context() {
    assert_eq!(GameVersion::YW.context(), EntityContext::Gen1);
    assert_eq!(GameVersion::C.context(), EntityContext::Gen2);
    assert_eq!(GameVersion::E.context(), EntityContext::Gen3);
    assert_eq!(GameVersion::SS.context(), EntityContext::Gen4);
    assert_eq!(GameVersion::B2.context(), EntityContext::Gen5);
    assert_eq!(GameVersion::OR.context(), EntityContext::Gen6);
    assert_eq!(GameVersion::UM.context(), EntityContext::Gen7);
    assert_eq!(GameVersion::SH.context(), EntityContext::Gen8);
    assert_eq!(GameVersion::BD.context(), EntityContext::Gen8b);
    assert_eq!(GameVersion::PLA.context(), EntityContext::Gen8a);
    assert_eq!(GameVersion::VL.context(), EntityContext::Gen9);
    assert_eq!(GameVersion::Any.context(), EntityContext::None);
}
