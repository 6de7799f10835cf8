//! gpss-console - legality checking and auto-legalization console for Local GPSS
//!
//! This library provides the argument contract, the token mapping tables, and
//! the rule engine boundary behind the `gpss-console` binary. Legality
//! evaluation is reached through the [`core::ports::LegalityEngine`] seam;
//! the bundled engine performs structural validation only.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod output;
#[cfg(feature = "server")]
pub mod server;
