//! gpss-console binary entry point

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::module_name_repetitions, clippy::cargo_common_metadata)]

use std::process::ExitCode;

/// Main entry point for the gpss-console CLI
fn main() -> ExitCode {
    gpss_console::cli::run()
}
