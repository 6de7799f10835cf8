//! HTTP server adapters
//!
//! Translates between HTTP frameworks and the HTTP-agnostic API layer.
//! Only `tiny_http` is supported today.

pub mod tiny_http;
