//! Ports
//!
//! Interfaces the dispatcher depends on. The only port today is the rule
//! engine seam.

mod engine;

pub use engine::LegalityEngine;
