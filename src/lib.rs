//! pocket-pal: multi-service travel assistant demo with Hexagonal Architecture.
//!
//! Three services over one library: a prompt-routing orchestrator, a
//! Nominatim-backed spot finder, and a phrase translator.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
