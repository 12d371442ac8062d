//! Port traits. API boundaries for the hexagon.
//!
//! Outbound: called by the application into infrastructure. The inbound side
//! is HTTP and lives entirely in the axum adapters.

pub mod outbound;

pub use outbound::{
    GeocodePort, IntentParser, LlmPort, SpotFinderPort, TranslationPort, TranslatorPort,
};
