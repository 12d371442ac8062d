//! Downstream agent clients. The orchestrator's outbound HTTP adapters for
//! the spot-finder and phrase-translator collaborator services.

pub mod spot_finder_client;
pub mod translator_client;

pub use spot_finder_client::SpotFinderClient;
pub use translator_client::TranslatorClient;
