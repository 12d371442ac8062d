//! Application use cases. Orchestrate domain logic via ports.

pub mod router_service;
pub mod spot_service;
pub mod translation_service;

pub use router_service::RouterService;
pub use spot_service::SpotService;
pub use translation_service::TranslationService;
