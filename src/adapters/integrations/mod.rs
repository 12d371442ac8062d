//! Third-party API adapters. Nominatim geocoding and LibreTranslate-style
//! machine translation.

pub mod libretranslate;
pub mod nominatim;

pub use libretranslate::LibreTranslateAdapter;
pub use nominatim::NominatimAdapter;
