//! Spot finder use case. Maps a traveler's need to a place type and formats
//! geocoding hits into one recommendation text.

use crate::domain::DomainError;
use crate::ports::GeocodePort;
use std::sync::Arc;
use tracing::info;

/// Max hits requested from the geocoder per recommendation.
const RESULT_LIMIT: u8 = 3;

pub struct SpotService {
    geocoder: Arc<dyn GeocodePort>,
}

impl SpotService {
    pub fn new(geocoder: Arc<dyn GeocodePort>) -> Self {
        Self { geocoder }
    }

    /// Look up places matching `need` in `destination`.
    ///
    /// Zero hits is a normal answer, not an error; only a failing geocoder
    /// call propagates.
    pub async fn recommend(&self, destination: &str, need: &str) -> Result<String, DomainError> {
        if destination.trim().is_empty() || need.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "Destination and need are required".to_string(),
            ));
        }

        let place_type = place_type_for(need);
        let query = format!("{place_type} {destination}");
        info!(destination, need, place_type, "looking up places");

        let places = self.geocoder.search(&query, RESULT_LIMIT).await?;
        if places.is_empty() {
            return Ok(format!("No {place_type}s found in {destination}."));
        }

        Ok(places
            .iter()
            .map(|p| format!("{} (Lat: {}, Lon: {})", p.display_name, p.lat, p.lon))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Map common traveler needs to geocoder place types. Unmapped needs search
/// the generic "amenity" category.
fn place_type_for(need: &str) -> &'static str {
    match need.to_lowercase().as_str() {
        "quick meals" | "restaurants" => "restaurant",
        "cafes" => "cafe",
        "hotels" => "hotel",
        "attractions" => "tourism",
        _ => "amenity",
    }
}
