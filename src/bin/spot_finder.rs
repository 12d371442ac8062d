//! Spot finder entry point. Wires the Nominatim adapter into the spot
//! service and serves HTTP.

use dotenv::dotenv;
use pocket_pal::adapters::http::spot_finder;
use pocket_pal::adapters::integrations::NominatimAdapter;
use pocket_pal::ports::GeocodePort;
use pocket_pal::shared::config::AppConfig;
use pocket_pal::usecases::SpotService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::load().unwrap_or_default();

    let geocoder: Arc<dyn GeocodePort> = Arc::new(NominatimAdapter::new(
        cfg.nominatim_url_or_default(),
        cfg.nominatim_user_agent_or_default(),
        cfg.http_timeout(),
    ));
    let service = Arc::new(SpotService::new(geocoder));

    let addr = format!(
        "{}:{}",
        cfg.host_or_default(),
        cfg.spot_finder_port_or_default()
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "spot finder listening");
    axum::serve(listener, spot_finder::routes(service)).await?;

    Ok(())
}
