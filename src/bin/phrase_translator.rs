//! Phrase translator entry point. Wires the translation API adapter into the
//! translation service and serves HTTP.

use dotenv::dotenv;
use pocket_pal::adapters::http::phrase_translator;
use pocket_pal::adapters::integrations::LibreTranslateAdapter;
use pocket_pal::ports::TranslationPort;
use pocket_pal::shared::config::AppConfig;
use pocket_pal::usecases::TranslationService;
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

    let translator: Arc<dyn TranslationPort> = Arc::new(LibreTranslateAdapter::new(
        cfg.translate_api_url_or_default(),
        cfg.translate_api_key(),
        cfg.http_timeout(),
    ));
    let service = Arc::new(TranslationService::new(translator));

    let addr = format!(
        "{}:{}",
        cfg.host_or_default(),
        cfg.phrase_translator_port_or_default()
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "phrase translator listening");
    axum::serve(listener, phrase_translator::routes(service)).await?;

    Ok(())
}
