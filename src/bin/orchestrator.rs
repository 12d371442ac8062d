//! Orchestrator entry point. Wiring & DI: bootstrap adapters, inject into the
//! router service, serve HTTP. No business logic here.

use dotenv::dotenv;
use pocket_pal::adapters::ai::{GeminiAdapter, HeuristicParser};
use pocket_pal::adapters::downstream::{SpotFinderClient, TranslatorClient};
use pocket_pal::adapters::http::orchestrator;
use pocket_pal::ports::{IntentParser, LlmPort, SpotFinderPort, TranslatorPort};
use pocket_pal::shared::config::AppConfig;
use pocket_pal::usecases::RouterService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::load().unwrap_or_default();
    let timeout = cfg.http_timeout();

    // Capability switch: LLM strategy when a credential is configured,
    // keyword heuristic otherwise. Resolved once, injected into the router.
    let gemini = cfg.is_llm_configured().then(|| {
        Arc::new(GeminiAdapter::new(
            cfg.gemini_api_url_or_default(),
            cfg.gemini_api_key().unwrap_or_default(),
            cfg.gemini_model_or_default(),
            timeout,
        ))
    });

    let parser: Arc<dyn IntentParser> = match &gemini {
        Some(adapter) => {
            info!(model = %cfg.gemini_model_or_default(), "prompt parsing via Gemini");
            Arc::clone(adapter) as Arc<dyn IntentParser>
        }
        None => {
            warn!("GEMINI_API_KEY not set, using heuristic parser and canned answers");
            Arc::new(HeuristicParser::new())
        }
    };
    let llm: Option<Arc<dyn LlmPort>> = gemini.map(|adapter| adapter as Arc<dyn LlmPort>);

    let spot_finder: Arc<dyn SpotFinderPort> = Arc::new(SpotFinderClient::new(
        cfg.spot_finder_url_or_default(),
        timeout,
    ));
    let translator: Arc<dyn TranslatorPort> = Arc::new(TranslatorClient::new(
        cfg.phrase_translator_url_or_default(),
        timeout,
    ));

    let service = Arc::new(RouterService::new(parser, spot_finder, translator, llm));

    let addr = format!(
        "{}:{}",
        cfg.host_or_default(),
        cfg.orchestrator_port_or_default()
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "orchestrator listening");
    axum::serve(listener, orchestrator::routes(service)).await?;

    Ok(())
}
