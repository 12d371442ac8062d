//! Application configuration. API credentials, endpoints, bind addresses.

use serde::Deserialize;
use std::time::Duration;

/// Default request timeout for collaborator and third-party API calls.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Gemini API key. Read from POCKET_PAL_GEMINI_API_KEY (or plain
    /// GEMINI_API_KEY). Absence selects the heuristic parser.
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL. Read from POCKET_PAL_GEMINI_API_URL.
    #[serde(default)]
    pub gemini_api_url: Option<String>,

    /// Gemini model name. Defaults to "gemini-1.5-flash". Read from POCKET_PAL_GEMINI_MODEL.
    #[serde(default)]
    pub gemini_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Downstream agent endpoints
    // ─────────────────────────────────────────────────────────────────────────
    /// Spot finder endpoint. Read from POCKET_PAL_SPOT_FINDER_URL.
    #[serde(default)]
    pub spot_finder_url: Option<String>,

    /// Phrase translator endpoint. Read from POCKET_PAL_PHRASE_TRANSLATOR_URL.
    #[serde(default)]
    pub phrase_translator_url: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Third-party APIs
    // ─────────────────────────────────────────────────────────────────────────
    /// Nominatim search endpoint. Read from POCKET_PAL_NOMINATIM_URL.
    #[serde(default)]
    pub nominatim_url: Option<String>,

    /// Identifying User-Agent required by Nominatim. Read from POCKET_PAL_NOMINATIM_USER_AGENT.
    #[serde(default)]
    pub nominatim_user_agent: Option<String>,

    /// LibreTranslate-compatible endpoint. Read from POCKET_PAL_TRANSLATE_API_URL.
    #[serde(default)]
    pub translate_api_url: Option<String>,

    /// Optional translation API key. Read from POCKET_PAL_TRANSLATE_API_KEY.
    #[serde(default)]
    pub translate_api_key: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Bind addresses
    // ─────────────────────────────────────────────────────────────────────────
    /// Bind host for all services (default 0.0.0.0). Read from POCKET_PAL_HOST.
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub orchestrator_port: Option<u16>,

    #[serde(default)]
    pub spot_finder_port: Option<u16>,

    #[serde(default)]
    pub phrase_translator_port: Option<u16>,

    /// Outbound HTTP timeout in seconds (default 5). Read from POCKET_PAL_HTTP_TIMEOUT_SECS.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("POCKET_PAL"));
        if let Ok(path) = std::env::var("POCKET_PAL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // LLM helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the Gemini API key if configured. Falls back to the unprefixed
    /// GEMINI_API_KEY env var so a stock Google AI Studio setup works as-is.
    pub fn gemini_api_key(&self) -> Option<String> {
        self.gemini_api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }

    pub fn gemini_api_url_or_default(&self) -> String {
        self.gemini_api_url
            .clone()
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
    }

    pub fn gemini_model_or_default(&self) -> String {
        self.gemini_model
            .clone()
            .unwrap_or_else(|| "gemini-1.5-flash".to_string())
    }

    /// Returns true if the LLM strategy is available (API key present).
    pub fn is_llm_configured(&self) -> bool {
        self.gemini_api_key().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Endpoint helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn spot_finder_url_or_default(&self) -> String {
        self.spot_finder_url
            .clone()
            .unwrap_or_else(|| "http://localhost:5002/spot_finder".to_string())
    }

    pub fn phrase_translator_url_or_default(&self) -> String {
        self.phrase_translator_url
            .clone()
            .unwrap_or_else(|| "http://localhost:5003/phrase_translator".to_string())
    }

    pub fn nominatim_url_or_default(&self) -> String {
        self.nominatim_url
            .clone()
            .unwrap_or_else(|| "https://nominatim.openstreetmap.org/search".to_string())
    }

    pub fn nominatim_user_agent_or_default(&self) -> String {
        self.nominatim_user_agent
            .clone()
            .unwrap_or_else(|| "TravelersPocketPal/1.0".to_string())
    }

    pub fn translate_api_url_or_default(&self) -> String {
        self.translate_api_url
            .clone()
            .unwrap_or_else(|| "https://libretranslate.de/translate".to_string())
    }

    pub fn translate_api_key(&self) -> Option<String> {
        self.translate_api_key.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bind helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn host_or_default(&self) -> String {
        self.host.clone().unwrap_or_else(|| "0.0.0.0".to_string())
    }

    pub fn orchestrator_port_or_default(&self) -> u16 {
        self.orchestrator_port.unwrap_or(5001)
    }

    pub fn spot_finder_port_or_default(&self) -> u16 {
        self.spot_finder_port.unwrap_or(5002)
    }

    pub fn phrase_translator_port_or_default(&self) -> u16 {
        self.phrase_translator_port.unwrap_or(5003)
    }

    /// Outbound HTTP timeout. Defaults to DEFAULT_HTTP_TIMEOUT_SECS if unset.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
    }
}
