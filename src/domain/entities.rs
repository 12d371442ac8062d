//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/wire types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// Destination sentinel passed to the translator when the prompt named no
/// destination. Selects the English default downstream.
pub const UNKNOWN_DESTINATION: &str = "unknown";

/// Structured result of parsing one natural-language prompt.
///
/// All fields are optional. A non-empty prompt always yields at least
/// `general_query`: parser strategies that cannot extract anything return
/// [`ParsedIntent::fallback`] instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntent {
    /// Free-text place name (e.g. "Barcelona, Spain").
    pub destination: Option<String>,
    /// Category of thing sought (e.g. "quick meals").
    pub need: Option<String>,
    /// String to translate.
    pub phrase: Option<String>,
    /// The prompt itself, used as a general question when no structured task
    /// applies.
    pub general_query: Option<String>,
}

impl ParsedIntent {
    /// Degraded intent: the raw prompt as a general question, nothing else.
    pub fn fallback(prompt: &str) -> Self {
        Self {
            general_query: Some(prompt.to_string()),
            ..Self::default()
        }
    }

    /// Place-lookup sub-task. Requires BOTH destination and need, non-empty
    /// after trim; either alone selects nothing.
    pub fn spot_task(&self) -> Option<(&str, &str)> {
        match (self.destination.as_deref(), self.need.as_deref()) {
            (Some(destination), Some(need))
                if !destination.trim().is_empty() && !need.trim().is_empty() =>
            {
                Some((destination, need))
            }
            _ => None,
        }
    }

    /// Translation sub-task.
    pub fn phrase_task(&self) -> Option<&str> {
        self.phrase.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// General-question fallback carrier.
    pub fn general_task(&self) -> Option<&str> {
        self.general_query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

/// One block of router output. Degraded results carry a user-facing apology
/// sentence instead of an error; raw failure detail stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    pub text: String,
    pub degraded: bool,
}

impl TaskResult {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            degraded: false,
        }
    }

    pub fn degraded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            degraded: true,
        }
    }
}

/// Ordered task results for one request. Request-scoped; nothing survives
/// past the response.
#[derive(Debug, Clone, Default)]
pub struct ResponseBundle {
    results: Vec<TaskResult>,
}

impl ResponseBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: TaskResult) {
        self.results.push(result);
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[TaskResult] {
        &self.results
    }

    /// Join all blocks with a blank line, in dispatch order.
    pub fn into_output(self) -> String {
        self.results
            .into_iter()
            .map(|r| r.text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// One place hit from the geocoding API. Coordinates stay as the strings the
/// API returns; nothing downstream does arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// Target language resolved from a traveler's destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    /// ISO 639-1 code (e.g. "es").
    pub code: &'static str,
    /// Human-readable name used in user-facing output (e.g. "spanish").
    pub name: &'static str,
}
