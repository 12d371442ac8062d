//! AI adapter module. Prompt-parsing strategies and text generation.
//!
//! Provides the Gemini adapter (LLM strategy) and the keyword heuristic
//! parser used when no credential is configured.

pub mod gemini_adapter;
pub mod heuristic_parser;

pub use gemini_adapter::GeminiAdapter;
pub use heuristic_parser::HeuristicParser;
