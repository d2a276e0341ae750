//! AI adapter module. Implements GeneratorPort for LLM integration.
//!
//! Provides OpenAI-compatible adapter and mock adapter for offline runs.

pub mod mock_adapter;
pub mod openai_adapter;

pub use mock_adapter::MockGeneratorAdapter;
pub use openai_adapter::OpenAiAdapter;
