//! Hosted generative AI adapters.

mod dto;
mod gemini_client;

pub use gemini_client::{GeminiClient, build_prompt, parse_insights};
