mod client;
mod prompt;
mod types;

pub use client::GeminiClient;
pub use prompt::{build_roast_prompt, sanitize_for_prompt};
pub use types::{GenerateContentRequest, GenerateContentResponse};
