use crate::config::AppConfig;
use crate::domain::{RoastType, Stack};
use crate::infrastructure::gemini::{build_roast_prompt, GeminiClient};
use stack_roast_errors::AppError;

pub const AI_AUTHOR_NAME: &str = "AI Roaster";

pub enum LlmBackend {
    Gemini(GeminiClient),
    /// No API key configured; every call fails with a configuration error.
    Unconfigured,
}

pub struct GenerateRoast {
    backend: LlmBackend,
}

impl GenerateRoast {
    pub fn new_gemini(client: GeminiClient) -> Self {
        Self {
            backend: LlmBackend::Gemini(client),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            backend: LlmBackend::Unconfigured,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match &config.google_api_key {
            Some(key) => {
                tracing::info!("Using Gemini backend ({})", config.gemini_model);
                Self::new_gemini(GeminiClient::new(
                    key.clone(),
                    &config.gemini_api_base,
                    &config.gemini_model,
                ))
            }
            None => Self::unconfigured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.backend, LlmBackend::Gemini(_))
    }

    pub fn ensure_configured(&self) -> Result<(), AppError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(AppError::Configuration("API key not configured".to_string()))
        }
    }

    /// Sends a free-form prompt and returns the generated text.
    pub async fn execute(&self, prompt: String) -> Result<String, AppError> {
        match &self.backend {
            LlmBackend::Gemini(client) => client.generate(prompt).await,
            LlmBackend::Unconfigured => {
                Err(AppError::Configuration("API key not configured".to_string()))
            }
        }
    }

    pub async fn roast_stack(&self, stack: &Stack, roast_type: RoastType) -> Result<String, AppError> {
        self.ensure_configured()?;
        let text = self.execute(build_roast_prompt(stack, roast_type)).await?;
        if text.trim().is_empty() {
            return Err(AppError::AiProvider {
                status: None,
                message: "No response from AI".to_string(),
            });
        }
        Ok(text)
    }
}
