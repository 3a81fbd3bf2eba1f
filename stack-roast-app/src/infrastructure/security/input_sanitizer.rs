use stack_roast_errors::AppError;

pub const MAX_PROMPT_CHARS: usize = 8000;

pub struct InputSanitizer;

impl InputSanitizer {
    /// Strips control characters (keeping newlines and tabs) and enforces the prompt length cap.
    pub fn validate_prompt(prompt: Option<&str>) -> Result<String, AppError> {
        let cleaned: String = prompt
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            return Err(AppError::validation("Missing prompt"));
        }

        if cleaned.chars().count() > MAX_PROMPT_CHARS {
            tracing::warn!("Rejected AI prompt of {} chars", cleaned.chars().count());
            return Err(AppError::validation(format!(
                "Prompt must be at most {MAX_PROMPT_CHARS} characters"
            )));
        }

        Ok(cleaned.to_string())
    }
}
