use stack_roast_errors::AppError;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct AiLimits {
    pub requests_per_minute: u32,
    pub requests_per_hour: u32,
    pub daily_requests: u32,
}

impl Default for AiLimits {
    fn default() -> Self {
        Self {
            requests_per_minute: 5,
            requests_per_hour: 20,
            daily_requests: 100,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub ai_limits: AiLimits,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_max_connections", &self.database_max_connections)
            .field("run_migrations", &self.run_migrations)
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "<set>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base", &self.gemini_api_base)
            .field("ai_limits", &self.ai_limits)
            .finish()
    }
}

impl AppConfig {
    /// Settings for a throwaway database with the AI disabled.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_max_connections: 10,
            run_migrations: true,
            google_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            ai_limits: AiLimits::default(),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| AppError::Configuration("DATABASE_URL must be set".to_string()))?;

        let google_api_key = var("GOOGLE_API_KEY");
        if google_api_key.is_none() {
            tracing::warn!("GOOGLE_API_KEY not set, AI roasts are disabled");
        }

        let defaults = AiLimits::default();
        Ok(Self {
            database_url,
            database_max_connections: parse_or(&var, "DATABASE_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_or(&var, "RUN_MIGRATIONS", true)?,
            google_api_key,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            ai_limits: AiLimits {
                requests_per_minute: parse_or(
                    &var,
                    "AI_RATE_LIMIT_PER_MINUTE",
                    defaults.requests_per_minute,
                )?,
                requests_per_hour: parse_or(&var, "AI_RATE_LIMIT_PER_HOUR", defaults.requests_per_hour)?,
                daily_requests: parse_or(&var, "AI_DAILY_REQUEST_LIMIT", defaults.daily_requests)?,
            },
        })
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::Configuration(format!("Invalid {key} value {raw:?}: {e}"))),
        None => {
            tracing::debug!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
