use super::types::{GenerateContentRequest, GenerateContentResponse};
use stack_roast_errors::AppError;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_base: &str, model: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            http_client,
            api_key,
            endpoint: format!(
                "{}/models/{}:generateContent",
                api_base.trim_end_matches('/'),
                model
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the prompt as a single user turn and returns the first candidate's text.
    pub async fn generate(&self, prompt: String) -> Result<String, AppError> {
        let request = GenerateContentRequest::new(prompt);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("X-Goog-Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::AiProvider {
                status: None,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini error: {} - {}", status, body);
            return Err(AppError::AiProvider {
                status: Some(status.as_u16()),
                message: format!("Google API error: {} - {}", status.as_u16(), body),
            });
        }

        let completion: GenerateContentResponse =
            response.json().await.map_err(|e| AppError::AiProvider {
                status: None,
                message: e.to_string(),
            })?;

        Ok(completion.first_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn spawn_mock(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1beta")
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new("k".into(), "https://example.com/v1beta/", "gemini-2.0-flash");
        assert_eq!(
            client.endpoint(),
            "https://example.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_returns_first_candidate() {
        let router = Router::new().route(
            "/v1beta/models/{action}",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["x-goog-api-key"], "test-key");
                let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": format!("roasted: {prompt}")}]}}]
                }))
            }),
        );
        let base = spawn_mock(router).await;

        let client = GeminiClient::new("test-key".into(), &base, "gemini-2.0-flash");
        let text = client.generate("my stack".into()).await.unwrap();
        assert_eq!(text, "roasted: my stack");
    }

    #[tokio::test]
    async fn test_generate_propagates_status() {
        let router = Router::new().route(
            "/v1beta/models/{action}",
            post(|| async { (StatusCode::FORBIDDEN, "bad key") }),
        );
        let base = spawn_mock(router).await;

        let client = GeminiClient::new("nope".into(), &base, "gemini-2.0-flash");
        let err = client.generate("x".into()).await.unwrap_err();
        assert_eq!(
            err,
            AppError::AiProvider {
                status: Some(403),
                message: "Google API error: 403 - bad key".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_empty() {
        let router = Router::new().route(
            "/v1beta/models/{action}",
            post(|| async { Json(json!({"promptFeedback": {"blockReason": "SAFETY"}})) }),
        );
        let base = spawn_mock(router).await;

        let client = GeminiClient::new("k".into(), &base, "gemini-2.0-flash");
        assert_eq!(client.generate("x".into()).await.unwrap(), "");
    }
}
