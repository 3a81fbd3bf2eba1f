use crate::client_ip::ClientIp;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use stack_roast_app::domain::{RoastSubmission, StackSubmission, VoteSubmission};
use stack_roast_app::infrastructure::security::InputSanitizer;
use stack_roast_app::AppContext;
use stack_roast_errors::AppError;

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/api/stacks", get(list_stacks).post(create_stack))
        .route("/api/stacks/{id}", get(get_stack))
        .route("/api/roasts", get(list_roasts).post(create_roast))
        .route("/api/votes", post(cast_vote))
        .route("/api/aiRoast", post(ai_roast))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::validation("Invalid request data")
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct ListStacksQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
}

async fn list_stacks(
    State(ctx): State<AppContext>,
    Query(query): Query<ListStacksQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stacks = ctx
        .stacks
        .list_stacks(query.sort.as_deref(), query.order.as_deref())
        .await?;
    Ok(Json(json!({ "stacks": stacks })))
}

async fn create_stack(
    State(ctx): State<AppContext>,
    body: Result<Json<StackSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let stack = ctx.stacks.create_stack(json_body(body)?).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Stack created successfully", "stack": stack })),
    ))
}

async fn get_stack(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = ctx.stacks.get_stack_with_roasts(&id).await?;
    Ok(Json(json!({ "stack": detail.stack, "roasts": detail.roasts })))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListRoastsQuery {
    pub stack_id: Option<String>,
}

async fn list_roasts(
    State(ctx): State<AppContext>,
    Query(query): Query<ListRoastsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let roasts = ctx.roasts.list_roasts(query.stack_id.as_deref()).await?;
    Ok(Json(json!({ "roasts": roasts })))
}

async fn create_roast(
    State(ctx): State<AppContext>,
    body: Result<Json<RoastSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let roast = ctx.roasts.create_roast(json_body(body)?).await?;
    Ok(Json(json!({ "roast": roast })))
}

async fn cast_vote(
    State(ctx): State<AppContext>,
    client_ip: ClientIp,
    body: Result<Json<VoteSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let submission = body
        .map(|Json(value)| value)
        .map_err(|_| AppError::validation("Missing or invalid fields"))?;
    let result = ctx.votes.cast_vote(submission, client_ip.as_str()).await?;
    Ok(Json(json!({
        "success": true,
        "upvotes": result.upvotes,
        "downvotes": result.downvotes,
    })))
}

#[derive(Debug, Deserialize)]
pub struct AiRoastRequest {
    pub prompt: Option<String>,
}

async fn ai_roast(
    State(ctx): State<AppContext>,
    client_ip: ClientIp,
    body: Result<Json<AiRoastRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = json_body(body)?;
    let prompt = InputSanitizer::validate_prompt(request.prompt.as_deref())?;

    ctx.check_ai_quota(client_ip.as_str())?;
    let roast = ctx.generate_roast.execute(prompt).await?;
    Ok(Json(json!({ "roast": roast })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::Value;
    use stack_roast_app::config::AppConfig;
    use tower::ServiceExt;

    async fn app() -> Router {
        let ctx = AppContext::from_config(&AppConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        router().with_state(ctx)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send_from(app, method, uri, body, None).await
    }

    async fn send_from(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
        forwarded_for: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(ip) = forwarded_for {
            request = request.header("x-forwarded-for", ip);
        }
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn stack_body() -> Value {
        json!({
            "title": "X",
            "frontend": "React",
            "backend": "Node",
            "database": "Postgres",
            "hosting": "Vercel"
        })
    }

    async fn create_stack_id(app: &Router) -> String {
        let (status, body) = send(app, Method::POST, "/api/stacks", Some(stack_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        body["stack"]["id"].as_str().unwrap().to_string()
    }

    async fn create_roast_id(app: &Router, stack_id: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/roasts",
            Some(json!({"stack_id": stack_id, "content": "lol", "roast_type": "meme"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["roast"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_stack_roast_flow() {
        let app = app().await;
        let (status, body) = send(&app, Method::POST, "/api/stacks", Some(stack_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Stack created successfully");
        assert_eq!(body["stack"]["roastCount"], 0);
        assert_eq!(body["stack"]["otherTools"], json!([]));
        assert_eq!(body["stack"]["isAnonymous"], false);
        let stack_id = body["stack"]["id"].as_str().unwrap().to_string();

        create_roast_id(&app, &stack_id).await;

        let (status, body) = send(&app, Method::GET, &format!("/api/stacks/{stack_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stack"]["roastCount"], 1);
        assert_eq!(body["roasts"][0]["content"], "lol");
        assert_eq!(body["roasts"][0]["roastType"], "meme");

        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/roasts?stack_id={stack_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roasts"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_stack_missing_field() {
        let app = app().await;
        let mut body = stack_body();
        body.as_object_mut().unwrap().remove("hosting");

        let (status, response) = send(&app, Method::POST, "/api/stacks", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"error": "Missing required field: hosting"}));

        let (_, list) = send(&app, Method::GET, "/api/stacks", None).await;
        assert_eq!(list["stacks"], json!([]));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let app = app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/stacks")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Invalid request data"}));
    }

    #[tokio::test]
    async fn test_get_missing_stack() {
        let app = app().await;
        let uri = format!("/api/stacks/{}", uuid::Uuid::new_v4());
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Stack not found"}));
    }

    #[tokio::test]
    async fn test_list_stacks_sorting() {
        let app = app().await;
        let quiet = create_stack_id(&app).await;
        let loud = create_stack_id(&app).await;
        create_roast_id(&app, &loud).await;

        let (status, body) = send(&app, Method::GET, "/api/stacks?sort=roast_count&order=desc", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stacks"][0]["id"], loud.as_str());
        assert_eq!(body["stacks"][1]["id"], quiet.as_str());

        let (status, _) = send(&app, Method::GET, "/api/stacks?sort=bogus", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_roast_errors() {
        let app = app().await;
        let (status, _) = send(&app, Method::GET, "/api/roasts", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/roasts",
            Some(json!({"stack_id": uuid::Uuid::new_v4(), "content": "lol", "roast_type": "meme"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Stack not found"}));

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/roasts",
            Some(json!({"stack_id": uuid::Uuid::new_v4(), "roast_type": "meme"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_votes() {
        let app = app().await;
        let stack_id = create_stack_id(&app).await;
        let roast_id = create_roast_id(&app, &stack_id).await;
        let vote = |vote_type: &str| Some(json!({"roast_id": roast_id, "vote_type": vote_type}));

        let (status, body) =
            send_from(&app, Method::POST, "/api/votes", vote("up"), Some("1.1.1.1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "upvotes": 1, "downvotes": 0}));

        let (status, body) =
            send_from(&app, Method::POST, "/api/votes", vote("down"), Some("2.2.2.2, 10.0.0.1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["downvotes"], 1);

        let (status, body) =
            send_from(&app, Method::POST, "/api/votes", vote("down"), Some("1.1.1.1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "You have already voted on this roast"}));

        let (status, body) =
            send_from(&app, Method::POST, "/api/votes", vote("sideways"), Some("3.3.3.3")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing or invalid fields"}));

        let (_, detail) = send(&app, Method::GET, &format!("/api/stacks/{stack_id}"), None).await;
        assert_eq!(detail["roasts"][0]["upvotes"], 1);
        assert_eq!(detail["roasts"][0]["downvotes"], 1);
    }

    #[tokio::test]
    async fn test_vote_missing_roast() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/votes",
            Some(json!({"roast_id": uuid::Uuid::new_v4(), "vote_type": "up"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Roast not found"}));
    }

    #[tokio::test]
    async fn test_ai_roast_validation_and_config() {
        let app = app().await;
        let (status, body) = send(&app, Method::POST, "/api/aiRoast", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing prompt"}));

        let (status, body) =
            send(&app, Method::POST, "/api/aiRoast", Some(json!({"prompt": "roast me"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "API key not configured"}));
    }
}
