use crate::client_ip::ClientIp;
use crate::render::HtmlError;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;
use stack_roast_app::application::AI_AUTHOR_NAME;
use stack_roast_app::domain::{
    NewRoast, RoastSubmission, RoastType, StackSubmission, VoteSubmission,
};
use stack_roast_app::AppContext;
use stack_roast_errors::AppError;
use uuid::Uuid;

/// Plain HTML form endpoints. Each one redirects to the affected stack page on
/// success and renders an error page otherwise.
pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/stacks", post(submit_stack))
        .route("/stack/{id}/roasts", post(submit_roast))
        .route("/stack/{id}/ai-roast", post(submit_ai_roast))
        .route("/roasts/{id}/vote", post(submit_vote))
}

fn form_body<T>(form: Result<Form<T>, FormRejection>) -> Result<T, HtmlError> {
    form.map(|Form(value)| value).map_err(|rejection| {
        tracing::debug!("Rejected form: {}", rejection.body_text());
        HtmlError(AppError::validation("Invalid form data"))
    })
}

fn stack_page(id: Uuid) -> Redirect {
    Redirect::to(&format!("/stack/{id}"))
}

fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(format!("{what} not found")))
}

#[derive(Debug, Default, Deserialize)]
pub struct StackForm {
    pub title: Option<String>,
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub hosting: Option<String>,
    pub other_tools: Option<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub is_anonymous: Option<String>,
}

impl From<StackForm> for StackSubmission {
    fn from(form: StackForm) -> Self {
        Self {
            title: form.title,
            frontend: form.frontend,
            backend: form.backend,
            database: form.database,
            hosting: form.hosting,
            other_tools: form
                .other_tools
                .as_deref()
                .map(StackSubmission::parse_tool_list),
            description: form.description,
            author_name: form.author_name,
            // Browsers only send a checkbox when it is ticked.
            is_anonymous: Some(form.is_anonymous.is_some()),
        }
    }
}

async fn submit_stack(
    State(ctx): State<AppContext>,
    form: Result<Form<StackForm>, FormRejection>,
) -> Result<Redirect, HtmlError> {
    let stack = ctx.stacks.create_stack(form_body(form)?.into()).await?;
    Ok(stack_page(stack.id))
}

#[derive(Debug, Default, Deserialize)]
pub struct RoastForm {
    pub content: Option<String>,
    pub roast_type: Option<String>,
    pub author_name: Option<String>,
}

async fn submit_roast(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    form: Result<Form<RoastForm>, FormRejection>,
) -> Result<Redirect, HtmlError> {
    let stack_id = parse_id(&id, "Stack")?;
    let form = form_body(form)?;
    let submission = RoastSubmission {
        stack_id: Some(stack_id.to_string()),
        content: form.content,
        roast_type: form.roast_type,
        author_name: form.author_name,
    };

    ctx.roasts.create_roast(submission).await?;
    Ok(stack_page(stack_id))
}

#[derive(Debug, Default, Deserialize)]
pub struct AiRoastForm {
    pub roast_type: Option<String>,
}

async fn submit_ai_roast(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    client_ip: ClientIp,
    form: Result<Form<AiRoastForm>, FormRejection>,
) -> Result<Redirect, HtmlError> {
    let form = form_body(form)?;
    let roast_type = match form.roast_type.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse::<RoastType>()?,
        _ => RoastType::default(),
    };
    let stack = ctx.stacks.get_stack(&id).await?;

    ctx.check_ai_quota(client_ip.as_str())?;
    let content = ctx.generate_roast.roast_stack(&stack, roast_type).await?;

    ctx.roasts
        .create(NewRoast {
            stack_id: stack.id,
            content,
            roast_type,
            author_name: Some(AI_AUTHOR_NAME.to_string()),
        })
        .await?;
    Ok(stack_page(stack.id))
}

#[derive(Debug, Default, Deserialize)]
pub struct VoteForm {
    pub vote_type: Option<String>,
}

async fn submit_vote(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    client_ip: ClientIp,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Redirect, HtmlError> {
    let roast_id = parse_id(&id, "Roast")?;
    let form = form_body(form)?;
    let roast = ctx.roasts.get_roast(roast_id).await?;

    let submission = VoteSubmission {
        roast_id: Some(roast_id.to_string()),
        vote_type: form.vote_type,
    };
    ctx.votes.cast_vote(submission, client_ip.as_str()).await?;
    Ok(stack_page(roast.stack_id))
}
