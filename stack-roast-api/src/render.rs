use axum::response::{Html, IntoResponse, Response};
use stack_roast_errors::AppError;
use stack_roast_ui::markdown::escape_html;

pub const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>";

/// An error rendered as a standalone HTML page with the matching status code.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        if status.is_server_error() {
            tracing::error!("Form request failed: {}", self.0);
        }
        (status, Html(render_error_page(self.0.user_message()))).into_response()
    }
}

pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error - Roast My Stack</title>
    <link rel="icon" href="{favicon}">
    <style>{css}</style>
</head>
<body>
    <main class="container">
        <div class="error">
            <p class="error__title">Well, that went up in flames.</p>
            <p class="error__message">{message}</p>
            <a href="javascript:history.back()" class="error__retry">Go back</a>
        </div>
    </main>
</body>
</html>"#,
        favicon = FAVICON,
        css = CSS,
        message = escape_html(message),
    )
}

pub const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
a { color: var(--pine); }
.container { max-width: 900px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 2rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--love); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 520px; margin: 0 auto 1.5rem; }
.hero__cta, .form__button {
    display: inline-block; padding: 0.75rem 1.5rem; background: var(--love); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer; text-decoration: none;
}
.form__button--ai { background: var(--pine); }
.sort { display: flex; gap: 0.5rem; justify-content: center; margin-bottom: 1.5rem; }
.sort__link { padding: 0.4rem 0.9rem; border-radius: 999px; border: 2px solid var(--overlay); text-decoration: none; color: var(--subtle); }
.sort__link--active { border-color: var(--love); color: var(--love); font-weight: 600; }
.totals { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
.totals__item { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1rem; text-align: center; }
.totals__value { display: block; font-size: 1.4rem; font-weight: 700; color: var(--love); overflow-wrap: anywhere; }
.totals__label { color: var(--muted); font-size: 0.9rem; }
.stack-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.stack-card, .stack-detail, .roast, .form {
    background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.25rem;
}
.stack-card__header { display: flex; justify-content: space-between; gap: 0.5rem; margin-bottom: 0.75rem; }
.stack-card__title { font-weight: 700; font-size: 1.1rem; color: var(--love); text-decoration: none; }
.stack-card__count { color: var(--gold); white-space: nowrap; }
.stack-card__description, .stack-detail__description { color: var(--subtle); margin-top: 0.75rem; }
.stack-card__footer { display: flex; justify-content: space-between; color: var(--muted); font-size: 0.85rem; margin-top: 0.75rem; }
.stack-detail { margin: 1rem 0 1.5rem; }
.stack-detail__title { color: var(--love); font-size: 1.8rem; }
.stack-detail__meta { color: var(--muted); margin-bottom: 1rem; }
.tech { display: grid; grid-template-columns: auto 1fr; gap: 0.25rem 1rem; }
.tech dt { color: var(--muted); }
.tags { display: flex; flex-wrap: wrap; gap: 0.4rem; list-style: none; margin-top: 0.75rem; }
.tag { background: var(--overlay); border-radius: 999px; padding: 0.15rem 0.6rem; font-size: 0.85rem; }
.form { display: flex; flex-direction: column; gap: 0.75rem; margin: 1.5rem 0; }
.form__title { color: var(--pine); }
.form__grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 0.75rem; }
.form__row { display: flex; gap: 0.75rem; flex-wrap: wrap; }
.form__label { display: flex; flex-direction: column; gap: 0.3rem; color: var(--subtle); }
.form__input {
    flex: 1; padding: 0.75rem 1rem; border: 2px solid var(--overlay); border-radius: 8px;
    background: var(--base); color: var(--text); font-size: 1rem; font-family: inherit;
}
.form__input:focus { outline: none; border-color: var(--pine); }
.form__checkbox { display: flex; gap: 0.5rem; align-items: center; color: var(--subtle); }
.page-title { color: var(--love); margin: 1rem 0; }
.back { display: inline-block; margin-bottom: 0.5rem; text-decoration: none; }
.roasts__title { color: var(--pine); margin: 1.5rem 0 1rem; }
.roast { margin-bottom: 1rem; }
.roast__meta { display: flex; gap: 0.75rem; align-items: center; color: var(--muted); font-size: 0.9rem; margin-bottom: 0.75rem; }
.roast__content { line-height: 1.7; }
.roast__content p { margin-bottom: 0.75rem; }
.roast__content strong { font-weight: 700; color: var(--love); }
.roast__content ul { margin: 0 0 0.75rem 1.5rem; }
.roast__votes { display: flex; gap: 0.5rem; margin-top: 0.75rem; }
.vote-button { padding: 0.35rem 0.8rem; border: 2px solid var(--overlay); border-radius: 999px; background: var(--base); cursor: pointer; }
.badge { padding: 0.1rem 0.6rem; border-radius: 999px; color: var(--base); font-weight: 600; }
.badge--brutal { background: var(--love); }
.badge--constructive { background: var(--pine); }
.badge--meme { background: var(--gold); }
.empty { text-align: center; color: var(--muted); padding: 2rem 0; }
.loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
.loading__spinner {
    width: 50px; height: 50px; border: 4px solid var(--overlay);
    border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__retry {
    display: inline-block; margin-top: 1rem; padding: 0.5rem 1rem; background: var(--love);
    color: var(--base); border-radius: 4px; text-decoration: none;
}
"#;
