mod api;
mod client_ip;
mod forms;
mod render;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use stack_roast_app::config::AppConfig;
use stack_roast_app::AppContext;
use stack_roast_ui::pages::{GetStackFn, ListStacksFn};
use stack_roast_ui::App;
use std::time::Instant;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Loaded configuration");

    let app_context = match AppContext::from_config(&config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<ListStacksFn>();
    server_fn::axum::register_explicit::<GetStackFn>();
    tracing::info!("Registered server functions: ListStacksFn, GetStackFn");

    let app = Router::new()
        .route("/health", get(health))
        .merge(api::router().with_state::<LeptosOptions>(app_context.clone()))
        .merge(forms::router().with_state::<LeptosOptions>(app_context.clone()))
        .route("/_sfn/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(middleware::from_fn(log_request))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "AI roasts: {}, rate limit {}/min, {}/hour, daily budget {} requests",
        if app_context.generate_roast.is_configured() { "enabled" } else { "disabled" },
        config.ai_limits.requests_per_minute,
        config.ai_limits.requests_per_hour,
        app_context.cost_tracker.remaining_requests()
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href=render::FAVICON/>
                <style>{render::CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
