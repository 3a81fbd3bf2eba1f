use crate::components::{server_error_message, ErrorDisplay, LoadingSpinner, StackCard};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use server_fn::ServerFnError;
use stack_roast_app::domain::Stack;

#[server(ListStacksFn, "/_sfn", endpoint = "list_stacks")]
pub async fn list_stacks(
    sort: Option<String>,
    order: Option<String>,
) -> Result<Vec<Stack>, ServerFnError> {
    use stack_roast_app::AppContext;

    tracing::debug!(?sort, ?order, "Listing stacks");
    let ctx = expect_context::<AppContext>();
    ctx.stacks
        .list_stacks(sort.as_deref(), order.as_deref())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

const SORT_LINKS: [(&str, &str, &str); 3] = [
    ("Latest", "created_at", "desc"),
    ("Most Roasted", "roast_count", "desc"),
    ("Least Roasted", "roast_count", "asc"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let sort = move || query.read().get("sort");
    let order = move || query.read().get("order");

    let stacks = Resource::new(
        move || (sort(), order()),
        |(sort, order)| list_stacks(sort, order),
    );

    view! {
        <div class="hero">
            <h1 class="hero__title">"Roast My Stack"</h1>
            <p class="hero__subtitle">
                "Submit your tech stack and let the internet tell you what it really thinks."
            </p>
            <a href="/submit" class="hero__cta">"Submit your stack"</a>
        </div>

        <nav class="sort">
            {SORT_LINKS.into_iter().map(|(label, field, dir)| {
                let active = move || {
                    sort().as_deref().unwrap_or("created_at") == field
                        && order().as_deref().unwrap_or("desc") == dir
                };
                view! {
                    <a
                        href=format!("/?sort={field}&order={dir}")
                        class=move || if active() { "sort__link sort__link--active" } else { "sort__link" }
                    >
                        {label}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </nav>

        <Suspense fallback=move || view! { <LoadingSpinner text="Loading stacks..."/> }>
            {move || {
                stacks.get().map(|result| match result {
                    Ok(stacks) if stacks.is_empty() => view! {
                        <p class="empty">"No stacks yet. Be the first to get roasted!"</p>
                    }.into_any(),
                    Ok(stacks) => view! {
                        <Totals stacks=stacks.clone()/>
                        <div class="stack-grid">
                            {stacks.into_iter().map(|stack| view! { <StackCard stack=stack/> }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn Totals(stacks: Vec<Stack>) -> impl IntoView {
    let total_roasts: i64 = stacks.iter().map(|s| i64::from(s.roast_count)).sum();
    let most_roasted = stacks
        .iter()
        .filter(|s| s.roast_count > 0)
        .max_by_key(|s| s.roast_count)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <section class="totals">
            <div class="totals__item">
                <span class="totals__value">{stacks.len()}</span>
                <span class="totals__label">"Stacks submitted"</span>
            </div>
            <div class="totals__item">
                <span class="totals__value">{total_roasts}</span>
                <span class="totals__label">"Total roasts"</span>
            </div>
            <div class="totals__item">
                <span class="totals__value">{most_roasted}</span>
                <span class="totals__label">"Most roasted"</span>
            </div>
        </section>
    }
}
