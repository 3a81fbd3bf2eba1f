use crate::components::{
    server_error_message, AiRoastForm, ErrorDisplay, LoadingSpinner, RoastCard, RoastForm,
    TechFields,
};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use server_fn::ServerFnError;
use stack_roast_app::domain::StackWithRoasts;

#[server(GetStackFn, "/_sfn", endpoint = "get_stack")]
pub async fn get_stack(id: String) -> Result<StackWithRoasts, ServerFnError> {
    use stack_roast_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.stacks
        .get_stack_with_roasts(&id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn StackPage() -> impl IntoView {
    let params = use_params_map();
    let stack = Resource::new(
        move || params.read().get("id").unwrap_or_default(),
        get_stack,
    );

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || {
                stack.get().map(|result| match result {
                    Ok(detail) => view! { <StackDetail detail=detail/> }.into_any(),
                    Err(e) => view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn StackDetail(detail: StackWithRoasts) -> impl IntoView {
    let StackWithRoasts { stack, roasts } = detail;
    let stack_id = stack.id;
    let author = stack.display_author().to_string();
    let date = stack.created_at.format("%b %-d, %Y").to_string();

    view! {
        <a href="/" class="back">"← All stacks"</a>
        <section class="stack-detail">
            <h1 class="stack-detail__title">{stack.title}</h1>
            <p class="stack-detail__meta">"by " {author} " · " {date} " · 🔥 " {stack.roast_count}</p>
            <TechFields
                frontend=stack.frontend
                backend=stack.backend
                database=stack.database
                hosting=stack.hosting
            />
            {(!stack.other_tools.is_empty()).then(|| view! {
                <ul class="tags">
                    {stack.other_tools.into_iter().map(|tool| view! { <li class="tag">{tool}</li> }).collect::<Vec<_>>()}
                </ul>
            })}
            {stack.description.map(|d| view! { <p class="stack-detail__description">{d}</p> })}
        </section>

        <RoastForm stack_id=stack_id/>
        <AiRoastForm stack_id=stack_id/>

        <section class="roasts">
            <h2 class="roasts__title">"Roasts"</h2>
            {if roasts.is_empty() {
                view! { <p class="empty">"No roasts yet. Light the first match!"</p> }.into_any()
            } else {
                roasts.into_iter().map(|roast| view! { <RoastCard roast=roast/> }).collect::<Vec<_>>().into_any()
            }}
        </section>
    }
}
