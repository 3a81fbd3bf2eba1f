use leptos::prelude::*;
use stack_roast_app::domain::Stack;

#[component]
pub fn StackCard(stack: Stack) -> impl IntoView {
    let href = format!("/stack/{}", stack.id);
    let author = stack.display_author().to_string();
    let date = stack.created_at.format("%b %-d, %Y").to_string();
    let roast_label = if stack.roast_count == 1 {
        "1 roast".to_string()
    } else {
        format!("{} roasts", stack.roast_count)
    };

    view! {
        <article class="stack-card">
            <header class="stack-card__header">
                <a href=href class="stack-card__title">{stack.title}</a>
                <span class="stack-card__count">"🔥 " {roast_label}</span>
            </header>
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
            {stack.description.map(|d| view! { <p class="stack-card__description">{d}</p> })}
            <footer class="stack-card__footer">
                <span>"by " {author}</span>
                <span>{date}</span>
            </footer>
        </article>
    }
}

#[component]
pub fn TechFields(
    frontend: String,
    backend: String,
    database: String,
    hosting: String,
) -> impl IntoView {
    view! {
        <dl class="tech">
            <dt>"Frontend"</dt><dd>{frontend}</dd>
            <dt>"Backend"</dt><dd>{backend}</dd>
            <dt>"Database"</dt><dd>{database}</dd>
            <dt>"Hosting"</dt><dd>{hosting}</dd>
        </dl>
    }
}
