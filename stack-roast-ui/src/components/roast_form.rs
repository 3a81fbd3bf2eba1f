use leptos::prelude::*;
use stack_roast_app::domain::{RoastType, MAX_AUTHOR_LEN, MAX_ROAST_LEN};
use uuid::Uuid;

fn roast_type_options() -> impl IntoView {
    RoastType::ALL
        .iter()
        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
        .collect::<Vec<_>>()
}

#[component]
pub fn RoastForm(stack_id: Uuid) -> impl IntoView {
    view! {
        <form action=format!("/stack/{stack_id}/roasts") method="post" class="form">
            <h3 class="form__title">"Roast this stack"</h3>
            <textarea
                name="content"
                class="form__input"
                rows="4"
                maxlength=MAX_ROAST_LEN.to_string()
                placeholder="Let it rip..."
                required
            ></textarea>
            <div class="form__row">
                <select name="roast_type" class="form__input">{roast_type_options()}</select>
                <input
                    type="text"
                    name="author_name"
                    class="form__input"
                    maxlength=MAX_AUTHOR_LEN.to_string()
                    placeholder="Your name (optional)"
                />
            </div>
            <button type="submit" class="form__button">"Submit roast"</button>
        </form>
    }
}

#[component]
pub fn AiRoastForm(stack_id: Uuid) -> impl IntoView {
    view! {
        <form action=format!("/stack/{stack_id}/ai-roast") method="post" class="form form--ai">
            <h3 class="form__title">"Let the AI roast it"</h3>
            <div class="form__row">
                <select name="roast_type" class="form__input">{roast_type_options()}</select>
                <button type="submit" class="form__button form__button--ai">"Generate AI roast"</button>
            </div>
        </form>
    }
}
