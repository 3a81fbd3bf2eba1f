use leptos::prelude::*;
use stack_roast_app::domain::{MAX_DESCRIPTION_LEN, MAX_SHORT_FIELD_LEN};

#[component]
pub fn SubmitPage() -> impl IntoView {
    let short = MAX_SHORT_FIELD_LEN.to_string();

    view! {
        <a href="/" class="back">"← All stacks"</a>
        <h1 class="page-title">"Submit your stack"</h1>
        <form action="/stacks" method="post" class="form">
            <label class="form__label">
                "Project title"
                <input type="text" name="title" class="form__input" maxlength=short.clone() required/>
            </label>
            <div class="form__grid">
                <label class="form__label">
                    "Frontend"
                    <input type="text" name="frontend" class="form__input" maxlength=short.clone() placeholder="React" required/>
                </label>
                <label class="form__label">
                    "Backend"
                    <input type="text" name="backend" class="form__input" maxlength=short.clone() placeholder="Node.js" required/>
                </label>
                <label class="form__label">
                    "Database"
                    <input type="text" name="database" class="form__input" maxlength=short.clone() placeholder="PostgreSQL" required/>
                </label>
                <label class="form__label">
                    "Hosting"
                    <input type="text" name="hosting" class="form__input" maxlength=short.clone() placeholder="Vercel" required/>
                </label>
            </div>
            <label class="form__label">
                "Other tools (comma separated)"
                <input type="text" name="other_tools" class="form__input" placeholder="Docker, Redis, Kafka"/>
            </label>
            <label class="form__label">
                "Description"
                <textarea name="description" class="form__input" rows="4" maxlength=MAX_DESCRIPTION_LEN.to_string()></textarea>
            </label>
            <label class="form__label">
                "Your name"
                <input type="text" name="author_name" class="form__input" maxlength=short/>
            </label>
            <label class="form__checkbox">
                <input type="checkbox" name="is_anonymous" value="true"/>
                "Post anonymously"
            </label>
            <button type="submit" class="form__button">"Roast me"</button>
        </form>
    }
}
