use crate::markdown::render_roast_html;
use leptos::prelude::*;
use stack_roast_app::domain::{Roast, VoteType};

#[component]
pub fn RoastCard(roast: Roast) -> impl IntoView {
    let html_content = render_roast_html(&roast.content);
    let vote_action = format!("/roasts/{}/vote", roast.id);
    let author = roast.display_author().to_string();
    let type_class = format!("badge badge--{}", roast.roast_type.as_str());
    let date = roast.created_at.format("%b %-d, %Y %H:%M").to_string();
    let score = format!("Score {:+}", roast.score());

    view! {
        <article class="roast">
            <header class="roast__meta">
                <span class=type_class>{roast.roast_type.label()}</span>
                <span class="roast__author">{author}</span>
                <span class="roast__date">{date}</span>
            </header>
            <div class="roast__content" inner_html=html_content></div>
            <div class="roast__votes" title=score>
                <VoteButton action=vote_action.clone() vote_type=VoteType::Up count=roast.upvotes/>
                <VoteButton action=vote_action vote_type=VoteType::Down count=roast.downvotes/>
            </div>
        </article>
    }
}

#[component]
fn VoteButton(action: String, vote_type: VoteType, count: i32) -> impl IntoView {
    let icon = match vote_type {
        VoteType::Up => "👍",
        VoteType::Down => "👎",
    };

    view! {
        <form action=action method="post" class="vote-form">
            <input type="hidden" name="vote_type" value=vote_type.as_str()/>
            <button type="submit" class="vote-button">{icon} " " {count}</button>
        </form>
    }
}
