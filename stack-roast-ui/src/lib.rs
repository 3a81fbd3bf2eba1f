pub mod components;
pub mod markdown;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{HomePage, StackPage, SubmitPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Roast My Stack"/>
        <Meta name="description" content="Submit your tech stack and get roasted by humans and AI"/>

        <Router>
            <main class="container">
                <Routes fallback=|| view! { <p class="empty">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/submit") view=SubmitPage/>
                    <Route path=path!("/stack/:id") view=StackPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
