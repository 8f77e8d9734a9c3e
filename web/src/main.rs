use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
mod pages;
mod types;

fn main() {
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router base="/app">
            <main>
                <Routes fallback=|| view! { <div class="container"><h1>"Page not found"</h1></div> }>
                    <Route path=path!("/") view=pages::EvalsPage />
                    <Route path=path!("/evals") view=pages::EvalsPage />
                </Routes>
            </main>
        </Router>
    }
}
