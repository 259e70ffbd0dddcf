use crate::routes::Page;
use leptos::*;
use leptos_router::{use_location, use_navigate};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    view! {
        <main class="not-found-page">
            <header>
                <h1>"404"</h1>
                <p class="tagline">
                    "Nothing lives at "
                    <code>{move || location.pathname.get()}</code>
                </p>
            </header>

            <button
                class="explore-button"
                on:click=move |_| navigate(Page::Home.path(), Default::default())
            >
                "Back home"
            </button>
        </main>
    }
}
