use crate::catalog::Icon;
use crate::components::LineIcon;
use crate::{dom, log};
use leptos::*;

/// Returns to the previous browser history entry.
#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <button
            class="back-button"
            on:click=move |_| {
                if let Err(err) = dom::go_back() {
                    log::warn(&format!("could not go back: {}", err));
                }
            }
        >
            <LineIcon icon=Icon::ArrowLeft class="icon-md"/>
            <span>"Back"</span>
        </button>
    }
}
