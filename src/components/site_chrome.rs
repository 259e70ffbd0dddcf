use crate::config::SITE;
use leptos::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <div class="site-header">
            <h1>{SITE.brand}</h1>
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="credit">{format!("Made by {}", SITE.author)}</p>
            <p class="separator">"\u{2022}"</p>
            <p>{format!("Div: {}", SITE.division)}</p>
            <p class="separator">"\u{2022}"</p>
            <p>{format!("Roll no: {}", SITE.roll_number)}</p>
        </footer>
    }
}
