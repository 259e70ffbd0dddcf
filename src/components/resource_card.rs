use crate::catalog::{Icon, ResourceEntry};
use crate::components::LineIcon;
use crate::config::SITE;
use leptos::*;

#[component]
pub fn ResourceCard(entry: &'static ResourceEntry, index: usize) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(false);
    let delay_ms = index as u32 * SITE.card_stagger_ms;
    let action = entry.action();

    // A linked card may still carry a short description above the link
    let body = action.placeholder().or(entry.body);
    let link = action.link().map(|link| {
        view! {
            <a class="resource-link" href=link.href target=link.target rel=link.rel>
                <LineIcon icon=Icon::FileText class="icon-sm"/>
                <span>"View PDF"</span>
                <LineIcon icon=Icon::ChevronRight class="icon-sm link-chevron"/>
            </a>
        }
    });

    view! {
        <article
            class="resource-card"
            class:hovered=move || hovered.get()
            style=format!("animation-delay: {}ms", delay_ms)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="resource-card-glow"></div>
            <div class="resource-card-inner">
                <div class="resource-icon">
                    <LineIcon icon=entry.icon class="icon-md"/>
                </div>
                <div class="resource-content">
                    <h3 class="resource-title">{entry.title}</h3>
                    {body.map(|text| view! { <p class="resource-body">{text}</p> })}
                    {link}
                </div>
            </div>
            <div class="resource-card-underline"></div>
        </article>
    }
}
