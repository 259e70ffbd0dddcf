use crate::catalog::Icon;
use leptos::*;

#[component]
pub fn LineIcon(
    icon: Icon,
    /// Extra classes for sizing and animation
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <svg
            class=format!("line-icon {}", class)
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon.svg_body()
        ></svg>
    }
}
