use crate::catalog::Subject;
use crate::components::LineIcon;
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn SubjectCard(subject: &'static Subject, index: usize) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="subject-card" style=format!("animation-delay: {}ms", (index + 1) * 1000)>
            <div class="subject-card-glow"></div>
            <div class="subject-card-inner">
                <div class=format!("subject-badge {}", subject.gradient)>
                    <LineIcon icon=subject.icon class=format!("icon-lg {}", subject.icon_animation)/>
                </div>
                <h2 class="subject-title">{subject.title}</h2>
                <p class="subject-description">{subject.description}</p>
                <button
                    class="explore-button"
                    on:click=move |_| navigate(subject.explore_path(), Default::default())
                >
                    "Explore"
                </button>
            </div>
        </div>
    }
}
