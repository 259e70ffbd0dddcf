use crate::catalog::{SubjectPageContent, CHEMISTRY, MATHEMATICS, PHYSICS};
use crate::components::{BackButton, ResourceCard, ScrollProgressBar};
use leptos::*;

/// Resource listing shared by every subject.
#[component]
pub fn SubjectPage(content: &'static SubjectPageContent) -> impl IntoView {
    view! {
        <div class="subject-page">
            <ScrollProgressBar/>

            <main class="subject-content">
                <BackButton/>

                <header class="subject-hero">
                    <div class="subject-hero-glow" aria-hidden="true"></div>
                    <h1>{content.heading}</h1>
                    <p class="tagline">{content.tagline}</p>
                </header>

                <section class="resource-list">
                    {content
                        .entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <ResourceCard entry=entry index=index/> })
                        .collect_view()}
                </section>
            </main>
        </div>
    }
}

#[component]
pub fn ChemistryPage() -> impl IntoView {
    view! { <SubjectPage content=&CHEMISTRY/> }
}

#[component]
pub fn PhysicsPage() -> impl IntoView {
    view! { <SubjectPage content=&PHYSICS/> }
}

#[component]
pub fn MathematicsPage() -> impl IntoView {
    view! { <SubjectPage content=&MATHEMATICS/> }
}
