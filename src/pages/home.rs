use crate::catalog::SUBJECTS;
use crate::components::{SiteFooter, SiteHeader, SubjectCard, TypewriterHeader};
use crate::config::SITE;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <SiteHeader/>

            <div class="background-blobs" aria-hidden="true">
                <div class="blob blob-1"></div>
                <div class="blob blob-2"></div>
                <div class="blob blob-3"></div>
            </div>

            <main class="home-content">
                <header class="home-hero">
                    <TypewriterHeader/>
                    <p class="intro">{SITE.intro}</p>
                </header>

                <section class="subject-grid">
                    {SUBJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, subject)| view! { <SubjectCard subject=subject index=index/> })
                        .collect_view()}
                </section>
            </main>

            <SiteFooter/>
        </div>
    }
}
