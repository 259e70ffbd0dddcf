pub mod catalog;
pub mod components;
pub mod config;
pub mod dom;
pub mod log;
pub mod pages;
pub mod routes;
pub mod scroll;
pub mod typewriter;

use leptos::*;
use leptos_router::*;
use pages::{ChemistryPage, HomePage, MathematicsPage, NotFoundPage, PhysicsPage};
use routes::{HashIntegration, Page};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    // Routes live in the URL fragment; the static host only serves index.html
    provide_context(RouterIntegrationContext::new(HashIntegration));

    view! {
        <Router>
            <Routes>
                <Route path=Page::Home.path() view=HomePage/>
                <Route path=Page::Chemistry.path() view=ChemistryPage/>
                <Route path=Page::Physics.path() view=PhysicsPage/>
                <Route path=Page::Mathematics.path() view=MathematicsPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    log::debug("mounting");
    mount_to_body(Root);
}
