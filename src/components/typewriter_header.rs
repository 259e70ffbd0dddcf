use crate::config::SITE;
use crate::typewriter::Typewriter;
use leptos::*;
use std::time::Duration;

/// Run one typewriter step after `delay` and schedule the next.
///
/// The chain ends once the component is unmounted and its stored value and
/// signal have been disposed.
fn schedule_step(machine: StoredValue<Typewriter>, set_text: WriteSignal<String>, delay: Duration) {
    set_timeout(
        move || {
            let Some((visible, next)) = machine.try_update_value(|tw| {
                let next = tw.step();
                (tw.visible().to_string(), next)
            }) else {
                return;
            };
            if set_text.try_set(visible).is_some() {
                return;
            }
            schedule_step(machine, set_text, next);
        },
        delay,
    );
}

/// "Master Your ..." headline with the cycling phrase.
#[component]
pub fn TypewriterHeader() -> impl IntoView {
    let machine = store_value(Typewriter::new(SITE.headline_phrases, SITE.typewriter));
    let (text, set_text) = create_signal(String::new());

    schedule_step(machine, set_text, SITE.typewriter.type_delay());

    view! {
        <h1 class="headline">
            <span class="headline-static">{SITE.headline_prefix}</span>
            <span class="typewriter-wrapper">
                <span class="typewriter-text">{move || text.get()}</span>
                <span class="typewriter-cursor">"|"</span>
            </span>
        </h1>
    }
}
