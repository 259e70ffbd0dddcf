use crate::{dom, log};
use leptos::*;

/// Thin bar pinned to the top of the viewport, scaled by scroll progress.
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let (progress, set_progress) = create_signal(0.0_f64);

    let update = move || match dom::scroll_metrics() {
        Ok(metrics) => {
            // Ignored once the page has been unmounted
            let _ = set_progress.try_set(metrics.progress());
        }
        Err(err) => log::warn(&format!("could not read scroll position: {}", err)),
    };
    // First reading waits until this page is in the document
    request_animation_frame(update);

    let on_scroll = window_event_listener(ev::scroll, move |_| update());
    let on_resize = window_event_listener(ev::resize, move |_| update());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="1"
            aria-valuenow=move || format!("{:.2}", progress.get())
            style=move || format!("transform: scaleX({:.4})", progress.get())
        ></div>
    }
}
