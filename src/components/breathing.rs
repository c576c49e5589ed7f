//! Guided breathing exercise view.
//!
//! The state machine lives in [`cozynest_core::BreathingTimer`]; this
//! component owns one instance and a one-second tick task that exists only
//! while the timer is running.

use cozynest_core::{circle_scale, BreathingTimer};
use dioxus::prelude::*;

#[component]
pub fn BreathingExercise() -> Element {
    let mut timer = use_signal(BreathingTimer::new);
    let running = use_memo(move || timer.read().is_running());

    // Tick source. `use_resource` restarts (cancelling the old loop) whenever
    // `running` flips, so pausing or leaving the page stops the clock instead
    // of letting an orphaned loop keep counting.
    let _ticker = use_resource(move || async move {
        if !running() {
            return;
        }
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            timer.write().tick();
        }
    });

    let state = timer();
    let size = circle_scale(state.phase(), state.remaining_seconds());

    rsx! {
        section { class: "card card-gradient",
            h2 { class: "card-title", "Breathing Exercise" }
            p { class: "card-subtitle",
                "A simple breathing exercise to help reduce stress and discomfort"
            }

            div { class: "breath-stage",
                div {
                    class: "breath-circle",
                    style: "width: {size}px; height: {size}px;",
                    span { class: "breath-count", "{state.remaining_seconds()}" }
                }
                p { class: "breath-label", "{state.phase().label()}" }
                if state.completed_cycles() > 0 {
                    p { class: "breath-cycles", "Completed cycles: {state.completed_cycles()}" }
                }
            }

            div { class: "breath-controls",
                button {
                    class: "btn-primary",
                    onclick: move |_| timer.write().toggle(),
                    if running() { "Pause" } else { "Start" }
                }
                button {
                    class: "btn-ghost",
                    onclick: move |_| timer.write().reset(),
                    "Reset"
                }
            }
        }
    }
}
