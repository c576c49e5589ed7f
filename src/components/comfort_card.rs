//! Rotating affirmation card for the home tab.

use cozynest_core::messages;
use dioxus::prelude::*;

#[component]
pub fn ComfortCard() -> Element {
    let mut message =
        use_signal(|| messages::pick_affirmation(&mut rand::rng(), None));

    rsx! {
        section { class: "card card-gradient",
            h2 { class: "card-title", "Comfort Message" }
            p { class: "affirmation-text", "\u{201c}{message}\u{201d}" }
            button {
                class: "btn-primary",
                onclick: move |_| {
                    // The picker never hands back the message already shown
                    let next = messages::pick_affirmation(&mut rand::rng(), Some(message()));
                    message.set(next);
                },
                "New Message"
            }
        }
    }
}
