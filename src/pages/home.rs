//! Home tab: affirmation card, breathing exercise, self-care tips.

use dioxus::prelude::*;

use crate::components::{BreathingExercise, ComfortCard, SelfCareList, Shell, TabLocation};

#[component]
pub fn Home() -> Element {
    rsx! {
        Shell { current: TabLocation::Home,
            div { class: "stack",
                ComfortCard {}
                BreathingExercise {}
                SelfCareList {}
            }
        }
    }
}
