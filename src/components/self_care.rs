//! Self-care suggestion lists for the home tab.

use dioxus::prelude::*;

#[component]
pub fn SelfCareList() -> Element {
    rsx! {
        section { class: "card card-gradient",
            h2 { class: "card-title", "Self-Care Suggestions" }
            for section in cozynest_core::self_care_sections() {
                div {
                    h3 { class: "tip-section-title",
                        span { "♥" }
                        "{section.title}"
                    }
                    ul { class: "tip-list",
                        for tip in section.tips {
                            li { class: "tip-item",
                                span { class: "tip-dot", "•" }
                                span { "{tip}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
