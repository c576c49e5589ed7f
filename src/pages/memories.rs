//! Memories tab: a wall of tilted polaroid-style photo cards with a
//! click-to-enlarge overlay.

use dioxus::prelude::*;

use crate::components::{data_uri, Shell, TabLocation};

#[derive(Clone, PartialEq)]
struct WallCard {
    title: String,
    rotation: f64,
    src: String,
}

#[component]
pub fn Memories() -> Element {
    let memories_dir = crate::get_data_dir().join("memories");
    let hint = format!(
        "Add image files to {} to display them here",
        memories_dir.display()
    );
    let cards: Signal<Vec<WallCard>> = use_signal(move || {
        let mut rng = rand::rng();
        cozynest_core::scan_memories(&memories_dir, &mut rng)
            .into_iter()
            .filter_map(|card| {
                data_uri(&card.path).map(|src| WallCard {
                    title: card.title,
                    rotation: card.rotation,
                    src,
                })
            })
            .collect()
    });
    let mut enlarged: Signal<Option<usize>> = use_signal(|| None);

    rsx! {
        Shell { current: TabLocation::Memories,
            section { class: "card",
                h2 { class: "card-title", "Memories" }
                p { class: "card-subtitle", "A nostalgic collection of special moments" }
                if cards.read().is_empty() {
                    div { class: "empty-hint",
                        p { "No memories found" }
                        p { "{hint}" }
                    }
                } else {
                    div { class: "memory-wall",
                        for (index, card) in cards.read().iter().enumerate() {
                            div {
                                class: "memory-card",
                                key: "{card.title}",
                                style: "transform: rotate({card.rotation}deg);",
                                onclick: move |_| enlarged.set(Some(index)),
                                img { src: "{card.src}", alt: "{card.title}" }
                                p { class: "memory-title", "{card.title}" }
                            }
                        }
                    }
                }
            }

            if let Some(index) = enlarged() {
                if let Some(card) = cards.read().get(index).cloned() {
                    div { class: "overlay", onclick: move |_| enlarged.set(None),
                        div { class: "overlay-frame",
                            img { src: "{card.src}", alt: "{card.title}" }
                            p { class: "overlay-caption", "{card.title}" }
                        }
                    }
                }
            }
        }
    }
}
