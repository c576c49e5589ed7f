//! Music tab: local library player.
//!
//! Lists whatever audio files sit under `<data-dir>/music` and plays the
//! selected one through a native audio element.

use cozynest_core::{scan_tracks, Track};
use dioxus::prelude::*;

use crate::components::{data_uri, Shell, TabLocation};

#[component]
pub fn Music() -> Element {
    let music_dir = crate::get_data_dir().join("music");
    let hint = format!(
        "Drop audio files into {} to play them here",
        music_dir.display()
    );
    let tracks: Signal<Vec<Track>> = use_signal(move || scan_tracks(&music_dir));
    let mut selected: Signal<Option<usize>> = use_signal(|| None);

    // Inline the selected file only when the selection changes
    let playing_src = use_memo(move || {
        selected().and_then(|index| {
            tracks
                .read()
                .get(index)
                .and_then(|track| data_uri(&track.path))
        })
    });

    rsx! {
        Shell { current: TabLocation::Music,
            section { class: "card",
                h2 { class: "card-title", "Relaxing Music" }
                if tracks.read().is_empty() {
                    div { class: "empty-hint",
                        p { "No music found" }
                        p { "{hint}" }
                    }
                } else {
                    ul { class: "track-list",
                        for (index, track) in tracks.read().iter().enumerate() {
                            li { key: "{track.path.display()}",
                                button {
                                    class: if selected() == Some(index) { "track-item playing" } else { "track-item" },
                                    onclick: move |_| selected.set(Some(index)),
                                    "♪ {track.title}"
                                }
                            }
                        }
                    }
                    if let Some(src) = playing_src() {
                        audio {
                            class: "player-audio",
                            src: "{src}",
                            controls: true,
                            autoplay: true,
                        }
                    }
                }
            }
        }
    }
}
