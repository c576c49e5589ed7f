//! Gallery tab: a plain grid of the photos under `<data-dir>/gallery`.

use cozynest_core::scan_photos;
use dioxus::prelude::*;

use crate::components::{data_uri, Shell, TabLocation};

#[component]
pub fn Gallery() -> Element {
    let gallery_dir = crate::get_data_dir().join("gallery");
    let hint = format!(
        "Add image files to {} to display them here",
        gallery_dir.display()
    );
    // (title, data URI) pairs; unreadable files are skipped at scan time
    let photos: Signal<Vec<(String, String)>> = use_signal(move || {
        scan_photos(&gallery_dir)
            .into_iter()
            .filter_map(|photo| data_uri(&photo.path).map(|uri| (photo.title, uri)))
            .collect()
    });

    rsx! {
        Shell { current: TabLocation::Gallery,
            section { class: "card",
                h2 { class: "card-title", "Gallery" }
                if photos.read().is_empty() {
                    div { class: "empty-hint",
                        p { "No photos found" }
                        p { "{hint}" }
                    }
                } else {
                    div { class: "photo-grid",
                        for (title, src) in photos.read().iter() {
                            figure { class: "photo-cell", key: "{title}",
                                img { src: "{src}", alt: "{title}" }
                                figcaption { class: "photo-caption", "{title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
