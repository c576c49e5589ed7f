//! Page chrome: header, content column, bottom tab bar.

use dioxus::prelude::*;

use crate::components::{TabBar, TabLocation};

#[component]
pub fn Shell(current: TabLocation, children: Element) -> Element {
    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                h1 { class: "shell-title", "CozyNest" }
            }
            main { class: "shell-main", {children} }
            TabBar { current }
        }
    }
}
