//! Bottom tab bar.
//!
//! One button per tab, with the active tab highlighted in the accent color.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TabLocation {
    Home,
    Music,
    Gallery,
    Memories,
    Diary,
}

impl TabLocation {
    /// All tabs, in display order
    pub const ALL: [TabLocation; 5] = [
        TabLocation::Home,
        TabLocation::Music,
        TabLocation::Gallery,
        TabLocation::Memories,
        TabLocation::Diary,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            TabLocation::Home => "Home",
            TabLocation::Music => "Music",
            TabLocation::Gallery => "Gallery",
            TabLocation::Memories => "Memories",
            TabLocation::Diary => "Diary",
        }
    }

    /// Glyph shown above the tab name
    pub fn glyph(&self) -> &'static str {
        match self {
            TabLocation::Home => "⌂",
            TabLocation::Music => "♪",
            TabLocation::Gallery => "❀",
            TabLocation::Memories => "♥",
            TabLocation::Diary => "✎",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            TabLocation::Home => Route::Home {},
            TabLocation::Music => Route::Music {},
            TabLocation::Gallery => Route::Gallery {},
            TabLocation::Memories => Route::Memories {},
            TabLocation::Diary => Route::Diary {},
        }
    }
}

/// Fixed bottom tab bar
#[component]
pub fn TabBar(current: TabLocation) -> Element {
    let navigator = use_navigator();

    rsx! {
        nav { class: "tab-bar",
            for location in TabLocation::ALL {
                button {
                    class: if location == current { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| {
                        navigator.push(location.route());
                    },
                    span { class: "tab-glyph", "{location.glyph()}" }
                    span { "{location.display_name()}" }
                }
            }
        }
    }
}
