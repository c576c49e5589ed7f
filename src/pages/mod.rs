//! One page per tab.

mod diary;
mod gallery;
mod home;
mod memories;
mod music;

pub use diary::Diary;
pub use gallery::Gallery;
pub use home::Home;
pub use memories::Memories;
pub use music::Music;
