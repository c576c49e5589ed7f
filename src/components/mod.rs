//! Reusable view pieces for the CozyNest shell.

pub mod breathing;
pub mod comfort_card;
pub mod media;
pub mod nav_bar;
pub mod self_care;
pub mod shell;

pub use breathing::BreathingExercise;
pub use comfort_card::ComfortCard;
pub use media::data_uri;
pub use nav_bar::{TabBar, TabLocation};
pub use self_care::SelfCareList;
pub use shell::Shell;
