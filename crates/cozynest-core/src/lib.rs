//! CozyNest Core Library
//!
//! State-bearing logic for the CozyNest comfort companion: the guided-breathing
//! timer state machine, the diary session lifecycle (authentication, entry
//! cache, pagination), and the HTTP clients for the remote diary and
//! mood/message stores.
//!
//! ## Overview
//!
//! The desktop shell renders tabs; everything with a lifecycle lives here:
//!
//! - **Local-only**: the breathing timer is pure state driven by an external
//!   one-second tick source. No I/O, no failure modes.
//! - **Remote-backed**: the diary session mediates every mutation through a
//!   [`DiaryStore`] and treats the store's list as the only source of truth -
//!   the cache is fully replaced after each successful load, never patched.
//! - **Fail-safe**: a store call that fails or returns a malformed shape
//!   degrades to an inline error or an empty list, never a crash.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use cozynest_core::{AuthMode, DiarySession, HttpDiaryStore, MemorySlot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(HttpDiaryStore::new("http://localhost:4000"));
//!     let slot = Arc::new(MemorySlot::new());
//!     let mut session = DiarySession::new(store, slot);
//!
//!     session.authenticate("alice", "secret", AuthMode::Login).await?;
//!     session.add_entry("Dear diary, today was gentle.").await?;
//!
//!     for entry in session.entries() {
//!         println!("{}: {}", entry.title, entry.content);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod breathing;
pub mod error;
pub mod http;
pub mod library;
pub mod messages;
pub mod session;
pub mod slot;
pub mod store;

// Re-exports
pub use breathing::{circle_scale, BreathingPhase, BreathingTimer, CIRCLE_MAX, CIRCLE_MIN};
pub use error::CoreError;
pub use http::{HttpDiaryStore, MoodApi};
pub use library::{scan_memories, scan_photos, scan_tracks, MemoryCard, Photo, Track};
pub use messages::{pick_affirmation, self_care_sections, TipSection, AFFIRMATIONS};
pub use session::DiarySession;
pub use slot::{FileSlot, MemorySlot, SessionSlot};
pub use store::{
    AuthMode, AuthOutcome, DiaryEntry, DiaryStore, MoodEntry, MutationAck, SharedMessage,
};
