//! Session context provider for CozyNest.
//!
//! Provides the shared [`DiarySession`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let session = use_session();
//!
//! spawn(async move {
//!     let shared = session();
//!     let guard = shared.read().await;
//!     let count = guard.entries().len();
//! });
//! ```

use std::sync::Arc;

use cozynest_core::DiarySession;
use dioxus::prelude::*;
use tokio::sync::RwLock;

/// Shared session type for context.
///
/// The session is wrapped in `Arc<RwLock<_>>` so view tasks serialize their
/// mutations: a call-then-reload sequence holds the write guard end to end
/// and can never interleave with a logout or another mutation.
pub type SharedSession = Arc<RwLock<DiarySession>>;

/// Hook to access the shared diary session from context.
pub fn use_session() -> Signal<SharedSession> {
    use_context::<Signal<SharedSession>>()
}

/// Hook to check whether the initial session restore has finished.
pub fn use_session_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
