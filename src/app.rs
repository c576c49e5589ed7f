use std::sync::Arc;

use cozynest_core::{DiarySession, DiaryStore, FileSlot, HttpDiaryStore, SessionSlot};
use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::SharedSession;
use crate::pages::{Diary, Gallery, Home, Memories, Music};
use crate::theme::GLOBAL_STYLES;

/// Application routes - one per tab of the bottom bar.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/music")]
    Music {},
    #[route("/gallery")]
    Gallery {},
    #[route("/memories")]
    Memories {},
    #[route("/diary")]
    Diary {},
}

/// Root application component.
///
/// Provides global styles, the shared diary session, and routing. The session
/// is restored from the persisted identifier once on mount; until that
/// finishes `session_ready` stays false and the diary tab shows its loading
/// state.
#[component]
pub fn App() -> Element {
    let session: Signal<SharedSession> = use_signal(|| {
        let store: Arc<dyn DiaryStore> = Arc::new(HttpDiaryStore::new(crate::get_backend_url()));
        let slot: Arc<dyn SessionSlot> = Arc::new(FileSlot::new(crate::get_data_dir()));
        Arc::new(RwLock::new(DiarySession::new(store, slot)))
    });
    let mut session_ready: Signal<bool> = use_signal(|| false);

    use_context_provider(|| session);
    use_context_provider(|| session_ready);

    // Restore any persisted session on mount
    use_effect(move || {
        spawn(async move {
            let shared = session();
            let mut guard = shared.write().await;
            match guard.restore().await {
                Ok(true) => tracing::info!("diary session restored"),
                Ok(false) => tracing::info!("no persisted diary session, login required"),
                Err(e) => tracing::warn!("session restore failed: {e}"),
            }
            drop(guard);
            session_ready.set(true);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
