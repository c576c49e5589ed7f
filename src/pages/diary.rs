//! Diary tab: login/register, entry composer, and a one-entry-per-page pager.
//!
//! The shared [`DiarySession`](cozynest_core::DiarySession) is the source of
//! truth; this page keeps a [`SessionView`] snapshot in a signal and refreshes
//! it after every operation, always under the same write guard that performed
//! the operation. Queued actions check the session epoch first so a click that
//! raced a logout is discarded instead of applied to the next session.

use chrono::Local;
use cozynest_core::{AuthMode, DiaryEntry, DiarySession};
use dioxus::prelude::*;

use crate::components::{Shell, TabLocation};
use crate::context::{use_session, use_session_ready};

/// Snapshot of the shared session, copied into a signal after every operation.
#[derive(Clone, PartialEq, Default)]
struct SessionView {
    authenticated: bool,
    entries: Vec<DiaryEntry>,
    page: usize,
    epoch: u64,
}

impl SessionView {
    fn of(session: &DiarySession) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            entries: session.entries().to_vec(),
            page: session.current_page(),
            epoch: session.epoch(),
        }
    }
}

#[component]
pub fn Diary() -> Element {
    let session = use_session();
    let session_ready = use_session_ready();

    let mut view = use_signal(SessionView::default);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut registering = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Mirror the session once the startup restore has finished
    use_effect(move || {
        if session_ready() {
            spawn(async move {
                let shared = session();
                let guard = shared.read().await;
                view.set(SessionView::of(&guard));
            });
        }
    });

    let authenticate = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            let mode = if registering() {
                AuthMode::Register
            } else {
                AuthMode::Login
            };
            let shared = session();
            let mut guard = shared.write().await;
            match guard.authenticate(username().trim(), &password(), mode).await {
                Ok(()) => {
                    password.set(String::new());
                    view.set(SessionView::of(&guard));
                }
                Err(e) => {
                    tracing::warn!("diary authentication failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let save_entry = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        let epoch_at_click = view().epoch;
        spawn(async move {
            let shared = session();
            let mut guard = shared.write().await;
            if guard.epoch() != epoch_at_click {
                tracing::debug!("discarding save queued before the session changed");
            } else {
                match guard.add_entry(&draft()).await {
                    Ok(true) => {
                        draft.set(String::new());
                        view.set(SessionView::of(&guard));
                    }
                    Ok(false) => {}
                    Err(e) => tracing::warn!("failed to add diary entry: {e}"),
                }
            }
            busy.set(false);
        });
    };

    let delete_entry = move |entry_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        let epoch_at_click = view().epoch;
        spawn(async move {
            let shared = session();
            let mut guard = shared.write().await;
            if guard.epoch() != epoch_at_click {
                tracing::debug!("discarding delete queued before the session changed");
            } else {
                match guard.delete_entry(&entry_id).await {
                    Ok(true) => view.set(SessionView::of(&guard)),
                    Ok(false) => {}
                    Err(e) => tracing::warn!("failed to delete diary entry: {e}"),
                }
            }
            busy.set(false);
        });
    };

    let close_diary = move |_| {
        spawn(async move {
            let shared = session();
            let mut guard = shared.write().await;
            guard.logout();
            view.set(SessionView::of(&guard));
        });
    };

    let turn_page = move |forward: bool| {
        spawn(async move {
            let shared = session();
            let mut guard = shared.write().await;
            if forward {
                guard.next_page();
            } else {
                guard.prev_page();
            }
            view.set(SessionView::of(&guard));
        });
    };

    let today = Local::now().format("%A, %B %-d, %Y").to_string();
    let current = view();

    rsx! {
        Shell { current: TabLocation::Diary,
            if !session_ready() || busy() {
                div { class: "loading-veil", "Opening your diary..." }
            } else if !current.authenticated {
                LoginForm {
                    registering: registering(),
                    error: error(),
                    username,
                    password,
                    on_submit: authenticate,
                    on_toggle_mode: move |_| {
                        registering.set(!registering());
                        error.set(None);
                    },
                }
            } else {
                div {
                    div { class: "diary-toolbar",
                        p { class: "diary-count",
                            {entry_count_line(current.entries.len())}
                        }
                        button { class: "btn-script", onclick: close_diary, "Close Diary" }
                    }

                    form {
                        class: "diary-paper",
                        onsubmit: save_entry,
                        p { class: "diary-date", "{today}" }
                        textarea {
                            class: "diary-text",
                            placeholder: "Dear diary...",
                            value: "{draft}",
                            oninput: move |event| draft.set(event.value()),
                        }
                        button {
                            class: "btn-script",
                            r#type: "submit",
                            disabled: draft.read().trim().is_empty(),
                            "Save Entry"
                        }
                    }

                    if let Some(entry) = current.entries.get(current.page) {
                        EntryCard { entry: entry.clone(), on_delete: delete_entry }
                        div { class: "pager",
                            button {
                                class: "btn-ghost",
                                disabled: current.page == 0,
                                onclick: move |_| turn_page(false),
                                "← Older"
                            }
                            span { class: "pager-pos",
                                "{current.page + 1} of {current.entries.len()}"
                            }
                            button {
                                class: "btn-ghost",
                                disabled: current.page + 1 >= current.entries.len(),
                                onclick: move |_| turn_page(true),
                                "Newer →"
                            }
                        }
                    } else {
                        div { class: "empty-hint",
                            p { "Your diary is empty" }
                            p { "Write your first entry above" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LoginFormProps {
    registering: bool,
    error: Option<String>,
    username: Signal<String>,
    password: Signal<String>,
    on_submit: EventHandler<FormEvent>,
    on_toggle_mode: EventHandler<()>,
}

#[component]
fn LoginForm(props: LoginFormProps) -> Element {
    let mut username = props.username;
    let mut password = props.password;

    rsx! {
        div { class: "card diary-login",
            h2 { class: "diary-login-title",
                if props.registering { "Create Your Diary" } else { "Dear Diary..." }
            }
            if let Some(message) = props.error {
                p { class: "form-error", "{message}" }
            }
            form {
                onsubmit: move |event| props.on_submit.call(event),
                input {
                    class: "field-input",
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: "{username}",
                    oninput: move |event| username.set(event.value()),
                }
                input {
                    class: "field-input",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                }
                button {
                    class: "btn-primary",
                    style: "width: 100%; justify-content: center;",
                    r#type: "submit",
                    if props.registering { "Create Account" } else { "Login" }
                }
            }
            button {
                class: "btn-script",
                style: "width: 100%; margin-top: 1rem;",
                onclick: move |_| props.on_toggle_mode.call(()),
                if props.registering { "Already have a diary? Login" } else { "Create a new diary" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EntryCardProps {
    entry: DiaryEntry,
    on_delete: EventHandler<String>,
}

#[component]
fn EntryCard(props: EntryCardProps) -> Element {
    let entry = props.entry;
    let entry_id = entry.id.clone();
    let date_line = if entry.date.is_empty() {
        entry.title.clone()
    } else {
        display_date(&entry.date)
    };

    rsx! {
        article { class: "diary-paper",
            p { class: "diary-date", "{date_line}" }
            p { class: "diary-body", "{entry.content}" }
            button {
                class: "diary-delete",
                "aria-label": "Delete entry",
                onclick: move |_| props.on_delete.call(entry_id.clone()),
                "×"
            }
        }
    }
}

fn entry_count_line(count: usize) -> String {
    if count == 1 {
        "1 entry in your diary".to_string()
    } else {
        format!("{count} entries in your diary")
    }
}

/// Long-form date for display; the store's raw string is shown as-is when it
/// does not parse.
fn display_date(raw: &str) -> String {
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(raw) {
        return stamp.format("%A, %B %-d, %Y").to_string();
    }
    if let Ok(day) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.format("%A, %B %-d, %Y").to_string();
    }
    raw.to_string()
}
