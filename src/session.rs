use leptos::prelude::*;

use crate::commands::Session;

/// The signed-in user, shared with every page.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: ReadSignal<Option<Session>>,
    pub set_session: WriteSignal<Option<Session>>,
}

impl SessionContext {
    pub fn signed_in(&self) -> bool {
        self.session.with(|s| s.is_some())
    }
}

/// Interface language code, persisted as the `language` preference.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: ReadSignal<String>,
    pub set_language: WriteSignal<String>,
}

pub const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("es", "Español"), ("fr", "Français")];

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
