use dioxus::prelude::*;

use crate::models::User;
use crate::session::session;

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

#[derive(Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub fn set_auth(user: User) {
    AUTH_STATE.write().user = Some(user);
}

/// Re-hydrate the signal from the persisted session at startup, so a page
/// reload keeps the user signed in.
pub fn restore_auth() {
    let store = session();
    if store.is_authenticated() {
        if let Some(user) = store.user() {
            AUTH_STATE.write().user = Some(user);
        }
    }
}

/// Single logout path: wipes the persisted session and the signal. Also
/// wired as the API client's unauthorized hook, so an expired token on any
/// call lands the UI back on the login view.
pub fn clear_auth() {
    session().clear();
    AUTH_STATE.write().user = None;
}
