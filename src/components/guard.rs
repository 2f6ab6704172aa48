use dioxus::prelude::*;

use crate::models::{Role, User};
use crate::routes::{home_route, Route};
use crate::session::session;
use crate::state;

/// Result of the mount-time session check. `checking` stays true until the
/// check resolves, so views can hold a loading state instead of flashing
/// content that is about to be redirected away.
#[derive(Clone, Copy)]
pub struct AuthGuard {
    pub user: Signal<Option<User>>,
    pub checking: Signal<bool>,
}

/// Runs once per view mount (it does not watch storage changes from other
/// tabs). Missing session goes to login; a signed-in user with the wrong
/// role is sent to their own home; an unrecognized role is signed out.
pub fn use_auth_guard(required: Option<Role>) -> AuthGuard {
    let nav = navigator();
    let mut user = use_signal(|| None::<User>);
    let mut checking = use_signal(|| true);

    use_effect(move || {
        let store = session();

        if !store.is_authenticated() {
            nav.replace(Route::Login {});
            return;
        }

        let Some(current) = store.user() else {
            state::clear_auth();
            nav.replace(Route::Login {});
            return;
        };

        if let Some(role) = required {
            if current.role != role {
                match home_route(current.role) {
                    Some(route) => {
                        nav.replace(route);
                    }
                    None => {
                        state::clear_auth();
                        nav.replace(Route::Login {});
                    }
                }
                return;
            }
        }

        user.set(Some(current));
        checking.set(false);
    });

    AuthGuard { user, checking }
}
