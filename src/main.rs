//! ERAS Command Center
//!
//! Administrative dashboard for the Emergency Report and Alert System:
//! role-scoped views for admins and station operators, backed entirely by
//! the remote ERAS backend over HTTP.
//!
//! Builds for the web by default; the `desktop` feature wraps the same UI
//! in a native webview.

mod api;
mod components;
mod models;
mod routes;
mod session;
mod state;

use dioxus::prelude::*;

use components::common::{Badge, Notification};
use models::Role;
use routes::{home_route, Route};
use state::AUTH_STATE;

const DEFAULT_API_URL: &str = "https://eras-backend.onrender.com";

fn main() {
    // On wasm, just run the app
    #[cfg(target_arch = "wasm32")]
    {
        run_app();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("eras_dashboard=info".parse().unwrap()),
            )
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        run_app();
    }
}

fn run_app() {
    #[cfg(target_arch = "wasm32")]
    let api_url = option_env!("ERAS_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string();

    #[cfg(not(target_arch = "wasm32"))]
    let api_url =
        std::env::var("ERAS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    // The browser build persists the session across reloads; the desktop
    // build keeps it for the lifetime of the process.
    #[cfg(target_arch = "wasm32")]
    let store = session::SessionStore::browser();

    #[cfg(not(target_arch = "wasm32"))]
    let store = session::SessionStore::in_memory();

    session::init_session(store.clone());
    api::init_api_client(&api_url, store);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| {
        state::restore_auth();
        // A 401 anywhere wipes the session; mirroring that into the global
        // signal routes the UI back to the login view.
        api::api_client().set_unauthorized_hook(|| state::clear_auth());
    });

    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        Router::<Route> {}
    }
}

/// Shell around all authenticated routes: role-aware sidebar plus the
/// routed page.
#[component]
pub fn AppLayout() -> Element {
    let nav = navigator();
    let authenticated = AUTH_STATE.read().is_authenticated();

    use_effect(move || {
        if !AUTH_STATE.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        div { class: "flex min-h-screen bg-background",
            Sidebar {}

            main { class: "flex-1 overflow-auto p-6",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let nav = navigator();
    let current_route = use_route::<Route>();
    let auth = AUTH_STATE.read();

    let Some(user) = auth.user.clone() else {
        return rsx! {};
    };

    let links: Vec<(Route, &str, &str)> = match user.role {
        Role::Admin => vec![
            (Route::Admin {}, "Dashboard", "\u{1F4CA}"),
            (Route::Stations {}, "Stations", "\u{1F3E2}"),
            (Route::Operators {}, "Operators", "\u{1F465}"),
            (Route::Settings {}, "Settings", "\u{2699}"),
        ],
        _ => vec![
            (Route::Operator {}, "Dashboard", "\u{1F4CA}"),
            (Route::Settings {}, "Settings", "\u{2699}"),
        ],
    };

    let logout = move |_| {
        state::clear_auth();
        nav.replace(Route::Login {});
    };

    rsx! {
        aside { class: "sidebar flex h-screen w-64 flex-col",
            div { class: "flex items-center gap-3 px-6 py-6",
                span { class: "text-3xl", "\u{1F6E1}" }
                div {
                    h1 { class: "text-lg font-bold tracking-tight", "ERAS" }
                    p { class: "text-xs opacity-60", "Command Center" }
                }
            }

            div { class: "px-6 pb-4",
                Badge {
                    text: user.role.display_name().to_string(),
                    color_class: "bg-primary text-primary-foreground".to_string(),
                }
            }

            nav { class: "flex-1 space-y-1 px-3",
                for (route, label, icon) in links.iter() {
                    Link {
                        to: route.clone(),
                        class: if current_route == *route {
                            "flex items-center gap-3 rounded-md px-3 py-2.5 text-sm font-medium bg-white/10 border-l-2 border-primary"
                        } else {
                            "flex items-center gap-3 rounded-md px-3 py-2.5 text-sm font-medium opacity-70 hover:bg-white/5 hover:opacity-100"
                        },
                        span { "{icon}" }
                        span { "{label}" }
                    }
                }
            }

            div { class: "px-4 pb-6",
                div { class: "flex items-center gap-3 border-t border-white/10 pt-4",
                    div { class: "flex h-9 w-9 items-center justify-center rounded-full bg-white/10 text-xs font-medium",
                        "{user.initials()}"
                    }
                    div { class: "flex-1 truncate",
                        p { class: "truncate text-sm font-medium", "{user.full_name}" }
                    }
                    button {
                        class: "h-8 w-8 rounded opacity-60 hover:bg-white/10 hover:opacity-100",
                        onclick: logout,
                        "\u{23FB}"
                    }
                }
            }
        }
    }
}

#[component]
fn LoginPage() -> Element {
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let mut login = move |_| {
        let user = username();
        let pass = password();

        if user.is_empty() || pass.is_empty() {
            error.set(Some("Please enter your phone/email and password".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match api::auth::login(&user, &pass).await {
                Ok(response) => {
                    let role = response.role;
                    match home_route(role) {
                        Some(route) => {
                            state::set_auth(response.into_user());
                            nav.push(route);
                        }
                        None => {
                            // Only staff roles get a dashboard
                            state::clear_auth();
                            error.set(Some("Citizens cannot access the dashboard.".to_string()));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some("Invalid credentials. Please try again.".to_string()));
                }
            }
            is_loading.set(false);
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-background",
            div { class: "bg-card rounded-lg shadow-lg p-8 w-full max-w-md",
                div { class: "text-center mb-8",
                    span { class: "text-5xl", "\u{1F6E1}" }
                    h1 { class: "text-2xl font-bold mt-4", "Welcome back" }
                    p { class: "text-muted-foreground", "Sign in to continue to the command center" }
                }

                if let Some(err) = error.read().as_ref() {
                    div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4",
                        "{err}"
                    }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        login(e);
                    },

                    div { class: "mb-4",
                        label { class: "block text-sm font-medium text-muted-foreground mb-1", "Phone or Email" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Enter your phone or email",
                            required: true,
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }

                    div { class: "mb-6",
                        label { class: "block text-sm font-medium text-muted-foreground mb-1", "Password" }
                        div { class: "relative",
                            input {
                                class: "form-input pr-10",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Enter your password",
                                required: true,
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                            button {
                                class: "absolute right-3 top-1/2 -translate-y-1/2 text-muted-foreground hover:text-foreground",
                                r#type: "button",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() { "\u{1F648}" } else { "\u{1F441}" }
                            }
                        }
                    }

                    button {
                        class: "w-full py-3 bg-primary text-primary-foreground rounded-lg hover:opacity-90 font-medium disabled:opacity-50",
                        r#type: "submit",
                        disabled: *is_loading.read(),
                        if *is_loading.read() { "Signing in..." } else { "Sign In" }
                    }
                }

                p { class: "mt-8 text-center text-xs text-muted-foreground", "Authorized Personnel Only" }
            }
        }
    }
}
