use dioxus::prelude::*;

use crate::api;
use crate::routes::Route;

#[derive(Clone, Copy, PartialEq)]
enum PingStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Public landing/status page: pings the backend health endpoint on demand
/// and pretty-prints whatever JSON it answers with.
#[component]
pub fn HealthPage() -> Element {
    let mut status = use_signal(|| PingStatus::Idle);
    let mut response = use_signal(String::new);

    let ping = move |_| {
        status.set(PingStatus::Loading);
        spawn(async move {
            match api::health::ping().await {
                Ok(payload) => {
                    response.set(serde_json::to_string_pretty(&payload).unwrap_or_default());
                    status.set(PingStatus::Success);
                }
                Err(e) => {
                    tracing::warn!("Health check failed: {}", e);
                    response.set("Could not reach backend".to_string());
                    status.set(PingStatus::Error);
                }
            }
        });
    };

    let backend_label = match status() {
        PingStatus::Success => "\u{2713} Alive",
        PingStatus::Error => "\u{2717} Down",
        _ => "...",
    };
    let backend_class = match status() {
        PingStatus::Success => "text-green-500",
        PingStatus::Error => "text-red-500",
        _ => "text-muted-foreground",
    };

    rsx! {
        main { class: "relative min-h-screen flex flex-col items-center justify-center bg-background p-6",
            Link {
                to: Route::Login {},
                class: "absolute top-6 left-6 rounded-lg border border-border bg-card px-4 py-2 font-medium hover:bg-muted",
                "\u{2190} Back to login"
            }

            div { class: "mb-6 flex items-center gap-2 rounded-full border border-primary bg-card px-4 py-2",
                span { class: "h-2 w-2 rounded-full bg-primary animate-pulse" }
                span { class: "text-sm font-medium text-primary", "System Online" }
            }

            h1 { class: "text-5xl font-bold mb-2", "ERAS Dashboard" }
            p { class: "text-muted-foreground text-lg mb-10", "Emergency Report and Alert System" }

            div { class: "mb-10 flex gap-4",
                div { class: "rounded-xl border border-border bg-card px-8 py-6 text-center",
                    p { class: "text-2xl font-bold text-green-500", "\u{2713} Alive" }
                    p { class: "text-muted-foreground text-sm mt-1", "Dashboard" }
                }
                div { class: "rounded-xl border border-border bg-card px-8 py-6 text-center",
                    p { class: "text-2xl font-bold {backend_class}", "{backend_label}" }
                    p { class: "text-muted-foreground text-sm mt-1", "Backend" }
                }
            }

            button {
                class: "bg-primary text-primary-foreground hover:opacity-90 disabled:opacity-50 font-semibold px-8 py-3 rounded-lg",
                disabled: status() == PingStatus::Loading,
                onclick: ping,
                if status() == PingStatus::Loading { "Pinging..." } else { "Ping Backend" }
            }

            if !response.read().is_empty() {
                pre { class: "mt-6 max-w-lg overflow-auto rounded-xl border border-border bg-card p-4 text-sm",
                    "{response}"
                }
            }

            p { class: "text-muted-foreground text-xs mt-10",
                "ERAS \u{2014} Adama Science and Technology University"
            }
        }
    }
}
