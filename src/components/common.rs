use dioxus::prelude::*;

use crate::state::{clear_notification, NotificationType, UI_STATE};

/// Timer shared by the toast, the password banner and the dashboard clock.
pub(crate) async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        // Fire and forget; the UI only tracks that a copy was requested
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn copy_to_clipboard(_text: &str) {}

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "flex items-center justify-center p-4",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-primary" }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded",
            p { "{message}" }
        }
    }
}

#[component]
pub fn Card(children: Element, #[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div { class: "bg-card rounded-lg shadow-md p-4 {class}",
            {children}
        }
    }
}

#[component]
pub fn Badge(
    text: String,
    #[props(default = "bg-gray-100 text-gray-800".to_string())] color_class: String,
) -> Element {
    rsx! {
        span { class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {color_class}",
            "{text}"
        }
    }
}

/// Pulsing dot plus label for is_active flags.
#[component]
pub fn StatusIndicator(active: bool) -> Element {
    rsx! {
        div { class: "flex items-center gap-1.5",
            span {
                class: if active { "h-2 w-2 rounded-full bg-green-500 animate-pulse" } else { "h-2 w-2 rounded-full bg-gray-400" },
            }
            span { class: "text-sm", if active { "Active" } else { "Inactive" } }
        }
    }
}

#[component]
pub fn FormField(label: String, children: Element) -> Element {
    rsx! {
        div { class: "space-y-2",
            label { class: "block text-sm font-medium text-muted-foreground", "{label}" }
            {children}
        }
    }
}

#[component]
pub fn EmptyState(icon: String, title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-16 text-center",
            span { class: "text-5xl mb-4", "{icon}" }
            p { class: "text-lg font-medium", "{title}" }
            p { class: "text-sm text-muted-foreground", "{subtitle}" }
        }
    }
}

/// In-app replacement for the browser confirm prompt. Declining only calls
/// on_cancel; the caller must not issue the request in that case.
#[component]
pub fn ConfirmDialog(
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            div { class: "bg-card rounded-lg p-6 w-full max-w-sm shadow-xl",
                p { class: "mb-6", "{message}" }
                div { class: "flex justify-end gap-2",
                    button {
                        class: "px-4 py-2 text-muted-foreground hover:bg-muted rounded-lg",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    // Auto-dismiss after 4 seconds
    {
        let has_notification = notification.is_some();
        use_effect(move || {
            if has_notification {
                spawn(async move {
                    sleep_ms(4000).await;
                    clear_notification();
                });
            }
        });
    }

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        let icon = match notif.notification_type {
            NotificationType::Success => "\u{2705}",
            NotificationType::Error => "\u{274C}",
            NotificationType::Info => "\u{2139}",
        };
        rsx! {
            div {
                class: "fixed top-4 right-4 z-50 {color_class} text-white px-6 py-4 rounded-lg shadow-xl max-w-sm animate-slide-in",
                div { class: "flex items-start gap-3",
                    span { class: "text-xl flex-shrink-0", "{icon}" }
                    div { class: "flex-1",
                        p { class: "font-medium", "{notif.message}" }
                    }
                    button {
                        class: "ml-2 text-white hover:text-gray-200 flex-shrink-0",
                        onclick: move |_| clear_notification(),
                        "\u{2715}"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
