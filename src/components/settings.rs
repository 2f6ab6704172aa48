use dioxus::prelude::*;

use crate::api;
use crate::components::common::{Card, ErrorMessage, FormField, LoadingSpinner};
use crate::components::guard::use_auth_guard;
use crate::models::UpdateProfileRequest;
use crate::session::session;
use crate::state::{self, show_notification, NotificationType};

/// Account settings for any signed-in role: profile details and password.
#[component]
pub fn SettingsPage() -> Element {
    let guard = use_auth_guard(None);

    if *guard.checking.read() {
        return rsx! { LoadingSpinner {} };
    }

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-2xl font-bold", "Settings" }
            p { class: "text-sm text-muted-foreground", "Manage your account" }
        }

        div { class: "grid gap-6 lg:grid-cols-2",
            ProfileForm { guard_user: guard.user }
            ChangePasswordForm {}
        }
    }
}

#[component]
fn ProfileForm(guard_user: Signal<Option<crate::models::User>>) -> Element {
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut saving = use_signal(|| false);

    // Pre-fill from the cached profile once the session check resolves
    use_effect(move || {
        if let Some(user) = guard_user.read().as_ref() {
            full_name.set(user.full_name.clone());
            email.set(user.email.clone());
        }
    });

    // Then replace the cached values with the backend's copy
    use_effect(move || {
        spawn(async move {
            if let Ok(fresh) = api::auth::me().await {
                full_name.set(fresh.full_name.clone());
                email.set(fresh.email.clone());
            }
        });
    });

    let mut save = move |_| {
        if full_name().is_empty() || email().is_empty() {
            return;
        }

        saving.set(true);
        let request = UpdateProfileRequest {
            full_name: Some(full_name()),
            email: Some(email()),
        };

        spawn(async move {
            match api::auth::update_profile(request).await {
                Ok(updated) => {
                    // Keep the cached profile in step with the backend
                    session().save_user(&updated);
                    state::set_auth(updated);
                    show_notification("Profile updated", NotificationType::Success);
                }
                Err(e) => {
                    tracing::warn!("Failed to update profile: {}", e);
                    show_notification("Could not update profile", NotificationType::Error);
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        Card {
            h3 { class: "font-semibold mb-4", "Profile" }
            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    save(e);
                },

                FormField { label: "Full Name",
                    input {
                        class: "form-input",
                        r#type: "text",
                        required: true,
                        value: "{full_name}",
                        oninput: move |e| full_name.set(e.value()),
                    }
                }
                FormField { label: "Email",
                    input {
                        class: "form-input",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div { class: "mt-4 flex justify-end",
                    button {
                        class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:opacity-90 disabled:opacity-50",
                        r#type: "submit",
                        disabled: *saving.read(),
                        if *saving.read() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

#[component]
fn ChangePasswordForm() -> Element {
    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut changing = use_signal(|| false);

    let mut submit = move |_| {
        let old = old_password();
        let new = new_password();
        let confirm = confirm_password();

        error.set(None);

        if old.is_empty() || new.is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }
        if new != confirm {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        changing.set(true);
        spawn(async move {
            match api::auth::change_password(&old, &new).await {
                Ok(response) => {
                    show_notification(&response.detail, NotificationType::Success);
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => {
                    tracing::warn!("Failed to change password: {}", e);
                    error.set(Some("Could not change password".to_string()));
                }
            }
            changing.set(false);
        });
    };

    rsx! {
        Card {
            h3 { class: "font-semibold mb-4", "Change Password" }

            if let Some(err) = error.read().as_ref() {
                div { class: "mb-4",
                    ErrorMessage { message: "{err}" }
                }
            }

            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(e);
                },

                FormField { label: "Current Password",
                    input {
                        class: "form-input",
                        r#type: "password",
                        required: true,
                        value: "{old_password}",
                        oninput: move |e| old_password.set(e.value()),
                    }
                }
                FormField { label: "New Password",
                    input {
                        class: "form-input",
                        r#type: "password",
                        required: true,
                        value: "{new_password}",
                        oninput: move |e| new_password.set(e.value()),
                    }
                }
                FormField { label: "Confirm New Password",
                    input {
                        class: "form-input",
                        r#type: "password",
                        required: true,
                        value: "{confirm_password}",
                        oninput: move |e| confirm_password.set(e.value()),
                    }
                }

                div { class: "mt-4 flex justify-end",
                    button {
                        class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:opacity-90 disabled:opacity-50",
                        r#type: "submit",
                        disabled: *changing.read(),
                        if *changing.read() { "Updating..." } else { "Update Password" }
                    }
                }
            }
        }
    }
}
