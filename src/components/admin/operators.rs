use dioxus::prelude::*;

use crate::api;
use crate::components::common::{
    copy_to_clipboard, sleep_ms, Badge, Card, ConfirmDialog, EmptyState, FormField,
    LoadingSpinner, StatusIndicator,
};
use crate::components::guard::use_auth_guard;
use crate::models::{CreateOperatorRequest, Operator, Role, Station, UpdateOperatorRequest};
use crate::state::{show_notification, NotificationType};

/// The one-time password banner dismisses itself after this long.
const PASSWORD_BANNER_MS: u32 = 30_000;

#[component]
pub fn OperatorsPage() -> Element {
    let guard = use_auth_guard(Some(Role::Admin));
    let mut operators = use_signal(Vec::<Operator>::new);
    let mut stations = use_signal(Vec::<Station>::new);
    let mut is_loading = use_signal(|| true);
    let mut show_form = use_signal(|| false);
    let mut temp_password = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<Operator>);
    let mut reload = use_signal(|| 0u32);

    // Re-fetches the authoritative list whenever `reload` is bumped; a
    // create reply is never inserted into local state.
    use_effect(move || {
        let _ = reload();
        spawn(async move {
            is_loading.set(true);
            match api::operators::list().await {
                Ok(listing) => operators.set(listing.data),
                Err(e) => {
                    tracing::warn!("Failed to fetch operators: {}", e);
                    show_notification("Could not load operators", NotificationType::Error);
                }
            }
            is_loading.set(false);
        });
    });

    // Station choices for the create form
    use_effect(move || {
        spawn(async move {
            if let Ok(list) = api::stations::list().await {
                stations.set(list);
            }
        });
    });

    if *guard.checking.read() {
        return rsx! { LoadingSpinner {} };
    }

    let operator_count = operators.read().len();

    let delete_dialog = pending_delete().map(|operator| {
        let operator_id = operator.id.clone();
        rsx! {
            // Declining leaves the list untouched and issues no request
            ConfirmDialog {
                message: "Are you sure you want to delete {operator.full_name}?",
                confirm_label: "Delete",
                on_confirm: move |_| {
                    let id = operator_id.clone();
                    pending_delete.set(None);
                    spawn(async move {
                        if let Err(e) = api::operators::delete(&id).await {
                            tracing::warn!("Failed to delete operator: {}", e);
                            show_notification("Could not delete operator", NotificationType::Error);
                        }
                        reload += 1;
                    });
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    });

    rsx! {
        div { class: "mb-6 flex items-center justify-between",
            div { class: "flex items-center gap-3",
                h1 { class: "text-2xl font-bold", "Operators" }
                Badge { text: "{operator_count}" }
            }
            button {
                class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:opacity-90",
                onclick: move |_| show_form.set(!show_form()),
                "+ Add Operator"
            }
        }

        // The banner is keyed by password so a reset while one is showing
        // restarts the countdown with the new value
        if let Some(password) = temp_password() {
            TempPasswordBanner {
                key: "{password}",
                password: password.clone(),
                on_dismiss: move |_| temp_password.set(None),
            }
        }

        if show_form() {
            NewOperatorForm {
                stations: stations(),
                on_created: move |password| {
                    temp_password.set(Some(password));
                    show_form.set(false);
                    reload += 1;
                },
                on_cancel: move |_| show_form.set(false),
            }
        }

        if *is_loading.read() {
            LoadingSpinner {}
        } else if operators.read().is_empty() {
            Card {
                EmptyState {
                    icon: "\u{1F465}",
                    title: "No operators yet",
                    subtitle: "Create your first operator to get started",
                }
            }
        } else {
            Card {
                table { class: "w-full text-left text-sm",
                    thead {
                        tr { class: "border-b text-muted-foreground",
                            th { class: "py-2 pr-4", "Name" }
                            th { class: "py-2 pr-4", "Contact" }
                            th { class: "py-2 pr-4", "Station" }
                            th { class: "py-2 pr-4", "Status" }
                            th { class: "py-2 text-right", "Actions" }
                        }
                    }
                    tbody {
                        for operator in operators() {
                            OperatorRow {
                                key: "{operator.id}",
                                operator: operator.clone(),
                                on_toggle: move |op: Operator| {
                                    spawn(async move {
                                        let request = UpdateOperatorRequest {
                                            is_active: Some(!op.is_active),
                                            ..Default::default()
                                        };
                                        if let Err(e) = api::operators::update(&op.id, request).await {
                                            tracing::warn!("Failed to update operator: {}", e);
                                            show_notification(
                                                "Could not update operator",
                                                NotificationType::Error,
                                            );
                                        }
                                        reload += 1;
                                    });
                                },
                                on_reset: move |id: String| {
                                    spawn(async move {
                                        match api::operators::reset_password(&id).await {
                                            Ok(response) => {
                                                temp_password.set(Some(response.temporary_password));
                                            }
                                            Err(e) => {
                                                tracing::warn!("Failed to reset password: {}", e);
                                                show_notification(
                                                    "Could not reset password",
                                                    NotificationType::Error,
                                                );
                                            }
                                        }
                                    });
                                },
                                on_delete: move |operator| pending_delete.set(Some(operator)),
                            }
                        }
                    }
                }
            }
        }

        {delete_dialog}
    }
}

#[component]
fn OperatorRow(
    operator: Operator,
    on_toggle: EventHandler<Operator>,
    on_reset: EventHandler<String>,
    on_delete: EventHandler<Operator>,
) -> Element {
    let reset_id = operator.id.clone();
    let toggled = operator.clone();
    let deleted = operator.clone();
    let station_name = operator.station.as_ref().map(|s| s.name.clone());

    rsx! {
        tr { class: "border-b last:border-0",
            td { class: "py-3 pr-4 font-medium", "{operator.full_name}" }
            td { class: "py-3 pr-4",
                div { class: "text-sm", "{operator.email}" }
                div { class: "text-xs text-muted-foreground", "{operator.phone}" }
            }
            td { class: "py-3 pr-4",
                if let Some(name) = station_name {
                    "{name}"
                } else {
                    span { class: "text-muted-foreground", "Unassigned" }
                }
            }
            td { class: "py-3 pr-4",
                StatusIndicator { active: operator.is_active }
            }
            td { class: "py-3 text-right",
                div { class: "flex items-center justify-end gap-2",
                    button {
                        class: "px-3 py-1 border border-border rounded text-xs hover:bg-muted",
                        onclick: move |_| on_toggle.call(toggled.clone()),
                        if operator.is_active { "Deactivate" } else { "Activate" }
                    }
                    button {
                        class: "px-3 py-1 border border-border rounded text-xs hover:bg-muted",
                        onclick: move |_| on_reset.call(reset_id.clone()),
                        "\u{1F511} Reset Password"
                    }
                    button {
                        class: "px-3 py-1 bg-red-600 text-white rounded text-xs hover:bg-red-700",
                        onclick: move |_| on_delete.call(deleted.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Shows the server-generated one-time password. It exists only in this
/// component's state and is keyed by value from the parent, so the scoped
/// dismiss timer dies with the banner.
#[component]
fn TempPasswordBanner(password: String, on_dismiss: EventHandler<()>) -> Element {
    let mut copied = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            sleep_ms(PASSWORD_BANNER_MS).await;
            on_dismiss.call(());
        });
    });

    let copy = {
        let password = password.clone();
        move |_| {
            copy_to_clipboard(&password);
            copied.set(true);
            spawn(async move {
                sleep_ms(2000).await;
                copied.set(false);
            });
        }
    };

    rsx! {
        div { class: "mb-6 flex items-center gap-3 rounded-lg border border-amber-400 bg-amber-50 px-4 py-3",
            span { class: "text-xl", "\u{1F511}" }
            div { class: "flex-1",
                p { class: "font-semibold", "Temporary Password" }
                p { class: "text-sm text-muted-foreground",
                    "Shown once. Share it with the operator now."
                }
            }
            code { class: "rounded bg-amber-100 px-2 py-1 font-mono text-sm font-bold",
                "{password}"
            }
            button {
                class: "px-3 py-1 border border-border rounded text-xs hover:bg-amber-100",
                onclick: copy,
                if copied() { "\u{2714} Copied" } else { "Copy" }
            }
            button {
                class: "ml-2 text-muted-foreground hover:text-foreground",
                onclick: move |_| on_dismiss.call(()),
                "\u{2715}"
            }
        }
    }
}

#[component]
fn NewOperatorForm(
    stations: Vec<Station>,
    on_created: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut full_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut station_id = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let mut submit = move |_| {
        if full_name().is_empty() || station_id().is_empty() {
            return;
        }

        submitting.set(true);
        let request = CreateOperatorRequest {
            full_name: full_name(),
            phone: phone(),
            email: email(),
            station_id: station_id(),
        };

        spawn(async move {
            match api::operators::create(request).await {
                Ok(response) => on_created.call(response.temporary_password),
                Err(e) => {
                    tracing::warn!("Failed to create operator: {}", e);
                    show_notification("Could not create operator", NotificationType::Error);
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Card { class: "mb-6",
            h3 { class: "font-semibold mb-4", "New Operator" }
            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(e);
                },

                div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
                    FormField { label: "Full Name",
                        input {
                            class: "form-input",
                            r#type: "text",
                            required: true,
                            value: "{full_name}",
                            oninput: move |e| full_name.set(e.value()),
                        }
                    }
                    FormField { label: "Phone",
                        input {
                            class: "form-input",
                            r#type: "text",
                            required: true,
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
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
                    FormField { label: "Station",
                        select {
                            class: "form-input",
                            value: "{station_id}",
                            onchange: move |e| station_id.set(e.value()),
                            option { value: "", disabled: true, "Select a station" }
                            for station in stations.iter() {
                                option {
                                    value: "{station.id}",
                                    "{station.name} ({station.station_type.display_name()})"
                                }
                            }
                        }
                    }
                }

                div { class: "mt-4 flex justify-end gap-2",
                    button {
                        class: "px-4 py-2 text-muted-foreground hover:bg-muted rounded-lg",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:opacity-90 disabled:opacity-50",
                        r#type: "submit",
                        disabled: *submitting.read(),
                        if *submitting.read() { "Creating..." } else { "Create Operator" }
                    }
                }
            }
        }
    }
}
