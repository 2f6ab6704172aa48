use dioxus::prelude::*;

use crate::api;
use crate::components::common::{
    Badge, Card, ConfirmDialog, EmptyState, FormField, LoadingSpinner, StatusIndicator,
};
use crate::components::guard::use_auth_guard;
use crate::models::{CreateStationRequest, Role, Station, StationType};
use crate::state::{show_notification, NotificationType};

#[component]
pub fn StationsPage() -> Element {
    let guard = use_auth_guard(Some(Role::Admin));
    let mut stations = use_signal(Vec::<Station>::new);
    let mut is_loading = use_signal(|| true);
    let mut show_form = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<Station>);
    let mut reload = use_signal(|| 0u32);

    // Re-fetches the authoritative list whenever `reload` is bumped; local
    // state is never mutated from a create/delete payload.
    use_effect(move || {
        let _ = reload();
        spawn(async move {
            is_loading.set(true);
            match api::stations::list().await {
                Ok(list) => stations.set(list),
                Err(e) => {
                    tracing::warn!("Failed to fetch stations: {}", e);
                    show_notification("Could not load stations", NotificationType::Error);
                }
            }
            is_loading.set(false);
        });
    });

    if *guard.checking.read() {
        return rsx! { LoadingSpinner {} };
    }

    let station_count = stations.read().len();

    let delete_dialog = pending_delete().map(|station| {
        let station_id = station.id.clone();
        rsx! {
            // Declining leaves the list untouched and issues no request
            ConfirmDialog {
                message: "Are you sure you want to delete {station.name}?",
                confirm_label: "Delete",
                on_confirm: move |_| {
                    let id = station_id.clone();
                    pending_delete.set(None);
                    spawn(async move {
                        if let Err(e) = api::stations::delete(&id).await {
                            tracing::warn!("Failed to delete station: {}", e);
                            show_notification("Could not delete station", NotificationType::Error);
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
                h1 { class: "text-2xl font-bold", "Stations" }
                Badge { text: "{station_count}" }
            }
            button {
                class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:opacity-90",
                onclick: move |_| show_form.set(!show_form()),
                "+ Add Station"
            }
        }

        if show_form() {
            NewStationForm {
                on_saved: move |_| {
                    show_form.set(false);
                    reload += 1;
                },
                on_cancel: move |_| show_form.set(false),
            }
        }

        if *is_loading.read() {
            LoadingSpinner {}
        } else if stations.read().is_empty() {
            Card {
                EmptyState {
                    icon: "\u{1F3E2}",
                    title: "No stations yet",
                    subtitle: "Create your first station to get started",
                }
            }
        } else {
            Card {
                table { class: "w-full text-left text-sm",
                    thead {
                        tr { class: "border-b text-muted-foreground",
                            th { class: "py-2 pr-4", "Name" }
                            th { class: "py-2 pr-4", "Type" }
                            th { class: "py-2 pr-4", "City" }
                            th { class: "py-2 pr-4", "Phone" }
                            th { class: "py-2 pr-4", "Capacity" }
                            th { class: "py-2 pr-4", "Status" }
                            th { class: "py-2 text-right", "Actions" }
                        }
                    }
                    tbody {
                        for station in stations() {
                            StationRow {
                                key: "{station.id}",
                                station: station.clone(),
                                on_delete: move |station| pending_delete.set(Some(station)),
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
fn StationRow(station: Station, on_delete: EventHandler<Station>) -> Element {
    let deleted = station.clone();

    rsx! {
        tr { class: "border-b last:border-0",
            td { class: "py-3 pr-4 font-medium", "{station.name}" }
            td { class: "py-3 pr-4",
                Badge {
                    text: station.station_type.display_name().to_string(),
                    color_class: station.station_type.badge_class().to_string(),
                }
            }
            td { class: "py-3 pr-4", "{station.city}" }
            td { class: "py-3 pr-4", "{station.phone}" }
            td { class: "py-3 pr-4 font-mono", "{station.capacity}" }
            td { class: "py-3 pr-4",
                StatusIndicator { active: station.is_active }
            }
            td { class: "py-3 text-right",
                button {
                    class: "px-3 py-1 bg-red-600 text-white rounded text-xs hover:bg-red-700",
                    onclick: move |_| on_delete.call(deleted.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn NewStationForm(on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut station_type = use_signal(|| StationType::Police);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut latitude = use_signal(String::new);
    let mut longitude = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let mut submit = move |_| {
        if name().is_empty() {
            return;
        }

        submitting.set(true);
        let request = CreateStationRequest {
            name: name(),
            station_type: station_type(),
            phone: phone(),
            email: email(),
            address: address(),
            city: city(),
            // Lenient input policy: unparseable numbers fall back to zero
            // instead of blocking submission
            latitude: latitude().trim().parse().unwrap_or(0.0),
            longitude: longitude().trim().parse().unwrap_or(0.0),
            capacity: capacity().trim().parse().unwrap_or(0),
        };

        spawn(async move {
            match api::stations::create(request).await {
                Ok(_) => on_saved.call(()),
                Err(e) => {
                    tracing::warn!("Failed to create station: {}", e);
                    show_notification("Could not create station", NotificationType::Error);
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Card { class: "mb-6",
            h3 { class: "font-semibold mb-4", "New Station" }
            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(e);
                },

                div { class: "grid grid-cols-1 gap-4 md:grid-cols-3",
                    FormField { label: "Name",
                        input {
                            class: "form-input",
                            r#type: "text",
                            required: true,
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    FormField { label: "Type",
                        select {
                            class: "form-input",
                            value: "{station_type().as_str()}",
                            onchange: move |e| station_type.set(match e.value().as_str() {
                                "medical" => StationType::Medical,
                                "fire" => StationType::Fire,
                                _ => StationType::Police,
                            }),
                            option { value: "police", "Police" }
                            option { value: "medical", "Medical" }
                            option { value: "fire", "Fire" }
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
                    FormField { label: "Address",
                        input {
                            class: "form-input",
                            r#type: "text",
                            required: true,
                            value: "{address}",
                            oninput: move |e| address.set(e.value()),
                        }
                    }
                    FormField { label: "City",
                        input {
                            class: "form-input",
                            r#type: "text",
                            required: true,
                            value: "{city}",
                            oninput: move |e| city.set(e.value()),
                        }
                    }
                    FormField { label: "Latitude",
                        input {
                            class: "form-input",
                            r#type: "number",
                            step: "any",
                            required: true,
                            value: "{latitude}",
                            oninput: move |e| latitude.set(e.value()),
                        }
                    }
                    FormField { label: "Longitude",
                        input {
                            class: "form-input",
                            r#type: "number",
                            step: "any",
                            required: true,
                            value: "{longitude}",
                            oninput: move |e| longitude.set(e.value()),
                        }
                    }
                    FormField { label: "Capacity",
                        input {
                            class: "form-input",
                            r#type: "number",
                            required: true,
                            value: "{capacity}",
                            oninput: move |e| capacity.set(e.value()),
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
                        if *submitting.read() { "Creating..." } else { "Create Station" }
                    }
                }
            }
        }
    }
}
