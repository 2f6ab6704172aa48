use chrono::Local;
use dioxus::prelude::*;

use crate::api;
use crate::components::common::{Badge, Card, EmptyState, ErrorMessage, LoadingSpinner};
use crate::components::guard::use_auth_guard;
use crate::models::{OperatorDashboardData, Role};

#[component]
pub fn OperatorDashboard() -> Element {
    let guard = use_auth_guard(Some(Role::Operator));
    let mut data = use_signal(|| None::<OperatorDashboardData>);
    let mut is_loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::dashboard::operator().await {
                Ok(snapshot) => data.set(Some(snapshot)),
                Err(e) => tracing::warn!("Failed to fetch operator dashboard: {}", e),
            }
            is_loading.set(false);
        });
    });

    if *guard.checking.read() || *is_loading.read() {
        return rsx! { LoadingSpinner {} };
    }

    let greeting_name = guard
        .user
        .read()
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_else(|| "Operator".to_string());
    let today = Local::now().format("%A, %B %e, %Y").to_string();
    let snapshot = data.read().clone();

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-2xl font-bold", "Welcome back, {greeting_name}" }
            p { class: "text-sm text-muted-foreground", "{today}" }
        }

        if let Some(snapshot) = snapshot {
            if let Some(station) = &snapshot.my_station {
                Card { class: "mb-6 border-l-4",
                    div { class: "flex items-center gap-4 p-2",
                        span {
                            class: "text-4xl",
                            style: "color: {station.station_type.color_var()}",
                            "\u{1F6A8}"
                        }
                        div {
                            h2 { class: "text-xl font-bold", "{station.name}" }
                            Badge {
                                text: station.station_type.display_name().to_string(),
                                color_class: station.station_type.badge_class().to_string(),
                            }
                        }
                    }
                }
            }

            div { class: "mb-6 grid grid-cols-2 gap-4",
                Card {
                    div { class: "flex items-center gap-4",
                        span { class: "flex h-10 w-10 shrink-0 items-center justify-center rounded-lg bg-muted text-xl",
                            "\u{26A0}"
                        }
                        div {
                            p { class: "font-mono text-2xl font-semibold", "{snapshot.pending_incidents}" }
                            p { class: "text-xs text-muted-foreground", "Pending Incidents" }
                        }
                    }
                }
                Card {
                    div { class: "flex items-center gap-4",
                        span { class: "flex h-10 w-10 shrink-0 items-center justify-center rounded-lg bg-muted text-xl",
                            "\u{1F551}"
                        }
                        div {
                            p { class: "font-mono text-2xl font-semibold", "{snapshot.total_incidents_today}" }
                            p { class: "text-xs text-muted-foreground", "Total Incidents Today" }
                        }
                    }
                }
            }

            Card {
                h3 { class: "font-semibold mb-4", "Recent Incidents" }
                if snapshot.recent_incidents.is_empty() {
                    EmptyState {
                        icon: "\u{2705}",
                        title: "All clear",
                        subtitle: "No incidents assigned",
                    }
                } else {
                    table { class: "w-full text-left text-sm",
                        thead {
                            tr { class: "border-b text-muted-foreground",
                                th { class: "py-2 pr-4", "Type" }
                                th { class: "py-2 pr-4", "Location" }
                                th { class: "py-2 pr-4", "Status" }
                                th { class: "py-2", "Time" }
                            }
                        }
                        tbody {
                            for incident in snapshot.recent_incidents.iter() {
                                tr { class: "border-b last:border-0",
                                    td { class: "py-3 pr-4 font-medium", "{incident.incident_type}" }
                                    td { class: "py-3 pr-4", "{incident.location}" }
                                    td { class: "py-3 pr-4",
                                        Badge { text: "{incident.status}" }
                                    }
                                    td { class: "py-3 text-muted-foreground", "{incident.time}" }
                                }
                            }
                        }
                    }
                }
            }
        } else {
            ErrorMessage { message: "Could not load dashboard data" }
        }
    }
}
