use chrono::Local;
use dioxus::prelude::*;

use crate::api;
use crate::components::common::{sleep_ms, Card, ErrorMessage, LoadingSpinner};
use crate::components::guard::use_auth_guard;
use crate::models::{AdminDashboardData, Role, StationType};
use crate::routes::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let guard = use_auth_guard(Some(Role::Admin));
    let mut data = use_signal(|| None::<AdminDashboardData>);
    let mut is_loading = use_signal(|| true);
    let mut clock = use_signal(Local::now);

    // Fresh aggregate snapshot on every mount; nothing is cached
    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::dashboard::admin().await {
                Ok(snapshot) => data.set(Some(snapshot)),
                Err(e) => tracing::warn!("Failed to fetch admin dashboard: {}", e),
            }
            is_loading.set(false);
        });
    });

    // Decorative wall clock; it never triggers a re-fetch. The task is
    // scoped to the component and dies on unmount.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep_ms(1000).await;
                clock.set(Local::now());
            }
        });
    });

    if *guard.checking.read() {
        return rsx! { LoadingSpinner {} };
    }

    let time_label = clock().format("%H:%M:%S").to_string();
    let date_label = clock().format("%A, %B %e, %Y").to_string();
    let snapshot = data.read().clone();

    rsx! {
        div { class: "mb-6 flex items-center justify-between",
            div {
                h1 { class: "text-2xl font-bold", "Admin Dashboard" }
                p { class: "text-sm text-muted-foreground", "System overview and quick actions" }
            }
            div { class: "text-right",
                p { class: "font-mono text-sm font-medium", "{time_label}" }
                p { class: "text-xs text-muted-foreground", "{date_label}" }
            }
        }

        if *is_loading.read() {
            LoadingSpinner {}
        } else if let Some(snapshot) = snapshot {
            div { class: "mb-6 grid grid-cols-2 gap-4 lg:grid-cols-5",
                StatCard { title: "Total Stations", value: snapshot.total_stations, icon: "\u{1F3E2}" }
                StatCard { title: "Active Stations", value: snapshot.active_stations, icon: "\u{2705}" }
                StatCard { title: "Total Operators", value: snapshot.total_operators, icon: "\u{1F465}" }
                StatCard { title: "Active Operators", value: snapshot.active_operators, icon: "\u{1F4C8}" }
                StatCard { title: "Total Citizens", value: snapshot.total_citizens, icon: "\u{1F6E1}" }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                Card {
                    h3 { class: "font-semibold mb-4", "\u{1F6A8} Stations by Type" }
                    div { class: "space-y-4",
                        for station_type in [StationType::Police, StationType::Medical, StationType::Fire] {
                            TypeShareRow {
                                station_type,
                                count: snapshot.stations_by_type.count(station_type),
                                total: snapshot.total_stations,
                            }
                        }
                    }
                }
                Card {
                    h3 { class: "font-semibold mb-4", "Quick Actions" }
                    div { class: "space-y-3",
                        Link {
                            to: Route::Stations {},
                            class: "flex items-center gap-2 rounded-lg border border-border px-4 py-2 hover:bg-muted",
                            span { "\u{1F3E2}" }
                            span { "Manage Stations" }
                        }
                        Link {
                            to: Route::Operators {},
                            class: "flex items-center gap-2 rounded-lg border border-border px-4 py-2 hover:bg-muted",
                            span { "\u{1F465}" }
                            span { "Manage Operators" }
                        }
                    }
                }
            }
        } else {
            ErrorMessage { message: "Could not load dashboard data" }
        }
    }
}

#[component]
fn StatCard(title: String, value: i64, icon: String) -> Element {
    rsx! {
        Card {
            div { class: "flex items-center gap-4",
                span { class: "flex h-10 w-10 shrink-0 items-center justify-center rounded-lg bg-muted text-xl",
                    "{icon}"
                }
                div {
                    p { class: "font-mono text-2xl font-semibold", "{value}" }
                    p { class: "text-xs text-muted-foreground", "{title}" }
                }
            }
        }
    }
}

/// Share-of-total bar for one station type. Display math only; nothing is
/// written back to state.
#[component]
fn TypeShareRow(station_type: StationType, count: i64, total: i64) -> Element {
    let share = if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    rsx! {
        div { class: "flex items-center gap-4",
            div { class: "flex-1",
                div { class: "flex items-center justify-between text-sm",
                    span { class: "font-medium", "{station_type.display_name()}" }
                    span { class: "font-mono", "{count}" }
                }
                div { class: "mt-1 h-2 overflow-hidden rounded-full bg-muted",
                    div {
                        class: "h-full rounded-full",
                        style: "width: {share}%; background-color: {station_type.color_var()}",
                    }
                }
            }
        }
    }
}
