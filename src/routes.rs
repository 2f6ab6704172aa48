use dioxus::prelude::*;

use crate::components::admin::{AdminDashboard, OperatorsPage, StationsPage};
use crate::components::health::HealthPage;
use crate::components::operator::OperatorDashboard;
use crate::components::settings::SettingsPage;
use crate::models::Role;
use crate::AppLayout;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    // Authenticated routes share the shell with the role-aware sidebar
    #[layout(AppLayout)]
        #[route("/admin")]
        Admin {},

        #[route("/admin/stations")]
        Stations {},

        #[route("/admin/operators")]
        Operators {},

        #[route("/operator")]
        Operator {},

        #[route("/settings")]
        Settings {},
    #[end_layout]

    // Public routes render without the shell
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},
}

/// Single role-to-home table consumed by both the login handler and the
/// auth guard, so the two can never drift. Citizens have no home here.
pub fn home_route(role: Role) -> Option<Route> {
    match role {
        Role::Admin => Some(Route::Admin {}),
        Role::Operator => Some(Route::Operator {}),
        Role::Citizen => None,
    }
}

// Route handler components
#[component]
fn Admin() -> Element {
    rsx! { AdminDashboard {} }
}

#[component]
fn Stations() -> Element {
    rsx! { StationsPage {} }
}

#[component]
fn Operators() -> Element {
    rsx! { OperatorsPage {} }
}

#[component]
fn Operator() -> Element {
    rsx! { OperatorDashboard {} }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsPage {} }
}

#[component]
fn Home() -> Element {
    rsx! { HealthPage {} }
}

#[component]
fn Login() -> Element {
    rsx! {
        crate::LoginPage {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_home_table() {
        assert_eq!(home_route(Role::Admin), Some(Route::Admin {}));
        assert_eq!(home_route(Role::Operator), Some(Route::Operator {}));
        // Citizens are rejected at login rather than routed anywhere
        assert_eq!(home_route(Role::Citizen), None);
    }
}
