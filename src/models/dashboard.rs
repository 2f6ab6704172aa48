use serde::{Deserialize, Serialize};

use crate::models::StationType;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct StationsByType {
    pub police: i64,
    pub medical: i64,
    pub fire: i64,
}

impl StationsByType {
    pub fn count(&self, station_type: StationType) -> i64 {
        match station_type {
            StationType::Police => self.police,
            StationType::Medical => self.medical,
            StationType::Fire => self.fire,
        }
    }
}

/// Aggregate snapshot for the admin landing page, computed server-side and
/// fetched fresh on every mount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminDashboardData {
    pub total_stations: i64,
    pub active_stations: i64,
    pub total_operators: i64,
    pub active_operators: i64,
    pub total_citizens: i64,
    pub stations_by_type: StationsByType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatorDashboardData {
    /// Absent while the operator account has no station assignment.
    #[serde(default)]
    pub my_station: Option<StationSummary>,
    pub pending_incidents: i64,
    pub total_incidents_today: i64,
    #[serde(default)]
    pub recent_incidents: Vec<Incident>,
}

/// Read-only incident summary embedded in the operator dashboard payload.
/// Incidents are never created or mutated from this client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub incident_type: String,
    pub location: String,
    pub status: String,
    pub time: String,
}
