use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    Police,
    Medical,
    Fire,
}

impl StationType {
    /// Wire name, also used as the form select value.
    pub fn as_str(&self) -> &str {
        match self {
            StationType::Police => "police",
            StationType::Medical => "medical",
            StationType::Fire => "fire",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            StationType::Police => "Police",
            StationType::Medical => "Medical",
            StationType::Fire => "Fire",
        }
    }

    /// Theme variable carrying this agency's accent color.
    pub fn color_var(&self) -> &str {
        match self {
            StationType::Police => "var(--station-police)",
            StationType::Medical => "var(--station-medical)",
            StationType::Fire => "var(--station-fire)",
        }
    }

    pub fn badge_class(&self) -> &str {
        match self {
            StationType::Police => "badge-police",
            StationType::Medical => "badge-medical",
            StationType::Fire => "badge-fire",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub phone: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city: String,
    pub capacity: i64,
    pub is_active: bool,
}

/// Create payload: a station minus the server-assigned id and active flag.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStationRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub phone: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city: String,
    pub capacity: i64,
}
