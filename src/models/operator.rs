use serde::{Deserialize, Serialize};

use crate::models::{Role, Station};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operator {
    pub id: String,
    pub phone: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    /// None means the operator is not assigned to any station.
    #[serde(default)]
    pub station: Option<Station>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorsListResponse {
    pub total: i64,
    pub data: Vec<Operator>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOperatorRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub station_id: String,
}

/// Create reply: the operator record plus the one-time temporary password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOperatorResponse {
    #[serde(flatten)]
    pub operator: Operator,
    pub temporary_password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOperatorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub temporary_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_flattens_operator_fields() {
        let response: CreateOperatorResponse = serde_json::from_str(
            r#"{
                "id": "op-9",
                "phone": "+251911111111",
                "full_name": "Sara Tesfaye",
                "email": "sara@example.com",
                "role": "operator",
                "station": null,
                "is_active": true,
                "temporary_password": "Abc123"
            }"#,
        )
        .unwrap();

        assert_eq!(response.operator.id, "op-9");
        assert!(response.operator.station.is_none());
        assert_eq!(response.temporary_password, "Abc123");
    }

    #[test]
    fn update_request_skips_unset_fields() {
        let body = serde_json::to_string(&UpdateOperatorRequest {
            is_active: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, r#"{"is_active":false}"#);
    }
}
