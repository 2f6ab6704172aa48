use serde::{Deserialize, Serialize};

use crate::models::Station;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
    Citizen,
}

impl Role {
    pub fn display_name(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Operator => "Operator",
            Role::Citizen => "Citizen",
        }
    }
}

/// Profile as persisted in the session store and rendered in the shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub phone: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub station: Option<Station>,
}

impl User {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login reply: the profile fields plus the token pair. `/api/auth/me/`
/// returns the same shape minus the tokens, which `User` covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: String,
    pub phone: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub station: Option<Station>,
}

impl LoginResponse {
    pub fn tokens(&self) -> AuthTokens {
        AuthTokens {
            access: self.access_token.clone(),
            refresh: self.refresh_token.clone(),
        }
    }

    pub fn into_user(self) -> User {
        User {
            id: self.id,
            phone: self.phone,
            full_name: self.full_name,
            email: self.email,
            role: self.role,
            profile_image: None,
            station: self.station,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"operator\"").unwrap();
        assert_eq!(role, Role::Operator);
        assert!(serde_json::from_str::<Role>("\"dispatcher\"").is_err());
    }

    #[test]
    fn login_response_converts_to_user() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "id": "u-1",
                "phone": "+251900000000",
                "full_name": "Abebe Bikila",
                "email": "abebe@example.com",
                "role": "admin",
                "access_token": "acc",
                "refresh_token": "ref"
            }"#,
        )
        .unwrap();

        assert_eq!(response.tokens().access, "acc");
        let user = response.into_user();
        assert_eq!(user.role, Role::Admin);
        assert!(user.station.is_none());
        assert_eq!(user.initials(), "AB");
    }
}
