use crate::api::{api_client, ApiError};

/// Unauthenticated liveness probe. The payload shape is owned by the
/// backend, so it is surfaced as raw JSON.
pub async fn ping() -> Result<serde_json::Value, ApiError> {
    api_client().get("/api/health").await
}
