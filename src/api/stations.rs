use crate::api::{api_client, ApiError};
use crate::models::{CreateStationRequest, Station};

pub async fn list() -> Result<Vec<Station>, ApiError> {
    api_client().get("/api/admin/stations/").await
}

pub async fn create(request: CreateStationRequest) -> Result<Station, ApiError> {
    api_client().post("/api/admin/stations/", &request).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_client()
        .delete(&format!("/api/admin/stations/{}/", id))
        .await
}
