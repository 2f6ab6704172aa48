use crate::api::{api_client, ApiError};
use crate::models::{
    CreateOperatorRequest, CreateOperatorResponse, Operator, OperatorsListResponse,
    ResetPasswordResponse, UpdateOperatorRequest,
};

pub async fn list() -> Result<OperatorsListResponse, ApiError> {
    api_client().get("/api/admin/operators/").await
}

pub async fn create(request: CreateOperatorRequest) -> Result<CreateOperatorResponse, ApiError> {
    api_client().post("/api/admin/operators/create/", &request).await
}

pub async fn update(id: &str, request: UpdateOperatorRequest) -> Result<Operator, ApiError> {
    api_client()
        .put(&format!("/api/admin/operators/{}/", id), &request)
        .await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_client()
        .delete(&format!("/api/admin/operators/{}/", id))
        .await
}

pub async fn reset_password(id: &str) -> Result<ResetPasswordResponse, ApiError> {
    api_client()
        .post_empty(&format!("/api/admin/operators/{}/reset-password/", id))
        .await
}
