use crate::api::{api_client, ApiError};
use crate::models::{AdminDashboardData, OperatorDashboardData};

pub async fn admin() -> Result<AdminDashboardData, ApiError> {
    api_client().get("/api/admin/dashboard/").await
}

pub async fn operator() -> Result<OperatorDashboardData, ApiError> {
    api_client().get("/api/operator/dashboard/").await
}
