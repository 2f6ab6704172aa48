use crate::api::{api_client, ApiError};
use crate::models::{
    ChangePasswordRequest, ChangePasswordResponse, LoginRequest, LoginResponse,
    UpdateProfileRequest, User,
};

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response: LoginResponse = api_client().post("/api/auth/login/", &request).await?;

    // Persist the session for subsequent requests
    let session = api_client().session();
    session.save_tokens(&response.tokens());
    session.save_user(&response.clone().into_user());

    Ok(response)
}

pub async fn me() -> Result<User, ApiError> {
    api_client().get("/api/auth/me/").await
}

pub async fn update_profile(request: UpdateProfileRequest) -> Result<User, ApiError> {
    api_client().patch("/api/auth/profile/", &request).await
}

pub async fn change_password(
    old_password: &str,
    new_password: &str,
) -> Result<ChangePasswordResponse, ApiError> {
    let request = ChangePasswordRequest {
        old_password: old_password.to_string(),
        new_password: new_password.to_string(),
    };
    api_client().post("/api/auth/change-password/", &request).await
}
