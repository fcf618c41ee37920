use contracts::shared::api_error::ApiError;
use contracts::system::auth::{AuthPayload, LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{get_json, post_json, send_empty};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    post_json("/api/auth/login", &LoginRequest { email, password }).await
}

/// Logout (revokes the token on the server)
pub async fn logout() -> Result<(), ApiError> {
    send_empty(Request::post, "/api/auth/logout").await
}

/// Current user with roles and permissions
pub async fn get_current_user() -> Result<AuthPayload, ApiError> {
    get_json("/api/auth/me").await
}
