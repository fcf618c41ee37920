//! Login exchange and the current-user (actor) payload.

pub mod permissions;

use crate::shared::serde_utils;
use serde::{Deserialize, Serialize};

pub use permissions::{Actor, PermissionSource, RolePermissions};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Body of `GET /api/auth/me`: `{ "user": { ... } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::lenient_vec")]
    pub roles: Vec<AuthRole>,
    #[serde(default, deserialize_with = "serde_utils::lenient_opt_vec")]
    pub permissions_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRole {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// `None` when the server did not load the relation.
    #[serde(default, deserialize_with = "serde_utils::lenient_opt_vec")]
    pub permissions: Option<Vec<AuthPermission>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPermission {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub guard_name: Option<String>,
}
