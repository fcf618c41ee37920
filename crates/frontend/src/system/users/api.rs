use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use contracts::system::users::{User, UserForm};
use serde_json::Value;

use crate::shared::api_utils::{get_page, post_json, put_json};

pub const RESOURCE: &str = "/api/users";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<User>, ApiError> {
    get_page(RESOURCE, &query).await
}

/// Create (`POST`) or update (`PUT`, password only when changed).
pub async fn save(form: &UserForm) -> Result<(), ApiError> {
    let _: Value = match form.id {
        Some(id) => put_json(&format!("{}/{}", RESOURCE, id), &form.to_update()).await?,
        None => post_json(RESOURCE, &form.to_create()).await?,
    };
    Ok(())
}
