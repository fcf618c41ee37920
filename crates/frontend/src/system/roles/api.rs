use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::Envelope;
use contracts::shared::pagination::{ListQuery, Paginated};
use contracts::system::roles::{PermissionItem, RoleDetail, RoleDto};
use serde_json::Value;

use crate::shared::api_utils::{get_json, get_page, post_json, put_json};

pub const RESOURCE: &str = "/api/roles";
const PERMISSIONS: &str = "/api/permissions";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<RoleDetail>, ApiError> {
    get_page(RESOURCE, &query).await
}

/// Every role, for the user form.
pub async fn fetch_options() -> Result<Vec<RoleDetail>, ApiError> {
    let page: Paginated<RoleDetail> = get_page(RESOURCE, &ListQuery::default().with_per_page(1000)).await?;
    Ok(page.data)
}

/// The permission catalogue. Accepts a bare array or a `{ data: [...] }` envelope.
pub async fn fetch_permissions() -> Result<Vec<PermissionItem>, ApiError> {
    let envelope: Envelope<Vec<PermissionItem>> = get_json(PERMISSIONS).await?;
    Ok(envelope.into_inner())
}

pub async fn save(dto: &RoleDto) -> Result<(), ApiError> {
    let _: Value = match dto.id {
        Some(id) => put_json(&format!("{}/{}", RESOURCE, id), dto).await?,
        None => post_json(RESOURCE, dto).await?,
    };
    Ok(())
}
