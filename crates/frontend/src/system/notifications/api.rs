use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use contracts::system::notifications::{Notification, UnreadCount};
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{delete, get_json, get_page, send_empty};

pub const RESOURCE: &str = "/api/notifications";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Notification>, ApiError> {
    get_page(RESOURCE, &query).await
}

pub async fn unread_count() -> Result<u64, ApiError> {
    let body: UnreadCount = get_json(&format!("{}/unread-count", RESOURCE)).await?;
    Ok(body.count)
}

pub async fn mark_read(id: Uuid) -> Result<(), ApiError> {
    send_empty(Request::patch, &format!("{}/{}/read", RESOURCE, id)).await
}

pub async fn mark_all_read() -> Result<(), ApiError> {
    send_empty(Request::post, &format!("{}/read-all", RESOURCE)).await
}

pub async fn remove(id: Uuid) -> Result<(), ApiError> {
    delete(&format!("{}/{}", RESOURCE, id)).await
}
