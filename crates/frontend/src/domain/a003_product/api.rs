use contracts::domain::a003_product::{Product, ProductPayload};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use serde_json::Value;

use crate::shared::api_utils::{get_page, post_json, put_json};

pub const RESOURCE: &str = "/api/products";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Product>, ApiError> {
    get_page(RESOURCE, &query).await
}

/// `PUT` when `id` is set, `POST` otherwise. `harga` in the payload is the
/// recomputed sale price.
pub async fn save(id: Option<i64>, payload: &ProductPayload) -> Result<(), ApiError> {
    let _: Value = match id {
        Some(id) => put_json(&format!("{}/{}", RESOURCE, id), payload).await?,
        None => post_json(RESOURCE, payload).await?,
    };
    Ok(())
}
