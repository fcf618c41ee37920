use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use serde_json::Value;

use crate::shared::api_utils::{get_page, post_json, put_json};

pub const RESOURCE: &str = "/api/suppliers";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Supplier>, ApiError> {
    get_page(RESOURCE, &query).await
}

/// Every supplier, for the purchase import form.
pub async fn fetch_options() -> Result<Vec<Supplier>, ApiError> {
    let page: Paginated<Supplier> = get_page(RESOURCE, &ListQuery::default().with_per_page(1000)).await?;
    Ok(page.data)
}

pub async fn save(dto: &SupplierDto) -> Result<(), ApiError> {
    let _: Value = match dto.id {
        Some(id) => put_json(&format!("{}/{}", RESOURCE, id), dto).await?,
        None => post_json(RESOURCE, dto).await?,
    };
    Ok(())
}
