use contracts::domain::a001_category::{Category, CategoryDto};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use serde_json::Value;

use crate::shared::api_utils::{get_page, post_json, put_json};

pub const RESOURCE: &str = "/api/categories";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Category>, ApiError> {
    get_page(RESOURCE, &query).await
}

/// Every category, for selects in other forms.
pub async fn fetch_options() -> Result<Vec<Category>, ApiError> {
    let page: Paginated<Category> = get_page(RESOURCE, &ListQuery::default().with_per_page(1000)).await?;
    Ok(page.data)
}

/// Creates or updates depending on `dto.id`.
pub async fn save(dto: &CategoryDto) -> Result<(), ApiError> {
    let _: Value = match dto.id {
        Some(id) => put_json(&format!("{}/{}", RESOURCE, id), dto).await?,
        None => post_json(RESOURCE, dto).await?,
    };
    Ok(())
}
