use contracts::domain::a005_sale::Sale;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::Envelope;
use contracts::shared::pagination::{ListQuery, Paginated};

use crate::shared::api_utils::{get_json, get_page};

pub const RESOURCE: &str = "/api/sales";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Sale>, ApiError> {
    get_page(RESOURCE, &query).await
}

/// Sale with its line items.
pub async fn fetch_by_id(id: i64) -> Result<Sale, ApiError> {
    let envelope: Envelope<Sale> = get_json(&format!("{}/{}", RESOURCE, id)).await?;
    Ok(envelope.into_inner())
}
