use contracts::domain::a004_purchase::{Purchase, PurchaseImportResult};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::shared::api_utils::{get_page, post_form};

pub const RESOURCE: &str = "/api/purchases";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Purchase>, ApiError> {
    get_page(RESOURCE, &query).await
}

fn form_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("form data: {:?}", e))
}

/// Uploads an invoice file (`multipart/form-data`: `supplier_id`, `file`).
/// The file is parsed on the server.
pub async fn import(supplier_id: i64, file: &File) -> Result<PurchaseImportResult, ApiError> {
    let form = FormData::new().map_err(form_error)?;
    form.append_with_str("supplier_id", &supplier_id.to_string())
        .map_err(form_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(form_error)?;
    post_form(&format!("{}/import", RESOURCE), form).await
}
