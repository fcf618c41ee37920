//! API utilities for frontend-backend communication
//!
//! Every call goes through these helpers: they add the bearer token and
//! `Accept: application/json`, and turn non-2xx answers into [`ApiError`].
//! A 401 drops the stored token so the shell falls back to the login page.

use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::API_URL_OVERRIDE;
use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Uses `APOTEK_API_URL` when it was set at build time, otherwise the origin
/// the app was served from.
///
/// # Returns
/// - API base URL like "https://apotek.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = API_URL_OVERRIDE {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window
        .location()
        .origin()
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/products/7");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    if error.is_unauthenticated() {
        log::warn!("{} answered 401, ending session", response.url());
        crate::system::auth::context::expire_session();
    } else {
        log::debug!("{} answered {}: {}", response.url(), status, error);
    }
    Err(error)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_headers(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(network)?;
    parse(response).await
}

/// One page of a list endpoint: `GET {path}?page=..&per_page=..&search=..`.
pub async fn get_page<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
) -> Result<Paginated<T>, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Parse(e.to_string()))?;
    get_json(&format!("{}?{}", path, qs)).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = with_headers(Request::post(&api_url(path)))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    parse(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = with_headers(Request::put(&api_url(path)))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    parse(response).await
}

/// Bodiless mutations (mark read, delete, logout). The answer is ignored.
pub async fn send_empty(builder: fn(&str) -> RequestBuilder, path: &str) -> Result<(), ApiError> {
    let response = with_headers(builder(&api_url(path)))
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send_empty(Request::delete, path).await
}

/// Multipart upload; the browser sets the boundary header itself.
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let response = with_headers(Request::post(&api_url(path)))
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    parse(response).await
}
