use crate::shared::api_utils::{ApiClient, ApiError, HttpMethod};
use contracts::domain::a002_product::aggregate::Product;
use serde_json::Value;

const ENDPOINT: &str = "/products";

fn item_endpoint(id: i64) -> String {
    format!("{}/{}", ENDPOINT, id)
}

/// Get all products with their categories embedded
pub async fn fetch_all(api: ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get(ENDPOINT).await
}

pub async fn create(api: ApiClient, product: &Product) -> Result<Option<Value>, ApiError> {
    api.request(ENDPOINT, HttpMethod::Post, Some(product)).await
}

pub async fn update(
    api: ApiClient,
    id: i64,
    product: &Product,
) -> Result<Option<Value>, ApiError> {
    api.request(&item_endpoint(id), HttpMethod::Put, Some(product))
        .await
}

pub async fn delete(api: ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&item_endpoint(id)).await
}
