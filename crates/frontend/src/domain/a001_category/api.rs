use crate::shared::api_utils::{ApiClient, ApiError, HttpMethod};
use contracts::domain::a001_category::aggregate::Category;
use serde_json::Value;

const ENDPOINT: &str = "/categories";

fn item_endpoint(id: i64) -> String {
    format!("{}/{}", ENDPOINT, id)
}

/// Get all categories
pub async fn fetch_all(api: ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get(ENDPOINT).await
}

/// Create a category. Any 2xx answer is a success; its body is returned as-is
pub async fn create(api: ApiClient, category: &Category) -> Result<Option<Value>, ApiError> {
    api.request(ENDPOINT, HttpMethod::Post, Some(category)).await
}

pub async fn update(
    api: ApiClient,
    id: i64,
    category: &Category,
) -> Result<Option<Value>, ApiError> {
    api.request(&item_endpoint(id), HttpMethod::Put, Some(category))
        .await
}

pub async fn delete(api: ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&item_endpoint(id)).await
}
