//! API utilities for frontend-backend communication
//!
//! Every request goes through [`ApiClient::request`]. It is the only place that
//! turns a failed request into a user notification: callers receive the same
//! failure as an [`ApiError`] and only decide whether to stop.

use crate::shared::notifications::{NotificationService, Severity};
use async_trait::async_trait;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;
use thiserror::Error;

const CONNECTION_FAILED: &str = "Could not connect to the server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure (DNS, refused connection, aborted fetch)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    /// Non-2xx answer; `message` is the body text sent by the backend
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    fn from_transport(err: TransportError) -> Self {
        if err.0.trim().is_empty() {
            ApiError::Transport(CONNECTION_FAILED.to_string())
        } else {
            ApiError::Transport(err.0)
        }
    }

    fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("Error {}", status)
        } else {
            body.to_string()
        };
        ApiError::Status { status, message }
    }
}

/// HTTP layer under the API client
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Browser `fetch` through gloo-net
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// REST client bound to one API base.
///
/// Copyable handle: the transport lives in local arena storage so the client
/// can be captured by event handlers and moved into spawned tasks.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base: StoredValue<String>,
    transport: StoredValue<Rc<dyn HttpTransport>, LocalStorage>,
    notifications: NotificationService,
}

impl ApiClient {
    pub fn new(
        base: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            base: StoredValue::new(base.into()),
            transport: StoredValue::new_local(transport),
            notifications,
        }
    }

    /// Build a full API URL from an endpoint path like `/categories/3`
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base.get_value(), endpoint)
    }

    /// Send a request and parse the answer.
    ///
    /// Returns `None` for 204 and empty bodies. Failures are notified to the
    /// user before they are returned.
    pub async fn request<B>(
        self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&B>,
    ) -> Result<Option<Value>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let result = self.execute(endpoint, method, body).await;
        if let Err(err) = &result {
            self.report(method, endpoint, err);
        }
        result
    }

    pub async fn get<T: DeserializeOwned>(self, endpoint: &str) -> Result<T, ApiError> {
        let value = self
            .request::<()>(endpoint, HttpMethod::Get, None)
            .await?
            .unwrap_or(Value::Null);
        self.decode(HttpMethod::Get, endpoint, value)
    }

    pub async fn delete(self, endpoint: &str) -> Result<(), ApiError> {
        self.request::<()>(endpoint, HttpMethod::Delete, None)
            .await
            .map(|_| ())
    }

    async fn execute<B>(
        self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&B>,
    ) -> Result<Option<Value>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let request = ApiRequest {
            method,
            url: self.url(endpoint),
            body,
        };

        let transport = self.transport.get_value();
        let response = transport
            .send(request)
            .await
            .map_err(ApiError::from_transport)?;

        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        // DELETE answers without content
        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(
        self,
        method: HttpMethod,
        endpoint: &str,
        value: Value,
    ) -> Result<T, ApiError> {
        serde_json::from_value(value).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            self.report(method, endpoint, &err);
            err
        })
    }

    fn report(&self, method: HttpMethod, endpoint: &str, err: &ApiError) {
        log::error!("API error on {} {}: {}", method.as_str(), endpoint, err);
        self.notifications.notify(err.to_string(), Severity::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::TestHarness;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn no_content_yields_none() {
        let h = TestHarness::new();
        h.transport.respond(204, "");

        let result = block_on(h.ctx.api.request::<()>("/products/4", HttpMethod::Delete, None));

        assert_eq!(result, Ok(None));
        assert_eq!(h.transport.request_lines(), vec!["DELETE /api/products/4"]);
        assert!(h.notifications().is_empty());
    }

    #[test]
    fn json_body_is_sent_and_answer_parsed() {
        let h = TestHarness::new();
        h.transport.respond(201, r#"{"id":9,"name":"Toys"}"#);

        let result = block_on(h.ctx.api.request(
            "/categories",
            HttpMethod::Post,
            Some(&json!({ "name": "Toys" })),
        ));

        assert_eq!(result, Ok(Some(json!({ "id": 9, "name": "Toys" }))));
        let sent = h.transport.requests();
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"name":"Toys"}"#));
    }

    #[test]
    fn backend_message_is_surfaced_once() {
        let h = TestHarness::new();
        h.transport.respond(400, "Name is mandatory");

        let result = block_on(h.ctx.api.get::<Vec<Value>>("/categories"));

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 400,
                message: "Name is mandatory".to_string()
            })
        );
        assert_eq!(
            h.notifications(),
            vec![("Name is mandatory".to_string(), Severity::Error)]
        );
    }

    #[test]
    fn empty_error_body_falls_back_to_status() {
        let h = TestHarness::new();
        h.transport.respond(500, "");

        let err = block_on(h.ctx.api.delete("/categories/1")).unwrap_err();

        assert_eq!(err.to_string(), "Error 500");
        assert_eq!(h.notifications().len(), 1);
    }

    #[test]
    fn transport_failure_carries_underlying_message() {
        let h = TestHarness::new();
        h.transport.fail("TypeError: Failed to fetch");

        let err = block_on(h.ctx.api.get::<Vec<Value>>("/products")).unwrap_err();

        assert_eq!(err, ApiError::Transport("TypeError: Failed to fetch".to_string()));
        assert_eq!(
            h.notifications(),
            vec![("TypeError: Failed to fetch".to_string(), Severity::Error)]
        );
    }

    #[test]
    fn silent_transport_failure_gets_generic_message() {
        let h = TestHarness::new();
        h.transport.fail("");

        let err = block_on(h.ctx.api.get::<Vec<Value>>("/products")).unwrap_err();

        assert_eq!(err.to_string(), CONNECTION_FAILED);
    }

    #[test]
    fn malformed_payload_is_a_notified_decode_error() {
        let h = TestHarness::new();
        h.transport.respond(200, r#"{"unexpected":true}"#);

        let err = block_on(h.ctx.api.get::<Vec<Value>>("/categories")).unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(h.notifications().len(), 1);
    }
}
