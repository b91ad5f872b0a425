//! Test doubles shared by the module tests

use crate::layout::global_context::AdminContext;
use crate::shared::api_utils::{ApiRequest, ApiResponse, HttpTransport, TransportError};
use crate::shared::config::ClientConfig;
use crate::shared::notifications::Severity;
use async_trait::async_trait;
use leptos::prelude::*;
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Transport answering from a FIFO script and recording every request
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.script.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.script
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// Requests as `"METHOD url"` lines
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.url))
            .collect()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let unexpected = format!("unscripted request {} {}", request.method.as_str(), request.url);
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(TransportError(unexpected)))
    }
}

/// Fresh reactive owner, context and transport for one test
pub struct TestHarness {
    pub ctx: AdminContext,
    pub transport: Rc<ScriptedTransport>,
    _owner: Owner,
}

impl TestHarness {
    pub fn new() -> Self {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(ScriptedTransport::default());
        let ctx = AdminContext::new(ClientConfig::default(), transport.clone());
        Self {
            ctx,
            transport,
            _owner: owner,
        }
    }

    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.ctx
            .notifications
            .snapshot()
            .into_iter()
            .map(|n| (n.message, n.severity))
            .collect()
    }
}

/// JSON array of categories from `(id, name)` pairs
pub fn json_categories(items: &[(i64, &str)]) -> String {
    let values: Vec<_> = items
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name, "description": null }))
        .collect();
    serde_json::Value::Array(values).to_string()
}

/// JSON product as the backend returns it, category embedded
pub fn json_product(
    id: i64,
    name: &str,
    price: f64,
    stock: i32,
    status: &str,
    category: Option<(i64, &str)>,
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "price": price,
        "stockQuantity": stock,
        "availabilityStatus": status,
        "category": category.map(|(cid, cname)| json!({ "id": cid, "name": cname })),
    })
}
