//! Client configuration
//!
//! Defaults match a backend served from the same origin under `/api`. The host
//! page may override the API base with
//! `<meta name="catalog-admin-api-base" content="https://host/api">`.

/// Name of the `<meta>` tag that overrides the API base
pub const API_BASE_META: &str = "catalog-admin-api-base";

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u32 = 4000;
pub const DEFAULT_NOTIFICATION_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every endpoint path
    pub api_base: String,
    /// How long a notification stays fully visible
    pub notification_display_ms: u32,
    /// Length of the hide transition before a notification is removed
    pub notification_exit_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            notification_display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            notification_exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the API base taken from the host page when present
    pub fn from_document() -> Self {
        let config = Self::default();
        match read_meta(API_BASE_META) {
            Some(base) => config.with_api_base(base),
            None => config,
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = normalize_base(&base.into());
        self
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
