use crate::dashboards::d001_catalog_overview::service::DashboardService;
use crate::domain::a001_category::service::CategoryService;
use crate::domain::a002_product::service::ProductService;
use crate::layout::view_router::{AppView, ViewRouter};
use crate::shared::api_utils::{ApiClient, ApiError, HttpTransport};
use crate::shared::config::ClientConfig;
use crate::shared::notifications::{NotificationService, NotificationTiming};
use leptos::prelude::Effect;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

/// Application-wide services shared through context.
///
/// Every field is a copyable handle, so the whole context can be captured by
/// event handlers and moved into spawned tasks.
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub config: StoredValue<ClientConfig>,
    pub api: ApiClient,
    pub notifications: NotificationService,
    pub router: ViewRouter,
    pub categories: CategoryService,
    pub products: ProductService,
    pub dashboard: DashboardService,
}

impl AdminContext {
    pub fn new(config: ClientConfig, transport: Rc<dyn HttpTransport>) -> Self {
        let notifications = NotificationService::new(NotificationTiming {
            display_ms: config.notification_display_ms,
            exit_ms: config.notification_exit_ms,
        });
        let api = ApiClient::new(config.api_base.clone(), transport, notifications);
        let categories = CategoryService::new(api, notifications);
        let products = ProductService::new(api, notifications, categories);
        let dashboard = DashboardService::new(categories, products);

        Self {
            config: StoredValue::new(config),
            api,
            notifications,
            router: ViewRouter::new(),
            categories,
            products,
            dashboard,
        }
    }

    /// Show `target` and refresh the data behind it
    pub async fn switch_view(self, target: AppView) -> Result<(), ApiError> {
        self.router.show(target);
        match target {
            AppView::Dashboard => self.dashboard.load_dashboard_metrics().await,
            AppView::Categories => self.categories.load_categories().await,
            AppView::Products => self.products.load_products().await,
            AppView::About => Ok(()),
        }
    }

    /// Fire-and-forget [`switch_view`](Self::switch_view) for event handlers
    pub fn navigate(self, target: AppView) {
        spawn_local(async move {
            if let Err(e) = self.switch_view(target).await {
                log::debug!("Loading '{}' stopped: {}", target.key(), e);
            }
        });
    }

    /// Restore the active view from `?active=` and mirror later switches into
    /// the query string. Returns the view to open first.
    pub fn init_router_integration(&self) -> AppView {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = view_from_query(&search).unwrap_or_default();

        let router = self.router;
        Effect::new(move |_| {
            let new_url = format!("?{}", query_for_view(router.active()));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });

        initial
    }
}

/// Parse `?active=<key>`; unknown keys are ignored
pub fn view_from_query(search: &str) -> Option<AppView> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| AppView::from_key(key))
}

pub fn query_for_view(view: AppView) -> String {
    serde_qs::to_string(&HashMap::from([("active", view.key())])).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{json_categories, TestHarness};
    use futures::executor::block_on;

    #[test]
    fn query_string_selects_initial_view() {
        assert_eq!(view_from_query("?active=products"), Some(AppView::Products));
        assert_eq!(view_from_query("?active=nowhere"), None);
        assert_eq!(view_from_query(""), None);
        assert_eq!(query_for_view(AppView::Categories), "active=categories");
    }

    #[test]
    fn switching_to_categories_loads_them() {
        let h = TestHarness::new();
        h.transport.respond(200, &json_categories(&[(1, "Books")]));

        block_on(h.ctx.switch_view(AppView::Categories)).unwrap();

        assert!(h.ctx.router.is_active(AppView::Categories));
        assert_eq!(h.transport.request_lines(), vec!["GET /api/categories"]);
        assert_eq!(h.ctx.categories.store().len(), 1);
    }

    #[test]
    fn switching_to_about_only_toggles_visibility() {
        let h = TestHarness::new();

        block_on(h.ctx.switch_view(AppView::About)).unwrap();

        assert!(h.ctx.router.is_active(AppView::About));
        assert!(!h.ctx.router.is_active(AppView::Dashboard));
        assert!(h.transport.request_lines().is_empty());
    }

    #[test]
    fn switching_to_dashboard_refetches_both_lists() {
        let h = TestHarness::new();
        h.transport.respond(200, "[]");
        h.transport.respond(200, "[]");

        block_on(h.ctx.switch_view(AppView::Dashboard)).unwrap();

        assert_eq!(
            h.transport.request_lines(),
            vec!["GET /api/categories", "GET /api/products"]
        );
    }
}
