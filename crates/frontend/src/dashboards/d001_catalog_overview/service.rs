use super::metrics::CatalogMetrics;
use crate::domain::a001_category::service::CategoryService;
use crate::domain::a002_product::service::ProductService;
use crate::shared::api_utils::ApiError;
use leptos::prelude::*;

/// Loads both caches and derives the overview figures from them
#[derive(Clone, Copy)]
pub struct DashboardService {
    categories: CategoryService,
    products: ProductService,
    metrics: RwSignal<Option<CatalogMetrics>>,
}

impl DashboardService {
    pub fn new(categories: CategoryService, products: ProductService) -> Self {
        Self {
            categories,
            products,
            metrics: RwSignal::new(None),
        }
    }

    /// Last computed figures; `None` until the first successful load
    pub fn metrics(&self) -> RwSignal<Option<CatalogMetrics>> {
        self.metrics
    }

    /// Refetch categories then products, always, and recompute.
    ///
    /// On failure the previous figures stay on screen.
    pub async fn load_dashboard_metrics(self) -> Result<(), ApiError> {
        let result = self.refresh().await;
        if let Err(e) = &result {
            log::error!("Dashboard error: {}", e);
        }
        result
    }

    async fn refresh(self) -> Result<(), ApiError> {
        self.categories.load_categories().await?;
        self.products.reload_products().await?;

        let categories = self.categories.store();
        let products = self.products.store();
        let metrics = categories.with_untracked(|cats| {
            products.with_untracked(|items| CatalogMetrics::compute(cats, items))
        });
        self.metrics.set(Some(metrics));
        Ok(())
    }
}
