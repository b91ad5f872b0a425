use super::api;
use super::ui::details::{ProductDetailsViewModel, ProductForm};
use super::ui::list::state::{create_state, ProductListState};
use crate::domain::a001_category::service::{created_id, CategoryService};
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::confirm::Confirm;
use crate::shared::notifications::{NotificationService, Severity};
use crate::shared::state::EntityStore;
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;

pub const DELETE_CONFIRMATION: &str = "Delete this product?";
pub const NO_CATEGORIES_WARNING: &str = "Create a category first";

/// Product cache and operations.
///
/// Products are rendered against the category cache (names, dropdowns), so the
/// service holds the category service and fills it first when it is empty.
#[derive(Clone, Copy)]
pub struct ProductService {
    api: ApiClient,
    notifications: NotificationService,
    categories: CategoryService,
    store: EntityStore<Product>,
    details: ProductDetailsViewModel,
    list_state: RwSignal<ProductListState>,
}

impl ProductService {
    pub fn new(
        api: ApiClient,
        notifications: NotificationService,
        categories: CategoryService,
    ) -> Self {
        Self {
            api,
            notifications,
            categories,
            store: EntityStore::new(),
            details: ProductDetailsViewModel::new(),
            list_state: create_state(),
        }
    }

    pub fn store(&self) -> EntityStore<Product> {
        self.store
    }

    pub fn details(&self) -> ProductDetailsViewModel {
        self.details
    }

    pub fn list_state(&self) -> RwSignal<ProductListState> {
        self.list_state
    }

    /// Load categories when none are cached, then reload products.
    ///
    /// A failed category load does not stop the product load: products carry
    /// their category names and the error was already shown.
    pub async fn load_products(self) -> Result<(), ApiError> {
        if self.categories.store().is_empty() {
            if let Err(e) = self.categories.load_categories().await {
                log::warn!("Categories unavailable while loading products: {}", e);
            }
        }
        self.reload_products().await
    }

    /// Fetch the product list and replace the cache, ignoring the category cache
    pub async fn reload_products(self) -> Result<(), ApiError> {
        let ticket = self.store.begin_load();
        let items = api::fetch_all(self.api).await?;
        log::debug!("Loaded {} products", items.len());
        self.store.replace(ticket, items);
        Ok(())
    }

    /// Create (no id) or update (id set), then close the form and reload.
    ///
    /// On failure the form stays open and the list is not reloaded.
    pub async fn save_product(self, record: Product) -> Result<(), ApiError> {
        match record.id {
            Some(id) => {
                api::update(self.api, id, &record).await?;
                self.notifications
                    .notify("Product updated", Severity::Success);
            }
            None => {
                let created = api::create(self.api, &record).await?;
                log::info!("Product created with id {:?}", created_id(created.as_ref()));
                self.notifications
                    .notify("Product created", Severity::Success);
            }
        }
        self.details.close();
        self.load_products().await
    }

    /// Delete after confirmation; declining sends nothing
    pub async fn delete_product(self, id: i64, confirm: impl Confirm) -> Result<(), ApiError> {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            return Ok(());
        }
        api::delete(self.api, id).await?;
        self.notifications
            .notify("Product deleted", Severity::Success);
        self.load_products().await
    }

    /// Open the form, prefilled when `id` is in the cache.
    ///
    /// Needs at least one category; otherwise warns and returns `false`.
    pub fn open_form(&self, id: Option<i64>) -> bool {
        if self.categories.store().is_empty() {
            self.notifications
                .notify(NO_CATEGORIES_WARNING, Severity::Warning);
            return false;
        }
        let form = id
            .and_then(|id| self.store.find(|p| p.id == Some(id)))
            .map(|p| ProductForm::from_product(&p))
            .unwrap_or_default();
        self.details.open(form);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{json_categories, json_product, TestHarness};
    use contracts::domain::a002_product::aggregate::{AvailabilityStatus, CategoryRef};
    use futures::executor::block_on;
    use serde_json::Value;

    fn products_json(items: Vec<Value>) -> String {
        Value::Array(items).to_string()
    }

    fn new_product() -> Product {
        Product {
            name: "Kettle".to_string(),
            price: 30.0,
            stock_quantity: 5,
            availability_status: AvailabilityStatus::Available,
            category: Some(CategoryRef::by_id(1)),
            ..Default::default()
        }
    }

    #[test]
    fn empty_category_cache_is_filled_first() {
        let h = TestHarness::new();
        h.transport.respond(200, &json_categories(&[(1, "Kitchen")]));
        h.transport.respond(
            200,
            &products_json(vec![json_product(1, "Kettle", 30.0, 5, "AVAILABLE", Some((1, "Kitchen")))]),
        );

        block_on(h.ctx.products.load_products()).unwrap();

        assert_eq!(
            h.transport.request_lines(),
            vec!["GET /api/categories", "GET /api/products"]
        );
        assert_eq!(h.ctx.categories.store().len(), 1);
        assert_eq!(h.ctx.products.store().len(), 1);
    }

    #[test]
    fn populated_category_cache_is_not_refetched() {
        let h = TestHarness::new();
        h.transport.respond(200, &json_categories(&[(1, "Kitchen")]));
        block_on(h.ctx.categories.load_categories()).unwrap();
        h.transport.respond(200, "[]");

        block_on(h.ctx.products.load_products()).unwrap();

        assert_eq!(
            h.transport.request_lines(),
            vec!["GET /api/categories", "GET /api/products"]
        );
    }

    #[test]
    fn category_failure_does_not_block_products() {
        let h = TestHarness::new();
        h.transport.respond(500, "boom");
        h.transport.respond(
            200,
            &products_json(vec![json_product(4, "Rake", 12.0, 1, "LOW_STOCK", None)]),
        );

        block_on(h.ctx.products.load_products()).unwrap();

        assert_eq!(h.ctx.products.store().len(), 1);
        assert_eq!(h.notifications().len(), 1);
    }

    #[test]
    fn form_does_not_open_without_categories() {
        let h = TestHarness::new();

        let opened = h.ctx.products.open_form(None);

        assert!(!opened);
        assert!(!h.ctx.products.details().is_open());
        assert_eq!(
            h.notifications(),
            vec![(NO_CATEGORIES_WARNING.to_string(), Severity::Warning)]
        );
        assert!(h.transport.request_lines().is_empty());
    }

    #[test]
    fn successful_create_closes_form_and_reloads() {
        let h = TestHarness::new();
        h.transport.respond(200, &json_categories(&[(1, "Kitchen")]));
        block_on(h.ctx.categories.load_categories()).unwrap();
        assert!(h.ctx.products.open_form(None));

        h.transport.respond(
            201,
            &json_product(9, "Kettle", 30.0, 5, "AVAILABLE", Some((1, "Kitchen"))).to_string(),
        );
        h.transport.respond(
            200,
            &products_json(vec![json_product(9, "Kettle", 30.0, 5, "AVAILABLE", Some((1, "Kitchen")))]),
        );

        block_on(h.ctx.products.save_product(new_product())).unwrap();

        assert!(!h.ctx.products.details().is_open());
        assert_eq!(
            h.transport.request_lines()[1..],
            ["POST /api/products", "GET /api/products"]
        );
        assert_eq!(h.ctx.products.store().len(), 1);
        assert_eq!(
            h.notifications(),
            vec![("Product created".to_string(), Severity::Success)]
        );
    }

    #[test]
    fn failed_update_keeps_form_open_and_skips_reload() {
        let h = TestHarness::new();
        h.transport.respond(200, &json_categories(&[(1, "Kitchen")]));
        block_on(h.ctx.categories.load_categories()).unwrap();
        h.ctx.products.open_form(None);
        h.transport.fail("TypeError: Failed to fetch");

        let mut product = new_product();
        product.id = Some(9);
        let result = block_on(h.ctx.products.save_product(product));

        assert!(result.is_err());
        assert!(h.ctx.products.details().is_open());
        assert_eq!(
            h.transport.request_lines()[1..],
            ["PUT /api/products/9"]
        );
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let h = TestHarness::new();

        block_on(h.ctx.products.delete_product(3, |_: &str| false)).unwrap();

        assert!(h.transport.request_lines().is_empty());
    }

    #[test]
    fn confirmed_delete_reloads_products() {
        let h = TestHarness::new();
        h.transport.respond(200, &json_categories(&[(1, "Kitchen")]));
        block_on(h.ctx.categories.load_categories()).unwrap();
        h.transport.respond(204, "");
        h.transport.respond(200, "[]");

        block_on(h.ctx.products.delete_product(3, |msg: &str| msg == DELETE_CONFIRMATION))
            .unwrap();

        assert_eq!(
            h.transport.request_lines()[1..],
            ["DELETE /api/products/3", "GET /api/products"]
        );
        assert_eq!(
            h.notifications(),
            vec![("Product deleted".to_string(), Severity::Success)]
        );
    }

    #[test]
    fn create_answered_without_a_product_body_still_saves() {
        let h = TestHarness::new();
        h.transport.respond(200, &json_categories(&[(1, "Kitchen")]));
        block_on(h.ctx.categories.load_categories()).unwrap();
        h.ctx.products.open_form(None);
        h.transport.respond(201, r#"{"ok":true}"#);
        h.transport.respond(200, "[]");

        block_on(h.ctx.products.save_product(new_product())).unwrap();

        assert!(!h.ctx.products.details().is_open());
        assert_eq!(
            h.transport.request_lines()[1..],
            ["POST /api/products", "GET /api/products"]
        );
        assert_eq!(
            h.notifications(),
            vec![("Product created".to_string(), Severity::Success)]
        );
    }
}
