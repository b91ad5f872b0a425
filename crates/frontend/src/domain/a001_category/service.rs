use super::api;
use super::ui::details::{CategoryDetailsViewModel, CategoryForm};
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::confirm::Confirm;
use crate::shared::notifications::{NotificationService, Severity};
use crate::shared::state::EntityStore;
use contracts::domain::a001_category::aggregate::Category;
use serde_json::Value;

/// Id in a create answer, if the backend sent the stored record back
pub(crate) fn created_id(body: Option<&Value>) -> Option<i64> {
    body?.get("id")?.as_i64()
}

pub const DELETE_CONFIRMATION: &str =
    "Delete this category? Products assigned to it may be affected.";

/// Category cache plus the operations that keep it in sync with the backend.
///
/// Every mutation ends with a full reload; nothing is patched in place.
#[derive(Clone, Copy)]
pub struct CategoryService {
    api: ApiClient,
    notifications: NotificationService,
    store: EntityStore<Category>,
    details: CategoryDetailsViewModel,
}

impl CategoryService {
    pub fn new(api: ApiClient, notifications: NotificationService) -> Self {
        Self {
            api,
            notifications,
            store: EntityStore::new(),
            details: CategoryDetailsViewModel::new(),
        }
    }

    pub fn store(&self) -> EntityStore<Category> {
        self.store
    }

    pub fn details(&self) -> CategoryDetailsViewModel {
        self.details
    }

    /// Fetch the full list and replace the cache. On failure the cache is kept.
    pub async fn load_categories(self) -> Result<(), ApiError> {
        let ticket = self.store.begin_load();
        let items = api::fetch_all(self.api).await?;
        log::debug!("Loaded {} categories", items.len());
        self.store.replace(ticket, items);
        Ok(())
    }

    /// Create (no id) or update (id set), then close the form and reload.
    ///
    /// On failure the form stays open and the list is not reloaded.
    pub async fn save_category(self, record: Category) -> Result<(), ApiError> {
        match record.id {
            Some(id) => {
                api::update(self.api, id, &record).await?;
                self.notifications
                    .notify("Category updated", Severity::Success);
            }
            None => {
                let created = api::create(self.api, &record).await?;
                log::info!("Category created with id {:?}", created_id(created.as_ref()));
                self.notifications
                    .notify("Category created", Severity::Success);
            }
        }
        self.details.close();
        self.load_categories().await
    }

    /// Delete after confirmation; declining sends nothing
    pub async fn delete_category(self, id: i64, confirm: impl Confirm) -> Result<(), ApiError> {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            return Ok(());
        }
        api::delete(self.api, id).await?;
        self.notifications
            .notify("Category deleted", Severity::Success);
        self.load_categories().await
    }

    /// Open the form, prefilled when `id` is in the cache
    pub fn open_form(&self, id: Option<i64>) {
        let form = id
            .and_then(|id| self.store.find(|c| c.id == Some(id)))
            .map(|c| CategoryForm::from_category(&c))
            .unwrap_or_default();
        self.details.open(form);
    }
}
