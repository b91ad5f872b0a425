use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductListState {
    /// Selected category of the filter dropdown; `None` shows every product
    pub category_filter: Option<i64>,
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
