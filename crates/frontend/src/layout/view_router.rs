use leptos::prelude::*;

/// Top-level sections of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    Categories,
    Products,
    About,
}

impl AppView {
    pub const ALL: [AppView; 4] = [
        AppView::Dashboard,
        AppView::Categories,
        AppView::Products,
        AppView::About,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::Categories => "categories",
            AppView::Products => "products",
            AppView::About => "about",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        AppView::ALL.into_iter().find(|view| view.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::Categories => "Categories",
            AppView::Products => "Products",
            AppView::About => "About",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        self.key()
    }

    /// DOM id of the section element, e.g. `products-view`
    pub fn section_id(&self) -> String {
        format!("{}-view", self.key())
    }
}

/// Which section is visible; exactly one at any time
#[derive(Clone, Copy)]
pub struct ViewRouter {
    active: RwSignal<AppView>,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppView::default()),
        }
    }

    pub fn active(&self) -> AppView {
        self.active.get()
    }

    pub fn is_active(&self, view: AppView) -> bool {
        self.active.get() == view
    }

    pub fn show(&self, view: AppView) {
        if self.active.get_untracked() != view {
            log::debug!("Switching view to {}", view.key());
            self.active.set(view);
        }
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::global_context::query_for_view;

    #[test]
    fn exactly_one_view_is_active() {
        let owner = Owner::new();
        owner.set();
        let router = ViewRouter::new();

        router.show(AppView::Products);

        let active: Vec<AppView> = AppView::ALL
            .into_iter()
            .filter(|view| router.is_active(*view))
            .collect();
        assert_eq!(active, vec![AppView::Products]);
        assert_eq!(query_for_view(router.active()), "active=products");
    }

    #[test]
    fn keys_round_trip_and_unknown_keys_are_rejected() {
        for view in AppView::ALL {
            assert_eq!(AppView::from_key(view.key()), Some(view));
        }
        assert_eq!(AppView::from_key("settings"), None);
        assert_eq!(AppView::Categories.section_id(), "categories-view");
    }
}
