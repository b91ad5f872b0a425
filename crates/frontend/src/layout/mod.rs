pub mod global_context;
pub mod left;
pub mod modal_service;
pub mod view_router;

pub use modal_service::{Modal, ModalService};

use crate::dashboards::d001_catalog_overview::ui::dashboard::CatalogOverviewDashboard;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::global_context::AdminContext;
use crate::layout::left::Navbar;
use crate::layout::view_router::AppView;
use crate::shared::notifications::ToastContainer;
use crate::system::pages::about::AboutPage;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Navbar   |  one visible view section    |
/// |  (Left)   |  (dashboard / categories /   |
/// |           |   products / about)          |
/// +-----------+------------------------------+
/// ```
///
/// Modal forms and the toast container are mounted once, outside the sections.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let router = ctx.router;

    view! {
        <div class="app-layout">
            <Navbar />

            <main class="app-main">
                <section
                    id=AppView::Dashboard.section_id()
                    class="view-section"
                    class:hidden=move || !router.is_active(AppView::Dashboard)
                >
                    <CatalogOverviewDashboard />
                </section>
                <section
                    id=AppView::Categories.section_id()
                    class="view-section"
                    class:hidden=move || !router.is_active(AppView::Categories)
                >
                    <CategoryList />
                </section>
                <section
                    id=AppView::Products.section_id()
                    class="view-section"
                    class:hidden=move || !router.is_active(AppView::Products)
                >
                    <ProductList />
                </section>
                <section
                    id=AppView::About.section_id()
                    class="view-section"
                    class:hidden=move || !router.is_active(AppView::About)
                >
                    <AboutPage />
                </section>
            </main>

            <CategoryDetails />
            <ProductDetails />
            <ToastContainer />
        </div>
    }
}
