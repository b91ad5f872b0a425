use crate::layout::global_context::AdminContext;
use crate::layout::Shell;
use crate::shared::api_utils::GlooTransport;
use crate::shared::config::ClientConfig;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    log::info!("Catalog admin starting, API base: {}", config.api_base);

    // Services, caches and router live in one context shared by every section.
    let ctx = AdminContext::new(config, Rc::new(GlooTransport));
    provide_context(ctx);

    let initial_view = ctx.init_router_integration();
    ctx.navigate(initial_view);

    view! {
        <Shell />
    }
}
