use crate::layout::global_context::AdminContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static information about the admin panel and the backend it talks to
#[component]
#[allow(non_snake_case)]
pub fn AboutPage() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let api_base = ctx.config.with_value(|c| c.api_base.clone());

    view! {
        <div class="content">
            <div class="header">
                <h2>{icon("about")} {"About"}</h2>
            </div>
            <div class="about-card">
                <p>{"Catalog administration: categories, products and an inventory overview."}</p>
                <dl class="about-card__facts">
                    <dt>{"Version"}</dt>
                    <dd id="about-version">{APP_VERSION}</dd>
                    <dt>{"API base"}</dt>
                    <dd id="about-api-base"><code>{api_base}</code></dd>
                </dl>
            </div>
        </div>
    }
}
