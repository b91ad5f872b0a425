use crate::layout::global_context::AdminContext;
use crate::layout::view_router::AppView;
use crate::shared::icons;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let router = ctx.router;

    view! {
        <nav class="main-nav-bar">
            <div class="main-nav-bar__brand">"Catalog Admin"</div>
            <ul>
                {AppView::ALL.into_iter().map(|target| {
                    view! {
                        <li
                            class="nav-item"
                            class:active=move || router.is_active(target)
                            data-target=target.section_id()
                            on:click=move |_| ctx.navigate(target)
                        >
                            {icons::icon(target.icon_name())}
                            <span>{target.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
