use crate::layout::global_context::AdminContext;
use crate::layout::view_router::AppView;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::AvailabilityBadge;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const RECENT_PLACEHOLDER: &str = "No recent products.";

/// Catalog overview: counts, inventory value and the latest products
#[component]
#[allow(non_snake_case)]
pub fn CatalogOverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let metrics = ctx.dashboard.metrics();

    let category_count =
        Signal::derive(move || metrics.with(|m| m.as_ref().map(|m| m.category_count.to_string())));
    let product_count =
        Signal::derive(move || metrics.with(|m| m.as_ref().map(|m| m.product_count.to_string())));
    let inventory_value =
        Signal::derive(move || metrics.with(|m| m.as_ref().map(|m| m.inventory_value_label())));

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Dashboard"}</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| ctx.navigate(AppView::Dashboard)>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="stats-grid">
                <StatCard
                    label="Categories"
                    icon_name="categories"
                    value=category_count
                    value_id="total-categories"
                />
                <StatCard
                    label="Products"
                    icon_name="products"
                    value=product_count
                    value_id="total-products"
                />
                <StatCard
                    label="Inventory value"
                    icon_name="money"
                    value=inventory_value
                    value_id="total-value"
                />
            </div>

            <h3>{"Most recent products"}</h3>
            <div class="table-container">
                <table id="dashboard-recent-table" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell table__header-cell--right">"Price"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = metrics.with(|m| m.as_ref().map(|m| m.recent.clone()).unwrap_or_default());
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="4" class="text-center">{RECENT_PLACEHOLDER}</td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| view! {
                                <tr class="table__row">
                                    <td class="table__cell"><strong>{row.name}</strong></td>
                                    <td class="table__cell">{row.category_name}</td>
                                    <td class="table__cell table__cell--right">{row.price_label}</td>
                                    <td class="table__cell"><AvailabilityBadge status=row.status/></td>
                                </tr>
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
