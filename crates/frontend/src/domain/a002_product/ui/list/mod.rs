pub mod state;

use crate::domain::a001_category::ui::picker::{filter_options, parse_category_value};
use crate::layout::global_context::AdminContext;
use crate::layout::view_router::AppView;
use crate::shared::components::table::format_price;
use crate::shared::components::ui::badge::AvailabilityBadge;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::{AvailabilityStatus, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const EMPTY_PLACEHOLDER: &str = "No products to display.";
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category name of a product: the embedded one, else the category cache
pub fn resolve_category_name(product: &Product, categories: &[Category]) -> Option<String> {
    let category = product.category.as_ref()?;
    if let Some(name) = category.name.as_ref().filter(|n| !n.is_empty()) {
        return Some(name.clone());
    }
    categories
        .iter()
        .find(|c| c.id == Some(category.id))
        .map(|c| c.name.clone())
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: Option<i64>,
    pub id_label: String,
    pub name: String,
    pub description: Option<String>,
    pub category_name: String,
    pub price_label: String,
    pub stock: i32,
    pub status: AvailabilityStatus,
}

impl ProductRow {
    pub fn new(product: &Product, categories: &[Category]) -> Self {
        Self {
            id: product.id,
            id_label: product.id.map(|id| format!("#{}", id)).unwrap_or_default(),
            name: product.name.clone(),
            description: product
                .description
                .clone()
                .filter(|d| !d.trim().is_empty()),
            category_name: resolve_category_name(product, categories)
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            price_label: format_price(product.price),
            stock: product.stock_quantity,
            status: product.availability_status,
        }
    }
}

/// Products in the given category, or all of them when no filter is set
pub fn filter_products<'a>(products: &'a [Product], category: Option<i64>) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.is_none() || p.category_id() == category)
        .collect()
}

/// Drop a filter whose category no longer exists
pub fn resolve_filter(selected: Option<i64>, categories: &[Category]) -> Option<i64> {
    selected.filter(|id| categories.iter().any(|c| c.id == Some(*id)))
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let service = ctx.products;
    let products = service.store();
    let categories = ctx.categories.store();
    let list_state = service.list_state();

    // A reload that removes the filtered category resets the filter to "all"
    Effect::new(move |_| {
        let selected = list_state.with_untracked(|s| s.category_filter);
        let resolved = categories.with(|cats| resolve_filter(selected, cats));
        if resolved != selected {
            list_state.update(|s| s.category_filter = resolved);
        }
    });

    let active_filter = move || {
        let selected = list_state.with(|s| s.category_filter);
        categories.with(|cats| resolve_filter(selected, cats))
    };

    let rows = move || {
        let filter = active_filter();
        categories.with(|cats| {
            products.with(|items| {
                filter_products(items, filter)
                    .into_iter()
                    .map(|p| ProductRow::new(p, cats))
                    .collect::<Vec<_>>()
            })
        })
    };

    let handle_delete = move |id: i64| {
        spawn_local(async move {
            if let Err(e) = service.delete_product(id, BrowserConfirm).await {
                log::debug!("Product deletion stopped: {}", e);
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Products"}</h2>
                <div class="header__actions">
                    <select
                        id="filter-category-select"
                        class="filter-select"
                        prop:value=move || active_filter().map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            let value = parse_category_value(&event_target_value(&ev));
                            list_state.update(|s| s.category_filter = value);
                        }
                    >
                        {move || {
                            categories.with(|cats| filter_options(cats))
                                .into_iter()
                                .map(|opt| {
                                    // options are rebuilt on every reload; keep the filter shown
                                    let option = opt.clone();
                                    view! {
                                        <option
                                            value=opt.value
                                            prop:selected=move || option.is_selected(active_filter())
                                        >
                                            {opt.label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <button class="button button--primary" on:click=move |_| { service.open_form(None); }>
                        {icon("plus")}
                        {"New product"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| ctx.navigate(AppView::Products)>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table id="products-table" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell table__header-cell--right">"Price"</th>
                            <th class="table__header-cell table__header-cell--right">"Stock"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="7" class="text-center">{EMPTY_PLACEHOLDER}</td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let id = row.id;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.id_label}</td>
                                        <td class="table__cell">
                                            <strong>{row.name}</strong>
                                            {row.description.map(|d| view! {
                                                <div class="table__cell--muted">{d}</div>
                                            })}
                                        </td>
                                        <td class="table__cell">{row.category_name}</td>
                                        <td class="table__cell table__cell--right">{row.price_label}</td>
                                        <td class="table__cell table__cell--right">{row.stock}</td>
                                        <td class="table__cell"><AvailabilityBadge status=row.status/></td>
                                        <td class="table__cell">
                                            <button class="btn-icon edit" title="Edit" on:click=move |_| { service.open_form(id); }>
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="btn-icon delete"
                                                title="Delete"
                                                disabled=id.is_none()
                                                on:click=move |_| {
                                                    if let Some(id) = id {
                                                        handle_delete(id);
                                                    }
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::aggregate::CategoryRef;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: Some(id),
            name: name.to_string(),
            description: None,
        }
    }

    fn product(id: i64, category: Option<CategoryRef>) -> Product {
        Product {
            id: Some(id),
            name: format!("Product {}", id),
            price: 10.0,
            stock_quantity: 1,
            category,
            ..Default::default()
        }
    }

    #[test]
    fn filter_keeps_matching_category_only() {
        let products = vec![
            product(1, Some(CategoryRef::by_id(1))),
            product(2, Some(CategoryRef::by_id(2))),
            product(3, None),
            product(4, Some(CategoryRef::by_id(1))),
        ];

        let ids: Vec<_> = filter_products(&products, Some(1))
            .iter()
            .filter_map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);

        assert_eq!(filter_products(&products, None).len(), 4);
    }

    #[test]
    fn vanished_category_clears_filter() {
        let categories = vec![category(1, "Books")];

        assert_eq!(resolve_filter(Some(1), &categories), Some(1));
        assert_eq!(resolve_filter(Some(7), &categories), None);
        assert_eq!(resolve_filter(None, &categories), None);
    }

    #[test]
    fn category_name_prefers_embedded_then_cache() {
        let categories = vec![category(1, "Books"), category(2, "Games")];
        let embedded = product(
            1,
            Some(CategoryRef {
                id: 1,
                name: Some("Livres".to_string()),
            }),
        );
        let by_id = product(2, Some(CategoryRef::by_id(2)));
        let unknown = product(3, Some(CategoryRef::by_id(9)));

        assert_eq!(
            resolve_category_name(&embedded, &categories).as_deref(),
            Some("Livres")
        );
        assert_eq!(
            resolve_category_name(&by_id, &categories).as_deref(),
            Some("Games")
        );
        assert_eq!(resolve_category_name(&unknown, &categories), None);
    }

    #[test]
    fn row_formats_price_and_falls_back_to_uncategorized() {
        let mut p = product(5, None);
        p.price = 10.0;
        p.description = Some("  ".to_string());

        let row = ProductRow::new(&p, &[]);

        assert_eq!(row.id_label, "#5");
        assert_eq!(row.price_label, "$10.00");
        assert_eq!(row.category_name, UNCATEGORIZED);
        assert_eq!(row.description, None);
    }
}
