use crate::layout::global_context::AdminContext;
use crate::layout::view_router::AppView;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const EMPTY_PLACEHOLDER: &str = "No categories registered.";

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub id: Option<i64>,
    pub id_label: String,
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryRow {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            id_label: c.id.map(|id| format!("#{}", id)).unwrap_or_default(),
            name: c.name.clone(),
            description: c
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories.iter().map(CategoryRow::from).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let service = ctx.categories;
    let store = service.store();

    let rows = move || store.with(category_rows);

    let handle_delete = move |id: i64| {
        spawn_local(async move {
            if let Err(e) = service.delete_category(id, BrowserConfirm).await {
                log::debug!("Category deletion stopped: {}", e);
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Categories"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| service.open_form(None)>
                        {icon("plus")}
                        {"New category"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| ctx.navigate(AppView::Categories)>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table id="categories-table" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="4" class="text-center">{EMPTY_PLACEHOLDER}</td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let id = row.id;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.id_label}</td>
                                        <td class="table__cell"><strong>{row.name}</strong></td>
                                        <td class="table__cell table__cell--muted">{row.description}</td>
                                        <td class="table__cell">
                                            <button class="btn-icon edit" title="Edit" on:click=move |_| service.open_form(id)>
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

    #[test]
    fn rows_show_hash_id_and_dash_for_missing_description() {
        let rows = category_rows(&[
            Category {
                id: Some(3),
                name: "<Toys>".to_string(),
                description: None,
            },
            Category {
                id: Some(4),
                name: "Garden".to_string(),
                description: Some("Outdoor".to_string()),
            },
        ]);

        assert_eq!(rows[0].id_label, "#3");
        assert_eq!(rows[0].name, "<Toys>");
        assert_eq!(rows[0].description, "-");
        assert_eq!(rows[1].description, "Outdoor");
    }

    #[test]
    fn empty_cache_gives_no_rows() {
        assert!(category_rows(&[]).is_empty());
    }
}
