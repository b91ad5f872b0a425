use crate::domain::a001_category::ui::picker::{edit_options, parse_category_value};
use crate::layout::global_context::AdminContext;
use crate::layout::Modal;
use crate::shared::components::ui::badge::status_label;
use contracts::domain::a002_product::aggregate::AvailabilityStatus;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create/edit form for a product, shown in a modal
#[component]
#[allow(non_snake_case)]
pub fn ProductDetails() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let service = ctx.products;
    let categories = ctx.categories.store();
    let vm = service.details();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(record) = vm.submit() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = service.save_product(record).await {
                log::debug!("Product not saved: {}", e);
            }
        });
    };

    view! {
        <Modal service=vm.modal>
            <form id="product-form" class="details-form" on:submit=on_submit>
                <h3 id="product-modal-title">{move || vm.form.get().title()}</h3>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form__group">
                    <label for="product-name">{"Name"}</label>
                    <input
                        id="product-name"
                        type="text"
                        required
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| {
                            vm.form.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label for="product-desc">{"Description"}</label>
                    <textarea
                        id="product-desc"
                        rows="3"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| {
                            vm.form.update(|f| f.description = event_target_value(&ev));
                        }
                    ></textarea>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label for="product-price">{"Price"}</label>
                        <input
                            id="product-price"
                            type="number"
                            step="0.01"
                            min="0"
                            required
                            prop:value=move || vm.form.get().price
                            on:input=move |ev| {
                                vm.form.update(|f| f.price = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form__group">
                        <label for="product-stock">{"Stock"}</label>
                        <input
                            id="product-stock"
                            type="number"
                            step="1"
                            min="0"
                            required
                            prop:value=move || vm.form.get().stock_quantity
                            on:input=move |ev| {
                                vm.form.update(|f| f.stock_quantity = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label for="product-status">{"Status"}</label>
                        <select
                            id="product-status"
                            prop:value=move || vm.form.get().status.as_str()
                            on:change=move |ev| {
                                if let Ok(status) = event_target_value(&ev).parse::<AvailabilityStatus>() {
                                    vm.form.update(|f| f.status = status);
                                }
                            }
                        >
                            {AvailabilityStatus::ALL
                                .into_iter()
                                .map(|status| view! {
                                    <option value=status.as_str()>{status_label(status)}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <label for="product-category">{"Category"}</label>
                        <select
                            id="product-category"
                            required
                            prop:value=move || {
                                vm.form.get().category_id.map(|id| id.to_string()).unwrap_or_default()
                            }
                            on:change=move |ev| {
                                let value = parse_category_value(&event_target_value(&ev));
                                vm.form.update(|f| f.category_id = value);
                            }
                        >
                            {move || {
                                categories.with(|cats| edit_options(cats))
                                    .into_iter()
                                    .map(|opt| view! {
                                        <option value=opt.value disabled=opt.disabled>{opt.label}</option>
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </div>

                <div class="details-form__actions">
                    <button type="button" class="button button--secondary" on:click=move |_| vm.close()>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="button button--primary">
                        {"Save"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
