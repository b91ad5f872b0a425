use crate::layout::global_context::AdminContext;
use crate::layout::Modal;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create/edit form for a category, shown in a modal
#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let service = ctx.categories;
    let vm = service.details();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(record) = vm.submit() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = service.save_category(record).await {
                log::debug!("Category not saved: {}", e);
            }
        });
    };

    view! {
        <Modal service=vm.modal>
            <form id="category-form" class="details-form" on:submit=on_submit>
                <h3 id="category-modal-title">{move || vm.form.get().title()}</h3>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form__group">
                    <label for="category-name">{"Name"}</label>
                    <input
                        id="category-name"
                        type="text"
                        required
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| {
                            vm.form.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label for="category-desc">{"Description"}</label>
                    <textarea
                        id="category-desc"
                        rows="3"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| {
                            vm.form.update(|f| f.description = event_target_value(&ev));
                        }
                    ></textarea>
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
