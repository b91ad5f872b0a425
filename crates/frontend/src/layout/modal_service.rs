use leptos::prelude::*;

/// Visibility of one modal form
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    /// Show the modal
    pub fn show(&self) {
        self.is_visible.set(true);
    }

    /// Hide the modal
    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    /// Whether the modal is open (tracked, for views)
    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }

    /// Whether the modal is open, read from services and handlers
    pub fn is_open_untracked(&self) -> bool {
        self.is_visible.get_untracked()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal overlay bound to a [`ModalService`].
///
/// ```rust,ignore
/// view! {
///     <Modal service=vm.modal>
///         <CategoryForm />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(service: ModalService, children: ChildrenFn) -> impl IntoView {
    view! {
        {move || {
            if service.is_open() {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| service.hide()
                    >
                        <div
                            class="modal-content"
                            on:click=|e| e.stop_propagation()
                        >
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
