use crate::layout::ModalService;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

/// Editable state of the category form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit category"
        } else {
            "New category"
        }
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        Ok(())
    }

    /// Payload for create/update; a blank description is sent as absent
    pub fn to_payload(&self) -> Result<Category, &'static str> {
        self.validate()?;
        let description = self.description.trim();
        Ok(Category {
            id: self.id,
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// ViewModel for the category modal form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryForm>,
    pub error: RwSignal<Option<String>>,
    pub modal: ModalService,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryForm::default()),
            error: RwSignal::new(None),
            modal: ModalService::new(),
        }
    }

    /// Reset the form to `form` and show the modal
    pub fn open(&self, form: CategoryForm) {
        self.form.set(form);
        self.error.set(None);
        self.modal.show();
    }

    pub fn close(&self) {
        self.modal.hide();
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open_untracked()
    }

    /// Validated payload, or `None` with the message shown inline
    pub fn submit(&self) -> Option<Category> {
        match self.form.get_untracked().to_payload() {
            Ok(category) => {
                self.error.set(None);
                Some(category)
            }
            Err(msg) => {
                self.error.set(Some(msg.to_string()));
                None
            }
        }
    }
}

impl Default for CategoryDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let form = CategoryForm {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_payload(), Err("Name is required"));
    }

    #[test]
    fn payload_keeps_id_and_drops_blank_description() {
        let form = CategoryForm {
            id: Some(4),
            name: " Tools ".to_string(),
            description: "  ".to_string(),
        };

        let payload = form.to_payload().unwrap();

        assert_eq!(payload.id, Some(4));
        assert_eq!(payload.name, "Tools");
        assert_eq!(payload.description, None);
        assert_eq!(form.title(), "Edit category");
    }

    #[test]
    fn invalid_submit_keeps_modal_open_with_message() {
        let owner = Owner::new();
        owner.set();
        let vm = CategoryDetailsViewModel::new();
        vm.open(CategoryForm::default());

        assert_eq!(vm.submit(), None);
        assert!(vm.is_open());
        assert_eq!(vm.error.get_untracked().as_deref(), Some("Name is required"));
    }
}
