use crate::layout::ModalService;
use contracts::domain::a002_product::aggregate::{AvailabilityStatus, CategoryRef, Product};
use leptos::prelude::*;

/// Editable state of the product form; numeric fields hold the raw input text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
    pub status: AvailabilityStatus,
    pub category_id: Option<i64>,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            stock_quantity: product.stock_quantity.to_string(),
            status: product.availability_status,
            category_id: product.category_id(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit product"
        } else {
            "New product"
        }
    }

    /// Payload for create/update, validated like the backend does
    pub fn to_payload(&self) -> Result<Product, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required");
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number")?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price must be greater than or equal to 0");
        }

        let stock_quantity: i32 = self
            .stock_quantity
            .trim()
            .parse()
            .map_err(|_| "Stock quantity must be a whole number")?;
        if stock_quantity < 0 {
            return Err("Stock quantity cannot be negative");
        }

        let category_id = self.category_id.ok_or("Select a category")?;

        let description = self.description.trim();
        Ok(Product {
            id: self.id,
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price,
            stock_quantity,
            availability_status: self.status,
            category: Some(CategoryRef::by_id(category_id)),
        })
    }
}

/// ViewModel for the product modal form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub modal: ModalService,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            error: RwSignal::new(None),
            modal: ModalService::new(),
        }
    }

    pub fn open(&self, form: ProductForm) {
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
    pub fn submit(&self) -> Option<Product> {
        match self.form.get_untracked().to_payload() {
            Ok(product) => {
                self.error.set(None);
                Some(product)
            }
            Err(msg) => {
                self.error.set(Some(msg.to_string()));
                None
            }
        }
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
