pub mod view;
pub mod view_model;

pub use view::ProductDetails;
pub use view_model::{ProductDetailsViewModel, ProductForm};
