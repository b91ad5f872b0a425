pub mod view;
pub mod view_model;

pub use view::CategoryDetails;
pub use view_model::{CategoryDetailsViewModel, CategoryForm};
