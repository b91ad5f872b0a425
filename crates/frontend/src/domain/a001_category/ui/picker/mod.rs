//! Option lists for category dropdowns, rebuilt from the category cache

use contracts::domain::a001_category::aggregate::Category;

pub const EDIT_PLACEHOLDER: &str = "Select a category";
pub const FILTER_ALL: &str = "All categories";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Empty for the leading placeholder/"all" entry
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    /// Whether this option shows `current`; the lead entry stands for `None`
    pub fn is_selected(&self, current: Option<i64>) -> bool {
        parse_category_value(&self.value) == current
    }

    fn lead(label: &str, disabled: bool) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled,
        }
    }
}

fn category_options(categories: &[Category]) -> impl Iterator<Item = SelectOption> + '_ {
    categories.iter().filter_map(|c| {
        c.id.map(|id| SelectOption {
            value: id.to_string(),
            label: c.name.clone(),
            disabled: false,
        })
    })
}

/// Options of the category dropdown in the product form
pub fn edit_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::lead(EDIT_PLACEHOLDER, true))
        .chain(category_options(categories))
        .collect()
}

/// Options of the category filter above the product table
pub fn filter_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::lead(FILTER_ALL, false))
        .chain(category_options(categories))
        .collect()
}

/// Dropdown value back to a category id; the empty lead entry gives `None`
pub fn parse_category_value(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
