//! Figures shown on the catalog overview, computed from the two caches

use crate::shared::components::table::{format_money, format_price};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::{AvailabilityStatus, Product};

/// Number of rows in the "most recent" table
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct RecentProductRow {
    pub name: String,
    /// Embedded category name, `-` when there is none
    pub category_name: String,
    pub price_label: String,
    pub status: AvailabilityStatus,
}

impl From<&Product> for RecentProductRow {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            category_name: p
                .category
                .as_ref()
                .and_then(|c| c.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "-".to_string()),
            price_label: format_price(p.price),
            status: p.availability_status,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogMetrics {
    pub category_count: usize,
    pub product_count: usize,
    pub inventory_value: f64,
    pub recent: Vec<RecentProductRow>,
}

impl CatalogMetrics {
    pub fn compute(categories: &[Category], products: &[Product]) -> Self {
        let mut by_id: Vec<&Product> = products.iter().collect();
        // highest id first; unsaved records (no id) sort last
        by_id.sort_by(|a, b| b.id.cmp(&a.id));

        Self {
            category_count: categories.len(),
            product_count: products.len(),
            inventory_value: products
                .iter()
                .map(Product::inventory_value)
                .fold(0.0, |acc, v| acc + v),
            recent: by_id
                .into_iter()
                .take(RECENT_LIMIT)
                .map(RecentProductRow::from)
                .collect(),
        }
    }

    pub fn inventory_value_label(&self) -> String {
        format_money(self.inventory_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::aggregate::CategoryRef;

    fn product(id: i64, price: f64, stock: i32) -> Product {
        Product {
            id: Some(id),
            name: format!("P{}", id),
            price,
            stock_quantity: stock,
            ..Default::default()
        }
    }

    #[test]
    fn inventory_value_sums_price_times_stock() {
        let products = vec![product(1, 10.0, 3), product(2, 5.5, 2)];

        let metrics = CatalogMetrics::compute(&[], &products);

        assert_eq!(metrics.product_count, 2);
        assert_eq!(metrics.inventory_value, 41.0);
        assert_eq!(metrics.inventory_value_label(), "$41.00");
    }

    #[test]
    fn recent_lists_at_most_five_by_descending_id() {
        let products: Vec<_> = [3, 7, 1, 9, 4, 8, 2]
            .into_iter()
            .map(|id| product(id, 1.0, 1))
            .collect();

        let metrics = CatalogMetrics::compute(&[], &products);

        let names: Vec<_> = metrics.recent.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["P9", "P8", "P7", "P4", "P3"]);
    }

    #[test]
    fn recent_row_uses_dash_without_category() {
        let mut with_category = product(2, 12.0, 1);
        with_category.category = Some(CategoryRef {
            id: 1,
            name: Some("Books".to_string()),
        });
        let without = product(1, 3.0, 1);

        let metrics = CatalogMetrics::compute(&[], &[with_category, without]);

        assert_eq!(metrics.recent[0].category_name, "Books");
        assert_eq!(metrics.recent[0].price_label, "$12.00");
        assert_eq!(metrics.recent[1].category_name, "-");
    }

    #[test]
    fn empty_catalog_is_all_zero() {
        let metrics = CatalogMetrics::compute(&[], &[]);

        assert_eq!(metrics.category_count, 0);
        assert!(metrics.recent.is_empty());
        assert!(metrics.inventory_value.is_sign_positive());
        assert_eq!(metrics.inventory_value_label(), "$0.00");
    }
}
