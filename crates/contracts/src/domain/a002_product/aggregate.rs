use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Availability status
// ============================================================================

/// Availability of a product as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    LowStock,
    OutOfStock,
    Discontinued,
}

impl AvailabilityStatus {
    pub const ALL: [AvailabilityStatus; 4] = [
        AvailabilityStatus::Available,
        AvailabilityStatus::LowStock,
        AvailabilityStatus::OutOfStock,
        AvailabilityStatus::Discontinued,
    ];

    /// Wire representation, e.g. `LOW_STOCK`
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "AVAILABLE",
            AvailabilityStatus::LowStock => "LOW_STOCK",
            AvailabilityStatus::OutOfStock => "OUT_OF_STOCK",
            AvailabilityStatus::Discontinued => "DISCONTINUED",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvailabilityStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown availability status: {}", s))
    }
}

// ============================================================================
// Category reference
// ============================================================================

/// Category as embedded in a product.
///
/// The backend returns the whole category; the frontend only sends the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CategoryRef {
    pub fn by_id(id: i64) -> Self {
        Self { id, name: None }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,

    pub stock_quantity: i32,

    pub availability_status: AvailabilityStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

impl Product {
    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id)
    }

    /// Stock valued at the current price
    pub fn inventory_value(&self) -> f64 {
        self.price * f64::from(self.stock_quantity)
    }
}
