use contracts::domain::a002_product::aggregate::AvailabilityStatus;
use leptos::prelude::*;

/// Human label for an availability status
pub fn status_label(status: AvailabilityStatus) -> &'static str {
    match status {
        AvailabilityStatus::Available => "Available",
        AvailabilityStatus::LowStock => "Low stock",
        AvailabilityStatus::OutOfStock => "Out of stock",
        AvailabilityStatus::Discontinued => "Discontinued",
    }
}

/// CSS classes of the badge, e.g. `status-badge status-LOW_STOCK`
pub fn status_badge_class(status: AvailabilityStatus) -> String {
    format!("status-badge status-{}", status.as_str())
}

/// Availability badge used in product tables
#[component]
pub fn AvailabilityBadge(status: AvailabilityStatus) -> impl IntoView {
    view! {
        <span class=status_badge_class(status)>
            {status_label(status)}
        </span>
    }
}
