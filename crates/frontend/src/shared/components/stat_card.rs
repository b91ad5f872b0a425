use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard figure with an icon and a label
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional id of the value element
    #[prop(into, optional)]
    value_id: Option<String>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "-".to_string());

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" id=value_id>
                    {formatted}
                </div>
            </div>
        </div>
    }
}
