use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! { <span class=variant_class>{children()}</span> }
}

/// Active/inactive badge of master-data records
#[component]
pub fn StatusBadge(active: bool, children: Children) -> impl IntoView {
    let class = if active {
        "badge badge--status badge--status-active"
    } else {
        "badge badge--status badge--status-inactive"
    };

    view! { <span class=class>{children()}</span> }
}
