use contracts::enums::status::EntityStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge variant for a status value
pub fn status_variant<S: EntityStatus>(status: &S) -> &'static str {
    if status.is_positive() {
        "success"
    } else {
        match status.code() {
            "pending" | "draft" | "processing" => "warning",
            "shipped" => "primary",
            _ => "error",
        }
    }
}

/// Colored badge showing the label of an entity status
pub fn status_badge<S: EntityStatus>(status: S) -> impl IntoView {
    let class = format!("badge--status badge--status-{}", status.code());
    let label = status.display_name();
    view! {
        <Badge variant=status_variant(&status).to_string() class=class>
            {label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::status::{ActiveStatus, OrderStatus, VendorStatus};

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(&ActiveStatus::Active), "success");
        assert_eq!(status_variant(&ActiveStatus::Inactive), "error");
        assert_eq!(status_variant(&VendorStatus::Pending), "warning");
        assert_eq!(status_variant(&OrderStatus::Shipped), "primary");
    }
}
