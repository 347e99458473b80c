use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Thousands separated with non-breaking spaces: `12345 -> "12 345"`
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// `None` while loading or after an error
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Page the card links to
    href: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().map(format_count).unwrap_or_else(|| "-".to_string())}
            </div>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1000), "1\u{00a0}000");
        assert_eq!(format_count(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
