use crate::shared::icons::icon;
use leptos::prelude::*;

/// Label shown between the arrows: "2 / 5 (43)"
pub fn page_info(page: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", page.max(1), total_pages.max(1), total_count)
}

/// Pager for server-side lists. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// Defaults to [10, 25, 50, 100]
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_info(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info() {
        assert_eq!(page_info(2, 5, 43), "2 / 5 (43)");
        assert_eq!(page_info(0, 0, 0), "1 / 1 (0)");
    }
}
