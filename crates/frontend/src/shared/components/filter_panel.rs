use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter bar. The pager sits in the header so it stays visible
/// while the filters are folded away; children are the filter inputs.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Shown as a badge next to the title when non-zero
    #[prop(into)]
    active_filters_count: Signal<usize>,
    #[prop(into)] pagination_controls: ViewFn,
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| is_expanded.update(|e| *e = !*e);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>
            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}
