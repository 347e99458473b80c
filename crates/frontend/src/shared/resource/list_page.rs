//! Generic management page: header, filters, pager, table and the modal form.

use contracts::enums::status::{EntityStatus, Toggle};
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::controller::ResourceController;
use super::form::resource_form;
use super::{ColumnKind, Resource};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::status_badge;
use crate::shared::config::use_config;
use crate::shared::icons::icon;

#[derive(Clone, Default)]
pub struct ListPageOptions {
    /// Icon name from `icons::icon`
    pub icon: Option<&'static str>,
    /// Extra "view" action; receives the row id
    pub on_view: Option<Callback<String>>,
    /// Renders a "Back" button in the header
    pub on_back: Option<Callback<()>>,
    /// Edit on a separate page instead of the modal; receives the row id
    pub on_edit_page: Option<Callback<String>>,
}

fn cell_class(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Text => "table__cell",
        ColumnKind::Money => "table__cell table__cell--money text-right",
        ColumnKind::Muted => "table__cell table__cell--muted",
    }
}

/// Text of the single placeholder row; `None` when there are rows to show.
/// `has_rows` is about the loaded page, `visible_rows` about what passes the
/// client-side filters.
fn placeholder_text(title: &str, loading: bool, has_rows: bool, visible_rows: usize) -> Option<String> {
    let title = title.to_lowercase();
    if loading && !has_rows {
        Some(format!("Loading {}...", title))
    } else if visible_rows > 0 {
        None
    } else if has_rows {
        Some(format!("No {} match the current filters", title))
    } else {
        Some(format!("No {} found", title))
    }
}

/// A refetch keeps the old rows on screen, dimmed
fn table_class(loading: bool) -> &'static str {
    if loading {
        "table table--loading"
    } else {
        "table"
    }
}

fn row_view<R: Resource>(
    ctl: ResourceController<R>,
    columns: StoredValue<Vec<super::Column<R::Item>>>,
    item: R::Item,
    on_view: Option<Callback<String>>,
    on_edit_page: Option<Callback<String>>,
) -> impl IntoView {
    let id = R::id(&item).to_string();
    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|c| view! { <td class=cell_class(c.kind)>{(c.render)(&item)}</td> })
            .collect_view()
    });
    let has_status = !<R::Status as EntityStatus>::all().is_empty();
    let status = R::status(&item);
    let status_cell = has_status.then(|| {
        view! { <td class="table__cell">{status.map(status_badge)}</td> }
    });

    let view_button = on_view.map(|cb| {
        let id = id.clone();
        view! {
            <button class="button button--icon" title="View" on:click=move |_| cb.run(id.clone())>
                {icon("eye")}
            </button>
        }
    });
    let edit_button = R::can_edit().then(|| {
        let id = id.clone();
        view! {
            <button
                class="button button--icon"
                title="Edit"
                on:click=move |_| match on_edit_page {
                    Some(cb) => cb.run(id.clone()),
                    None => ctl.open_edit(&id),
                }
            >
                {icon("edit")}
            </button>
        }
    });
    let toggle_button = status.filter(|s| s.can_toggle()).map(|current| {
        let id = id.clone();
        let title = match current.is_positive() {
            true => "Deactivate",
            false => "Activate",
        };
        view! {
            <button
                class="button button--icon"
                title=title
                on:click=move |_| ctl.toggle_status(id.clone())
            >
                {icon("toggle")}
            </button>
        }
    });
    let delete_button = R::can_delete().then(|| {
        let id = id.clone();
        view! {
            <button
                class="button button--icon button--danger"
                title="Delete"
                disabled=move || ctl.state.with(|s| s.removing.is_some())
                on:click=move |_| ctl.remove(id.clone())
            >
                {icon("trash")}
            </button>
        }
    });

    view! {
        <tr class="table__row">
            {cells}
            {status_cell}
            <td class="table__cell table__cell--actions">
                {view_button}
                {edit_button}
                {toggle_button}
                {delete_button}
            </td>
        </tr>
    }
}

/// Full list page of `R`. Loads the first page on mount.
pub fn resource_list_page<R: Resource>(options: ListPageOptions) -> impl IntoView {
    let ctl = ResourceController::<R>::new();
    let config = use_config();
    ctl.load();

    let columns = StoredValue::new(R::columns());
    let headers: Vec<&'static str> = R::columns().iter().map(|c| c.header).collect();
    let has_status = !<R::Status as EntityStatus>::all().is_empty();
    let status_options = R::status_options();
    let on_view = options.on_view;
    let on_back = options.on_back;
    let on_edit_page = options.on_edit_page;

    let loading = Memo::new(move |_| ctl.state.with(|s| s.is_loading()));
    let has_rows = Memo::new(move |_| ctl.state.with(|s| !s.list.items.is_empty()));
    let visible = Memo::new(move |_| ctl.state.with(|s| s.visible_items()));
    let vendors = Memo::new(move |_| ctl.state.with(|s| s.vendor_options()));

    let filters_expanded = RwSignal::new(true);
    let current_page = Signal::derive(move || ctl.state.with(|s| s.filter.page));
    let total_pages = Signal::derive(move || ctl.state.with(|s| s.list.total_pages));
    let total_count = Signal::derive(move || ctl.state.with(|s| s.list.total_count));
    let page_size = Signal::derive(move || ctl.state.with(|s| s.filter.limit));
    let active_filters = Signal::derive(move || {
        ctl.state.with(|s| {
            [
                !s.filter.search_term.trim().is_empty(),
                s.filter.status_filter.is_some(),
                s.filter.vendor.is_some(),
            ]
            .iter()
            .filter(|active| **active)
            .count()
        })
    });
    let subtitle = Signal::derive(move || {
        Some(format!("{} {}", total_count.get(), R::TITLE.to_lowercase()))
    });
    let page_size_options = config.page_size_options.clone();

    let pager = move || {
        view! {
            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| ctl.set_page(page))
                on_page_size_change=Callback::new(move |size| ctl.set_limit(size))
                page_size_options=page_size_options.clone()
            />
        }
    };

    let status_select = (!status_options.is_empty()).then(|| {
        view! {
            <div class="form__group form__group--inline">
                <label class="form__label">"Status"</label>
                <select
                    class="form__select"
                    prop:value=move || ctl.state.with(|s| s.filter.status_filter.clone().unwrap_or_default())
                    on:change=move |ev| ctl.set_status_filter(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {status_options
                        .into_iter()
                        .map(|(code, label)| view! { <option value=code>{label}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    });

    let vendor_select = move || {
        let vendors = vendors.get();
        (!vendors.is_empty()).then(|| {
            view! {
                <div class="form__group form__group--inline">
                    <label class="form__label">"Vendor"</label>
                    <select
                        class="form__select"
                        prop:value=move || ctl.state.with(|s| s.filter.vendor.clone().unwrap_or_default())
                        on:change=move |ev| ctl.set_vendor_filter(event_target_value(&ev))
                    >
                        <option value="">"All vendors"</option>
                        {vendors
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect_view()}
                    </select>
                </div>
            }
        })
    };

    let colspan = (headers.len() + usize::from(has_status) + 1).to_string();
    let rows = move || {
        let items = visible.get();
        match placeholder_text(R::TITLE, loading.get(), has_rows.get(), items.len()) {
            Some(text) => view! {
                <tr class="table__row">
                    <td class="table__cell table__placeholder" colspan=colspan.clone()>{text}</td>
                </tr>
            }
            .into_any(),
            None => items
                .into_iter()
                .map(|item| row_view(ctl, columns, item, on_view, on_edit_page))
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="page">
            <PageHeader title=R::TITLE icon_name=options.icon.unwrap_or("filter") subtitle=subtitle>
                {on_back.map(|cb| view! {
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| cb.run(())>
                        {icon("chevron-left")}
                        "Back"
                    </Button>
                })}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctl.load()>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                {R::can_create().then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctl.open_create()>
                        {icon("plus")}
                        {format!("Add {}", super::field::capitalize(R::ELEMENT))}
                    </Button>
                })}
            </PageHeader>

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=active_filters
                pagination_controls=pager
            >
                <div class="form__group form__group--inline form__group--search">
                    <input
                        type="search"
                        class="form__input"
                        placeholder=format!("Search {}...", R::TITLE.to_lowercase())
                        prop:value=move || ctl.state.with(|s| s.filter.search_term.clone())
                        on:input=move |ev| ctl.set_search_term(event_target_value(&ev))
                        on:keydown=move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ctl.apply_search();
                            }
                        }
                    />
                    <button class="button button--secondary" title="Search" on:click=move |_| ctl.apply_search()>
                        {icon("search")}
                    </button>
                </div>
                {status_select}
                {vendor_select}
            </FilterPanel>

            <Show when=move || loading.get() && has_rows.get()>
                <div class="table__progress">{format!("Loading {}...", R::TITLE.to_lowercase())}</div>
            </Show>
            <div class=move || table_class(loading.get()) aria-busy=move || loading.get().to_string()>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {headers
                                .into_iter()
                                .map(|h| view! { <th class="table__header-cell">{h}</th> })
                                .collect_view()}
                            {has_status.then(|| view! { <th class="table__header-cell">"Status"</th> })}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || ctl.state.with(|s| s.modal.is_some())>
                {resource_form(ctl)}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_text() {
        assert_eq!(
            placeholder_text("Categories", true, false, 0).as_deref(),
            Some("Loading categories...")
        );
        // a refetch of a filled page keeps the rows
        assert_eq!(placeholder_text("Categories", true, true, 3), None);
        assert_eq!(
            placeholder_text("Categories", false, true, 0).as_deref(),
            Some("No categories match the current filters")
        );
        assert_eq!(
            placeholder_text("Categories", false, false, 0).as_deref(),
            Some("No categories found")
        );
    }

    #[test]
    fn test_table_is_marked_while_loading() {
        assert_eq!(table_class(true), "table table--loading");
        assert_eq!(table_class(false), "table");
    }

    #[test]
    fn test_cell_class() {
        assert_eq!(cell_class(ColumnKind::Money), "table__cell table__cell--money text-right");
        assert_eq!(cell_class(ColumnKind::Text), "table__cell");
    }
}
