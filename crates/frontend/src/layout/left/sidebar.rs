//! Dashboard sidebar: plain links and collapsible groups of links.

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl MenuItem {
    pub const fn new(href: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { href, label, icon }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuGroup {
    Link(MenuItem),
    Group {
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        items: Vec<MenuItem>,
    },
}

impl MenuGroup {
    /// Every link of the menu, groups flattened
    pub fn links(groups: &[MenuGroup]) -> Vec<MenuItem> {
        groups
            .iter()
            .flat_map(|g| match g {
                MenuGroup::Link(item) => vec![item.clone()],
                MenuGroup::Group { items, .. } => items.clone(),
            })
            .collect()
    }

    /// Ids of the groups, for expanding them all initially
    pub fn group_ids(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .filter_map(|g| match g {
                MenuGroup::Group { id, .. } => Some(*id),
                MenuGroup::Link(_) => None,
            })
            .collect()
    }
}

fn menu_link(item: MenuItem, padding: &'static str) -> impl IntoView {
    view! {
        <A href=item.href exact=true attr:class="app-sidebar__item" attr:style=format!("padding-left: {}", padding)>
            <div class="app-sidebar__item-content">
                {icon(item.icon)}
                <span>{item.label}</span>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar(groups: Vec<MenuGroup>) -> impl IntoView {
    let ctx = use_layout();

    view! {
        <div class="app-sidebar__content">
            {groups
                .into_iter()
                .map(|group| match group {
                    MenuGroup::Link(item) => menu_link(item, "12px").into_any(),
                    MenuGroup::Group { id, label, icon: group_icon, items } => {
                        let expanded = move || ctx.expanded_groups.with(|g| g.contains(&id));
                        let items = StoredValue::new(items);
                        view! {
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| ctx.toggle_group(id)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(group_icon)}
                                        <span>{label}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=expanded
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>
                                <Show when=expanded>
                                    <div class="app-sidebar__children">
                                        {items
                                            .get_value()
                                            .into_iter()
                                            .map(|item| menu_link(item, "24px"))
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<MenuGroup> {
        vec![
            MenuGroup::Link(MenuItem::new("/admin", "Overview", "eye")),
            MenuGroup::Group {
                id: "catalog",
                label: "Catalog",
                icon: "products",
                items: vec![
                    MenuItem::new("/admin/products", "Products", "products"),
                    MenuItem::new("/admin/categories", "Categories", "categories"),
                ],
            },
        ]
    }

    #[test]
    fn test_links_flatten_groups() {
        let hrefs: Vec<&str> = MenuGroup::links(&menu()).iter().map(|i| i.href).collect();
        assert_eq!(hrefs, vec!["/admin", "/admin/products", "/admin/categories"]);
    }

    #[test]
    fn test_group_ids() {
        assert_eq!(MenuGroup::group_ids(&menu()), vec!["catalog"]);
    }
}
