use contracts::system::session::Realm;
use leptos::prelude::*;

use crate::dashboards::overview::{OverviewCard, OverviewPage};
use crate::layout::left::{MenuGroup, MenuItem};
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;

pub fn admin_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup::Link(MenuItem::new("/admin", "Dashboard", "eye")),
        MenuGroup::Group {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec![
                MenuItem::new("/admin/products", "Products", "products"),
                MenuItem::new("/admin/categories", "Categories", "categories"),
                MenuItem::new("/admin/subcategories", "Subcategories", "subcategories"),
            ],
        },
        MenuGroup::Group {
            id: "sales",
            label: "Sales",
            icon: "orders",
            items: vec![
                MenuItem::new("/admin/orders", "Orders", "orders"),
                MenuItem::new("/admin/discounts", "Discounts", "discounts"),
            ],
        },
        MenuGroup::Group {
            id: "accounts",
            label: "Accounts",
            icon: "users",
            items: vec![
                MenuItem::new("/admin/customers", "Customers", "customers"),
                MenuItem::new("/admin/vendors", "Vendors", "vendors"),
            ],
        },
        MenuGroup::Link(MenuItem::new("/admin/help", "Help content", "help")),
    ]
}

fn admin_cards() -> Vec<OverviewCard> {
    vec![
        OverviewCard {
            label: "Products",
            icon: "products",
            href: "/admin/products",
            count_path: "/api/admins/products",
        },
        OverviewCard {
            label: "Orders",
            icon: "orders",
            href: "/admin/orders",
            count_path: "/api/admins/orders",
        },
        OverviewCard {
            label: "Customers",
            icon: "customers",
            href: "/admin/customers",
            count_path: "/api/admins/customers",
        },
        OverviewCard {
            label: "Vendors",
            icon: "vendors",
            href: "/admin/vendors",
            count_path: "/api/admins/vendors",
        },
    ]
}

/// `/admin/*`: gate, shell and sidebar; pages render in the outlet
#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <RequireSession realm=Realm::Admin>
            <Shell realm=Realm::Admin title="Admin Panel" menu=admin_menu() />
        </RequireSession>
    }
}

#[component]
pub fn AdminOverview() -> impl IntoView {
    view! { <OverviewPage title="Dashboard" cards=admin_cards() /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_card_has_a_menu_entry() {
        let links = MenuGroup::links(&admin_menu());
        for card in admin_cards() {
            assert!(links.iter().any(|l| l.href == card.href), "{}", card.href);
        }
    }

    #[test]
    fn test_menu_stays_in_admin_area() {
        assert!(MenuGroup::links(&admin_menu())
            .iter()
            .all(|l| l.href.starts_with("/admin")));
    }
}
