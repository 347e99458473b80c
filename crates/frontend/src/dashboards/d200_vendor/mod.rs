use contracts::system::session::Realm;
use leptos::prelude::*;

use crate::dashboards::overview::{OverviewCard, OverviewPage};
use crate::layout::left::{MenuGroup, MenuItem};
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;

pub fn vendor_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup::Link(MenuItem::new("/vendor", "Dashboard", "eye")),
        MenuGroup::Link(MenuItem::new("/vendor/products", "My products", "products")),
        MenuGroup::Link(MenuItem::new("/vendor/orders", "Orders", "orders")),
    ]
}

fn vendor_cards() -> Vec<OverviewCard> {
    vec![
        OverviewCard {
            label: "Products",
            icon: "products",
            href: "/vendor/products",
            count_path: "/api/vendors/products",
        },
        OverviewCard {
            label: "Orders",
            icon: "orders",
            href: "/vendor/orders",
            count_path: "/api/vendors/orders",
        },
    ]
}

/// `/vendor/*`, open to approved vendors only
#[component]
pub fn VendorDashboard() -> impl IntoView {
    view! {
        <RequireSession realm=Realm::Vendor>
            <Shell realm=Realm::Vendor title="Seller Center" menu=vendor_menu() />
        </RequireSession>
    }
}

#[component]
pub fn VendorOverview() -> impl IntoView {
    view! { <OverviewPage title="Dashboard" cards=vendor_cards() /> }
}
