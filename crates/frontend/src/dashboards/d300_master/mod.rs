use contracts::system::session::Realm;
use leptos::prelude::*;

use crate::dashboards::overview::{OverviewCard, OverviewPage};
use crate::layout::left::{MenuGroup, MenuItem};
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;

pub fn master_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup::Link(MenuItem::new("/master", "Dashboard", "eye")),
        MenuGroup::Link(MenuItem::new("/master/admins", "Admins", "users")),
    ]
}

/// `/master/*`: administrator accounts
#[component]
pub fn MasterDashboard() -> impl IntoView {
    view! {
        <RequireSession realm=Realm::Master>
            <Shell realm=Realm::Master title="Master Admin" menu=master_menu() />
        </RequireSession>
    }
}

#[component]
pub fn MasterOverview() -> impl IntoView {
    let cards = vec![OverviewCard {
        label: "Admins",
        icon: "users",
        href: "/master/admins",
        count_path: "/api/admins/master/admins",
    }];
    view! { <OverviewPage title="Dashboard" cards=cards /> }
}
