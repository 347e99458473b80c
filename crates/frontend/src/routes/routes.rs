use contracts::system::session::Realm;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes, A};
use leptos_router::path;

use crate::dashboards::d100_admin::{AdminDashboard, AdminOverview};
use crate::dashboards::d200_vendor::{VendorDashboard, VendorOverview};
use crate::dashboards::d300_master::{MasterDashboard, MasterOverview};
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_subcategory::ui::list::SubcategoryList;
use crate::domain::a003_product::ui::list::{AdminProductList, VendorProductList};
use crate::domain::a004_order::ui::list::{AdminOrderList, VendorOrderList};
use crate::domain::a005_discount::ui::list::DiscountList;
use crate::domain::a006_customer::ui::list::CustomerList;
use crate::domain::a007_vendor::ui::list::VendorList;
use crate::domain::a008_admin::ui::list::AdminAccountList;
use crate::domain::a009_help_content::ui::list::HelpContentList;
use crate::shared::message::MessageBanner;
use crate::storefront::home::HomePage;
use crate::storefront::my_orders::MyOrdersPage;
use crate::storefront::product_details::ProductDetailsPage;
use crate::storefront::product_list::ProductListPage;
use crate::storefront::store_layout::StoreLayout;
use crate::system::pages::login::LoginPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1>"Page not found"</h1>
            <A href="/">"Back to the store"</A>
        </div>
    }
}

/// Storefront at `/`, one dashboard per realm, login pages per realm
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MessageBanner />
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("") view=StoreLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("products") view=ProductListPage />
                    <Route path=path!("products/:id") view=ProductDetailsPage />
                    <Route path=path!("orders") view=MyOrdersPage />
                    <Route path=path!("login") view=|| view! { <LoginPage realm=Realm::Customer /> } />
                </ParentRoute>

                <Route path=path!("login/vendor") view=|| view! { <LoginPage realm=Realm::Vendor /> } />
                <Route path=path!("login/admin") view=|| view! { <LoginPage realm=Realm::Admin /> } />
                <Route path=path!("login/master") view=|| view! { <LoginPage realm=Realm::Master /> } />

                <ParentRoute path=path!("admin") view=AdminDashboard>
                    <Route path=path!("") view=AdminOverview />
                    <Route path=path!("products") view=AdminProductList />
                    <Route path=path!("orders") view=AdminOrderList />
                    <Route path=path!("categories") view=CategoryList />
                    <Route path=path!("subcategories") view=SubcategoryList />
                    <Route path=path!("discounts") view=DiscountList />
                    <Route path=path!("customers") view=CustomerList />
                    <Route path=path!("vendors") view=VendorList />
                    <Route path=path!("help") view=HelpContentList />
                </ParentRoute>

                <ParentRoute path=path!("vendor") view=VendorDashboard>
                    <Route path=path!("") view=VendorOverview />
                    <Route path=path!("products") view=VendorProductList />
                    <Route path=path!("orders") view=VendorOrderList />
                </ParentRoute>

                <ParentRoute path=path!("master") view=MasterDashboard>
                    <Route path=path!("") view=MasterOverview />
                    <Route path=path!("admins") view=AdminAccountList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
