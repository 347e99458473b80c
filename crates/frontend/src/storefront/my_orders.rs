use contracts::domain::a004_order::aggregate::{Order, OrderDto};
use contracts::enums::status::{EntityStatus, NoStatus, OrderStatus};
use contracts::shared::format::format_money;
use contracts::system::session::Realm;
use leptos::prelude::*;

use super::api::ORDERS_PATH;
use crate::shared::date_utils::date_cell;
use crate::shared::resource::field::FieldSpec;
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};
use crate::system::auth::guard::RequireSession;

/// Orders of the signed-in customer, read-only
pub struct MyOrders;

impl Resource for MyOrders {
    type Item = Order;
    type Draft = OrderDto;
    type Status = NoStatus;

    const KEY: &'static str = "my_orders";
    const TITLE: &'static str = "My orders";
    const ELEMENT: &'static str = "order";

    fn base_path() -> &'static str {
        ORDERS_PATH
    }

    fn id(item: &Order) -> &str {
        &item.id
    }

    fn draft_from(item: &Order) -> OrderDto {
        OrderDto::from(item)
    }

    fn draft_id(draft: &OrderDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(_draft: &OrderDto) -> Result<(), String> {
        Ok(())
    }

    fn matches_search(item: &Order, needle: &str) -> bool {
        let lines: Vec<&str> = item.items.iter().map(|l| l.product_name.as_str()).collect();
        any_contains(needle, &[item.display_number().as_str()]) || any_contains(needle, &lines)
    }

    fn columns() -> Vec<Column<Order>> {
        vec![
            Column::text("Order", |o| o.display_number()),
            Column::muted("Placed", |o| date_cell(&o.created_at)),
            Column::text("Items", |o| o.item_count().to_string()),
            Column::money("Total", |o| format_money(o.total_amount)),
            Column::text("Status", |o| o.status.display_name().to_string()),
            Column::text("Payment", |o| o.payment_status.display_name().to_string()),
        ]
    }

    fn fields() -> Vec<FieldSpec<OrderDto>> {
        Vec::new()
    }

    fn can_create() -> bool {
        false
    }

    fn can_edit() -> bool {
        false
    }

    fn can_delete() -> bool {
        false
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        OrderStatus::all().iter().map(|s| (s.code(), s.display_name())).collect()
    }
}

#[component]
pub fn MyOrdersPage() -> impl IntoView {
    view! {
        <RequireSession realm=Realm::Customer>
            {resource_list_page::<MyOrders>(ListPageOptions {
                icon: Some("orders"),
                ..ListPageOptions::default()
            })}
        </RequireSession>
    }
}
