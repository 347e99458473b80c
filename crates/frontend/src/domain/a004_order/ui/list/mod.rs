//! Order fulfilment for admins and vendors. Orders are placed by customers in
//! the storefront; here only status, payment state and tracking change.

use contracts::domain::a004_order::aggregate::{Order, OrderDto};
use contracts::domain::entity_ref::ref_label;
use contracts::enums::status::{EntityStatus, NoStatus, OrderStatus, PaymentStatus};
use contracts::shared::format::format_money;
use leptos::prelude::*;

use crate::shared::date_utils::date_cell;
use crate::shared::resource::field::{FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, RemovePolicy, Resource};

fn customer_cell(o: &Order) -> String {
    match o.customer.as_ref().and_then(|c| c.email()) {
        Some(email) => format!("{} <{}>", ref_label(&o.customer), email),
        None => ref_label(&o.customer),
    }
}

fn order_search(item: &Order, needle: &str) -> bool {
    let number = item.display_number();
    let customer = customer_cell(item);
    let tracking = item.tracking_number.as_deref().unwrap_or_default();
    any_contains(needle, &[number.as_str(), customer.as_str(), tracking])
}

fn order_columns() -> Vec<Column<Order>> {
    vec![
        Column::text("Order", |o| o.display_number()),
        Column::text("Customer", customer_cell),
        Column::muted("Placed", |o| date_cell(&o.created_at)),
        Column::muted("Ship to", |o| o.shipping_label().unwrap_or_else(|| "-".into())),
        Column::money("Items", |o| o.item_count().to_string()),
        Column::money("Total", |o| format_money(o.total_amount)),
        Column::text("Status", |o| o.status.display_name().to_string()),
        Column::text("Payment", |o| o.payment_status.display_name().to_string()),
    ]
}

fn order_fields() -> Vec<FieldSpec<OrderDto>> {
    vec![
        FieldSpec::new(
            "status",
            "Order status",
            FieldKind::status_select::<OrderStatus>(),
            |d: &OrderDto| d.status.code().to_string(),
            |d, v| d.status = OrderStatus::from_code(&v).unwrap_or_default(),
        )
        .required(),
        FieldSpec::new(
            "paymentStatus",
            "Payment status",
            FieldKind::status_select::<PaymentStatus>(),
            |d: &OrderDto| d.payment_status.code().to_string(),
            |d, v| d.payment_status = PaymentStatus::from_code(&v).unwrap_or_default(),
        )
        .required(),
        FieldSpec::new(
            "trackingNumber",
            "Tracking number",
            FieldKind::Text,
            |d| d.tracking_number.clone(),
            |d, v| d.tracking_number = v,
        ),
    ]
}

fn order_status_options() -> Vec<(&'static str, &'static str)> {
    OrderStatus::all()
        .iter()
        .map(|s| (s.code(), s.display_name()))
        .collect()
}

pub struct AdminOrders;

impl Resource for AdminOrders {
    type Item = Order;
    type Draft = OrderDto;
    type Status = NoStatus;

    const KEY: &'static str = "admin_orders";
    const TITLE: &'static str = "Orders";
    const ELEMENT: &'static str = "order";

    fn base_path() -> &'static str {
        "/api/admins/orders"
    }

    fn id(item: &Order) -> &str {
        &item.id
    }

    fn label(item: &Order) -> String {
        item.display_number()
    }

    fn draft_from(item: &Order) -> OrderDto {
        OrderDto::from(item)
    }

    fn draft_id(draft: &OrderDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &OrderDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn matches_search(item: &Order, needle: &str) -> bool {
        order_search(item, needle)
    }

    fn columns() -> Vec<Column<Order>> {
        order_columns()
    }

    fn fields() -> Vec<FieldSpec<OrderDto>> {
        order_fields()
    }

    fn can_create() -> bool {
        false
    }

    // Deleting an order shifts the server-side pages
    fn remove_policy() -> RemovePolicy {
        RemovePolicy::Reload
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        order_status_options()
    }
}

pub struct VendorOrders;

impl Resource for VendorOrders {
    type Item = Order;
    type Draft = OrderDto;
    type Status = NoStatus;

    const KEY: &'static str = "vendor_orders";
    const TITLE: &'static str = "Orders";
    const ELEMENT: &'static str = "order";

    fn base_path() -> &'static str {
        "/api/vendors/orders"
    }

    fn id(item: &Order) -> &str {
        &item.id
    }

    fn label(item: &Order) -> String {
        item.display_number()
    }

    fn draft_from(item: &Order) -> OrderDto {
        OrderDto::from(item)
    }

    fn draft_id(draft: &OrderDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &OrderDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn matches_search(item: &Order, needle: &str) -> bool {
        order_search(item, needle)
    }

    fn columns() -> Vec<Column<Order>> {
        order_columns()
    }

    fn fields() -> Vec<FieldSpec<OrderDto>> {
        order_fields()
    }

    fn can_create() -> bool {
        false
    }

    fn can_delete() -> bool {
        false
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        order_status_options()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AdminOrderList() -> impl IntoView {
    resource_list_page::<AdminOrders>(ListPageOptions {
        icon: Some("orders"),
        ..ListPageOptions::default()
    })
}

#[component]
#[allow(non_snake_case)]
pub fn VendorOrderList() -> impl IntoView {
    resource_list_page::<VendorOrders>(ListPageOptions {
        icon: Some("orders"),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        serde_json::from_str(
            r#"{"_id":"65f0c2a1b4d3e2f1a0b9c8d7","orderNumber":"ORD-1001",
                "user":{"_id":"u1","name":"Asha","email":"asha@example.com"},
                "items":[{"name":"Lamp","quantity":2,"price":10}],
                "totalAmount":20,"status":"shipped","trackingNumber":"TRK42"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_customer_cell_includes_email() {
        assert_eq!(customer_cell(&order()), "Asha <asha@example.com>");
    }

    #[test]
    fn test_search_by_number_customer_and_tracking() {
        let o = order();
        assert!(AdminOrders::matches_search(&o, "ord-1001"));
        assert!(AdminOrders::matches_search(&o, "asha@"));
        assert!(VendorOrders::matches_search(&o, "trk42"));
        assert!(!VendorOrders::matches_search(&o, "bob"));
    }

    #[test]
    fn test_status_filter_lists_order_statuses() {
        let options = AdminOrders::status_options();
        assert_eq!(options.len(), OrderStatus::all().len());
        assert!(options.iter().any(|(code, _)| *code == "shipped"));
    }

    #[test]
    fn test_shipped_without_tracking_is_rejected() {
        let mut draft = OrderDto::from(&order());
        draft.tracking_number.clear();
        assert!(VendorOrders::validate(&draft).is_err());
    }

    #[test]
    fn test_orders_are_never_created_here() {
        assert!(!AdminOrders::can_create());
        assert!(!VendorOrders::can_create());
        assert!(!VendorOrders::can_delete());
    }
}
