use contracts::domain::a006_customer::aggregate::{Customer, CustomerDto};
use contracts::enums::status::{CustomerStatus, EntityStatus};
use leptos::prelude::*;

use crate::shared::date_utils::date_cell;
use crate::shared::resource::field::{FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

/// Registered shoppers. Accounts come from sign-up, so there is no "Add".
pub struct AdminCustomers;

impl Resource for AdminCustomers {
    type Item = Customer;
    type Draft = CustomerDto;
    type Status = CustomerStatus;

    const KEY: &'static str = "admin_customers";
    const TITLE: &'static str = "Customers";
    const ELEMENT: &'static str = "customer";

    fn base_path() -> &'static str {
        "/api/admins/customers"
    }

    fn id(item: &Customer) -> &str {
        &item.id
    }

    fn label(item: &Customer) -> String {
        item.name.clone()
    }

    fn draft_from(item: &Customer) -> CustomerDto {
        CustomerDto::from(item)
    }

    fn draft_id(draft: &CustomerDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &CustomerDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn matches_search(item: &Customer, needle: &str) -> bool {
        any_contains(
            needle,
            &[
                item.name.as_str(),
                item.email.as_str(),
                item.phone.as_deref().unwrap_or_default(),
            ],
        )
    }

    fn columns() -> Vec<Column<Customer>> {
        vec![
            Column::text("Name", |c| c.name.clone()),
            Column::text("Email", |c| c.email.clone()),
            Column::muted("Phone", |c| c.phone.clone().unwrap_or_else(|| "-".into())),
            Column::muted("Joined", |c| date_cell(&c.created_at)),
        ]
    }

    fn fields() -> Vec<FieldSpec<CustomerDto>> {
        vec![
            FieldSpec::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &CustomerDto| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FieldSpec::new(
                "email",
                "Email",
                FieldKind::Email,
                |d: &CustomerDto| d.email.clone(),
                |d, v| d.email = v,
            )
            .required(),
            FieldSpec::new(
                "phone",
                "Phone",
                FieldKind::Text,
                |d| d.phone.clone(),
                |d, v| d.phone = v,
            ),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::status_select::<CustomerStatus>(),
                |d| d.status.code().to_string(),
                |d, v| d.status = CustomerStatus::from_code(&v).unwrap_or_default(),
            ),
        ]
    }

    fn can_create() -> bool {
        false
    }

    fn status(item: &Customer) -> Option<CustomerStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Customer, status: CustomerStatus) {
        item.status = status;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    resource_list_page::<AdminCustomers>(ListPageOptions {
        icon: Some("customers"),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::status::Toggle;

    #[test]
    fn test_search_by_phone() {
        let c: Customer = serde_json::from_str(
            r#"{"_id":"u1","name":"Asha","email":"asha@example.com","phone":"98450 12345"}"#,
        )
        .unwrap();
        assert!(AdminCustomers::matches_search(&c, "98450"));
        assert!(AdminCustomers::matches_search(&c, "asha@"));
        assert_eq!((AdminCustomers::columns()[3].render)(&c), "-");
    }

    #[test]
    fn test_block_toggle() {
        let c: Customer =
            serde_json::from_str(r#"{"_id":"u1","name":"Asha","email":"a@b.c"}"#).unwrap();
        let current = AdminCustomers::status(&c).unwrap();
        assert_eq!(current, CustomerStatus::Active);
        assert_eq!(current.toggled(), CustomerStatus::Blocked);
    }
}
