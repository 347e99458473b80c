use contracts::domain::a007_vendor::aggregate::{Vendor, VendorDto};
use contracts::enums::status::{EntityStatus, VendorStatus};
use leptos::prelude::*;

use crate::shared::date_utils::date_cell;
use crate::shared::resource::field::{FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

/// Seller accounts awaiting or holding approval
pub struct AdminVendors;

impl Resource for AdminVendors {
    type Item = Vendor;
    type Draft = VendorDto;
    type Status = VendorStatus;

    const KEY: &'static str = "admin_vendors";
    const TITLE: &'static str = "Vendors";
    const ELEMENT: &'static str = "vendor";

    fn base_path() -> &'static str {
        "/api/admins/vendors"
    }

    fn id(item: &Vendor) -> &str {
        &item.id
    }

    fn label(item: &Vendor) -> String {
        item.display_name().to_string()
    }

    fn draft_from(item: &Vendor) -> VendorDto {
        VendorDto::from(item)
    }

    fn draft_id(draft: &VendorDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &VendorDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn matches_search(item: &Vendor, needle: &str) -> bool {
        any_contains(
            needle,
            &[item.name.as_str(), item.business_name.as_str(), item.email.as_str()],
        )
    }

    fn columns() -> Vec<Column<Vendor>> {
        vec![
            Column::text("Business", |v| v.display_name().to_string()),
            Column::text("Contact", |v| v.name.clone()),
            Column::text("Email", |v| v.email.clone()),
            Column::muted("Phone", |v| v.phone.clone().unwrap_or_else(|| "-".into())),
            Column::muted("Registered", |v| date_cell(&v.created_at)),
        ]
    }

    fn fields() -> Vec<FieldSpec<VendorDto>> {
        vec![
            FieldSpec::new(
                "name",
                "Contact name",
                FieldKind::Text,
                |d: &VendorDto| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FieldSpec::new(
                "businessName",
                "Business name",
                FieldKind::Text,
                |d: &VendorDto| d.business_name.clone(),
                |d, v| d.business_name = v,
            )
            .required(),
            FieldSpec::new(
                "email",
                "Email",
                FieldKind::Email,
                |d: &VendorDto| d.email.clone(),
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
                "address",
                "Address",
                FieldKind::TextArea,
                |d| d.address.clone(),
                |d, v| d.address = v,
            ),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::status_select::<VendorStatus>(),
                |d| d.status.code().to_string(),
                |d, v| d.status = VendorStatus::from_code(&v).unwrap_or_default(),
            ),
        ]
    }

    fn can_create() -> bool {
        false
    }

    fn status(item: &Vendor) -> Option<VendorStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Vendor, status: VendorStatus) {
        item.status = status;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VendorList() -> impl IntoView {
    resource_list_page::<AdminVendors>(ListPageOptions {
        icon: Some("vendors"),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::state::{ListState, LoadOutcome};
    use contracts::shared::pagination::ListResource;

    fn vendor(status: &str) -> Vendor {
        serde_json::from_str(&format!(
            r#"{{"_id":"v1","name":"Ravi","businessName":"Bright Co","email":"r@b.co","status":"{}"}}"#,
            status
        ))
        .unwrap()
    }

    #[test]
    fn test_label_prefers_business_name() {
        assert_eq!(AdminVendors::label(&vendor("pending")), "Bright Co");
    }

    fn loaded(status: &str) -> ListState<AdminVendors> {
        let mut state = ListState::<AdminVendors>::new(10);
        let ticket = state.begin_load();
        let list = ListResource::paged_locally(vec![vendor(status)], 1, 10);
        assert_eq!(state.finish_load(ticket, Ok(list)), LoadOutcome::Loaded);
        state
    }

    #[test]
    fn test_pending_vendor_is_approved_through_the_form() {
        let mut state = loaded("pending");
        assert_eq!(state.toggle_target("v1"), None);

        assert!(state.open_edit("v1"));
        let field = AdminVendors::fields().into_iter().find(|f| f.name == "status").unwrap();
        state.update_draft(|d| (field.set)(d, "approved".into()));
        let (_, draft) = state.begin_submit().unwrap();
        assert_eq!(draft.status, VendorStatus::Approved);
    }

    #[test]
    fn test_suspend_toggle_round_trips() {
        let mut state = loaded("approved");
        let next = state.toggle_target("v1").unwrap();
        assert_eq!(next, VendorStatus::Suspended);
        assert!(state.finish_toggle("v1", next));
        let back = state.toggle_target("v1").unwrap();
        assert!(state.finish_toggle("v1", back));
        assert_eq!(state.list.items[0].status, VendorStatus::Approved);
    }

    #[test]
    fn test_status_filter_offers_every_vendor_state() {
        let codes: Vec<&str> = AdminVendors::status_options().into_iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["pending", "approved", "suspended", "rejected"]);
    }
}
