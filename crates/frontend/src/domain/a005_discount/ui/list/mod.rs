use contracts::domain::a005_discount::aggregate::{Discount, DiscountDto};
use contracts::enums::discount_type::DiscountType;
use contracts::enums::status::{ActiveStatus, EntityStatus};
use contracts::shared::format::format_money;
use leptos::prelude::*;

use crate::shared::date_utils::date_cell;
use crate::shared::resource::field::{coerce_number, number_to_input, FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

fn type_options() -> FieldKind {
    FieldKind::Select(
        DiscountType::all()
            .into_iter()
            .map(|t| (t.code().to_string(), t.display_name().to_string()))
            .collect(),
    )
}

pub struct AdminDiscounts;

impl Resource for AdminDiscounts {
    type Item = Discount;
    type Draft = DiscountDto;
    type Status = ActiveStatus;

    const KEY: &'static str = "admin_discounts";
    const TITLE: &'static str = "Discounts";
    const ELEMENT: &'static str = "discount";

    fn base_path() -> &'static str {
        "/api/admins/discounts"
    }

    fn id(item: &Discount) -> &str {
        &item.id
    }

    fn label(item: &Discount) -> String {
        item.code.clone()
    }

    fn draft_from(item: &Discount) -> DiscountDto {
        DiscountDto::from(item)
    }

    fn draft_id(draft: &DiscountDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &DiscountDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    /// Codes are matched case-insensitively at checkout and stored upper-case
    fn prepare(draft: &mut DiscountDto) {
        draft.code = draft.code.trim().to_uppercase();
    }

    fn matches_search(item: &Discount, needle: &str) -> bool {
        any_contains(needle, &[item.code.as_str(), item.description.as_str()])
    }

    fn columns() -> Vec<Column<Discount>> {
        vec![
            Column::text("Code", |d| d.code.clone()),
            Column::text("Value", |d| d.display_value()),
            Column::money("Min. order", |d| format_money(d.min_order_amount)),
            Column::muted("Valid from", |d| date_cell(&d.valid_from)),
            Column::muted("Valid until", |d| date_cell(&d.valid_until)),
        ]
    }

    fn fields() -> Vec<FieldSpec<DiscountDto>> {
        vec![
            FieldSpec::new(
                "code",
                "Code",
                FieldKind::Text,
                |d: &DiscountDto| d.code.clone(),
                |d, v| d.code = v,
            )
            .required(),
            FieldSpec::new(
                "description",
                "Description",
                FieldKind::TextArea,
                |d| d.description.clone(),
                |d, v| d.description = v,
            ),
            FieldSpec::new(
                "type",
                "Type",
                type_options(),
                |d: &DiscountDto| d.discount_type.code().to_string(),
                |d, v| d.discount_type = DiscountType::from_code(&v).unwrap_or_default(),
            )
            .required(),
            FieldSpec::new(
                "value",
                "Value",
                FieldKind::Number,
                |d: &DiscountDto| number_to_input(d.value),
                |d, v| d.value = coerce_number(&v),
            )
            .required(),
            FieldSpec::new(
                "minOrderAmount",
                "Minimum order amount",
                FieldKind::Number,
                |d| number_to_input(d.min_order_amount),
                |d, v| d.min_order_amount = coerce_number(&v),
            ),
            FieldSpec::new(
                "validFrom",
                "Valid from",
                FieldKind::Date,
                |d| d.valid_from.clone(),
                |d, v| d.valid_from = v,
            ),
            FieldSpec::new(
                "validUntil",
                "Valid until",
                FieldKind::Date,
                |d| d.valid_until.clone(),
                |d, v| d.valid_until = v,
            ),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::status_select::<ActiveStatus>(),
                |d| d.status.code().to_string(),
                |d, v| d.status = ActiveStatus::from_code(&v).unwrap_or_default(),
            ),
        ]
    }

    fn status(item: &Discount) -> Option<ActiveStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Discount, status: ActiveStatus) {
        item.status = status;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DiscountList() -> impl IntoView {
    resource_list_page::<AdminDiscounts>(ListPageOptions {
        icon: Some("discounts"),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_column() {
        let pct: Discount =
            serde_json::from_str(r#"{"_id":"d1","code":"SAVE20","type":"percentage","value":20}"#)
                .unwrap();
        let fixed: Discount =
            serde_json::from_str(r#"{"_id":"d2","code":"FLAT50","type":"fixed","value":50}"#)
                .unwrap();
        let value = &AdminDiscounts::columns()[1];
        assert_eq!((value.render)(&pct), "20%");
        assert_eq!((value.render)(&fixed), "₹50");
    }

    #[test]
    fn test_prepare_normalises_code() {
        let mut draft = DiscountDto {
            code: "  save10 ".into(),
            ..DiscountDto::default()
        };
        AdminDiscounts::prepare(&mut draft);
        assert_eq!(draft.code, "SAVE10");
    }

    #[test]
    fn test_type_field_parses_code() {
        let fields = AdminDiscounts::fields();
        let kind = fields.iter().find(|f| f.name == "type").unwrap();
        let mut draft = DiscountDto::default();
        (kind.set)(&mut draft, "fixed".into());
        assert_eq!(draft.discount_type, DiscountType::Fixed);
    }
}
