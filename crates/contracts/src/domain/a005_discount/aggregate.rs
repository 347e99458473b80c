use serde::{Deserialize, Serialize};

use crate::enums::discount_type::DiscountType;
use crate::enums::status::{is_unknown, ActiveStatus};
use crate::shared::date::to_date_input;
use crate::shared::format::{format_amount, format_money};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub min_order_amount: f64,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub valid_from: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub status: ActiveStatus,
}

impl Discount {
    /// `"20%"` for percentage discounts, `"₹50"` for fixed ones
    pub fn display_value(&self) -> String {
        display_value(self.discount_type, self.value)
    }
}

pub fn display_value(discount_type: DiscountType, value: f64) -> String {
    match discount_type {
        DiscountType::Percentage => format!("{}%", format_amount(value)),
        DiscountType::Fixed => format_money(value),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: f64,
    pub min_order_amount: f64,
    /// `yyyy-mm-dd`
    pub valid_from: String,
    /// `yyyy-mm-dd`
    pub valid_until: String,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: ActiveStatus,
}

impl DiscountDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.code.trim().is_empty() {
            return Err("Discount code is required");
        }
        if self.value <= 0.0 {
            return Err("Discount value must be greater than zero");
        }
        if self.discount_type == DiscountType::Percentage && self.value > 100.0 {
            return Err("Percentage cannot exceed 100");
        }
        // yyyy-mm-dd compares correctly as text
        if !self.valid_from.is_empty()
            && !self.valid_until.is_empty()
            && self.valid_until < self.valid_from
        {
            return Err("End date must not be before start date");
        }
        Ok(())
    }
}

impl From<&Discount> for DiscountDto {
    fn from(d: &Discount) -> Self {
        Self {
            id: Some(d.id.clone()),
            code: d.code.clone(),
            description: d.description.clone(),
            discount_type: d.discount_type,
            value: d.value,
            min_order_amount: d.min_order_amount,
            valid_from: d.valid_from.as_deref().map(to_date_input).unwrap_or_default(),
            valid_until: d.valid_until.as_deref().map(to_date_input).unwrap_or_default(),
            status: d.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        let pct: Discount =
            serde_json::from_str(r#"{"_id":"d1","code":"SAVE20","type":"percentage","value":20}"#)
                .unwrap();
        assert_eq!(pct.display_value(), "20%");
        let fixed: Discount =
            serde_json::from_str(r#"{"_id":"d2","code":"FLAT50","type":"fixed","value":50}"#)
                .unwrap();
        assert_eq!(fixed.display_value(), "₹50");
    }

    #[test]
    fn test_draft_reformats_dates() {
        let d: Discount = serde_json::from_str(
            r#"{"_id":"d1","code":"X","type":"fixed","value":5,
                "validFrom":"2024-01-01T00:00:00.000Z","validUntil":"2024-02-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        let draft = DiscountDto::from(&d);
        assert_eq!(draft.valid_from, "2024-01-01");
        assert_eq!(draft.valid_until, "2024-02-01");
        assert_eq!(draft.code, d.code);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut draft = DiscountDto {
            code: "BIG".into(),
            value: 120.0,
            ..DiscountDto::default()
        };
        assert!(draft.validate().is_err());
        draft.value = 10.0;
        draft.valid_from = "2024-05-01".into();
        draft.valid_until = "2024-04-01".into();
        assert!(draft.validate().is_err());
    }
}
