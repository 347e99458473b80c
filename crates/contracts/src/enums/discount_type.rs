use serde::{Deserialize, Serialize};

/// How a discount's `value` is applied to an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::Fixed => "Fixed amount",
        }
    }

    pub fn all() -> Vec<DiscountType> {
        vec![DiscountType::Percentage, DiscountType::Fixed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "percentage" => Some(DiscountType::Percentage),
            "fixed" => Some(DiscountType::Fixed),
            _ => None,
        }
    }
}
