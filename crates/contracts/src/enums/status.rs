use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status value stored on an entity and sent back as `{ "status": ... }`.
pub trait EntityStatus:
    Copy + PartialEq + fmt::Debug + Serialize + DeserializeOwned + 'static
{
    /// Wire code (the serde representation)
    fn code(&self) -> &'static str;

    /// Human readable label for badges and selects
    fn display_name(&self) -> &'static str;

    /// Whether the badge should be rendered as "good" (green)
    fn is_positive(&self) -> bool;

    /// All values, in the order they appear in filter dropdowns
    fn all() -> &'static [Self];

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.code() == code)
    }

    /// `false` for codes the server sent that this client does not know
    fn is_known(&self) -> bool {
        Self::all().contains(self)
    }
}

/// Status that can be flipped by a single "toggle" action in a list.
///
/// `toggled` must be an involution over every value `can_toggle` admits.
pub trait Toggle: EntityStatus {
    fn toggled(&self) -> Self;

    /// Whether the list offers the toggle action for this value
    fn can_toggle(&self) -> bool {
        self.is_known()
    }
}

/// `skip_serializing_if` helper: drafts never send back a code they could not read
pub fn is_unknown<S: EntityStatus>(status: &S) -> bool {
    !status.is_known()
}

// ============================================================================
// active / inactive
// ============================================================================

/// Generic on/off status used by categories, products, discounts and admins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl EntityStatus for ActiveStatus {
    fn code(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Inactive => "inactive",
            ActiveStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "Active",
            ActiveStatus::Inactive => "Inactive",
            ActiveStatus::Unknown => "Unknown",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, ActiveStatus::Active)
    }

    fn all() -> &'static [Self] {
        &[ActiveStatus::Active, ActiveStatus::Inactive]
    }
}

impl Toggle for ActiveStatus {
    fn toggled(&self) -> Self {
        match self {
            ActiveStatus::Active => ActiveStatus::Inactive,
            ActiveStatus::Inactive => ActiveStatus::Active,
            ActiveStatus::Unknown => ActiveStatus::Unknown,
        }
    }
}

// ============================================================================
// customers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Blocked,
    #[serde(other)]
    Unknown,
}

impl EntityStatus for CustomerStatus {
    fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Blocked => "blocked",
            CustomerStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Blocked => "Blocked",
            CustomerStatus::Unknown => "Unknown",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, CustomerStatus::Active)
    }

    fn all() -> &'static [Self] {
        &[CustomerStatus::Active, CustomerStatus::Blocked]
    }
}

impl Toggle for CustomerStatus {
    fn toggled(&self) -> Self {
        match self {
            CustomerStatus::Active => CustomerStatus::Blocked,
            CustomerStatus::Blocked => CustomerStatus::Active,
            CustomerStatus::Unknown => CustomerStatus::Unknown,
        }
    }
}

// ============================================================================
// vendors
// ============================================================================

/// Vendor account state. Only `Approved` vendors may enter the vendor dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    #[default]
    Pending,
    Approved,
    Suspended,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl EntityStatus for VendorStatus {
    fn code(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "pending",
            VendorStatus::Approved => "approved",
            VendorStatus::Suspended => "suspended",
            VendorStatus::Rejected => "rejected",
            VendorStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "Pending",
            VendorStatus::Approved => "Approved",
            VendorStatus::Suspended => "Suspended",
            VendorStatus::Rejected => "Rejected",
            VendorStatus::Unknown => "Unknown",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, VendorStatus::Approved)
    }

    fn all() -> &'static [Self] {
        &[
            VendorStatus::Pending,
            VendorStatus::Approved,
            VendorStatus::Suspended,
            VendorStatus::Rejected,
        ]
    }
}

impl Toggle for VendorStatus {
    /// Approved and suspended vendors swap; the rest go through the edit form.
    fn toggled(&self) -> Self {
        match self {
            VendorStatus::Approved => VendorStatus::Suspended,
            VendorStatus::Suspended => VendorStatus::Approved,
            other => *other,
        }
    }

    fn can_toggle(&self) -> bool {
        matches!(self, VendorStatus::Approved | VendorStatus::Suspended)
    }
}

// ============================================================================
// help content
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    #[default]
    Draft,
    #[serde(other)]
    Unknown,
}

impl EntityStatus for PublishStatus {
    fn code(&self) -> &'static str {
        match self {
            PublishStatus::Published => "published",
            PublishStatus::Draft => "draft",
            PublishStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PublishStatus::Published => "Published",
            PublishStatus::Draft => "Draft",
            PublishStatus::Unknown => "Unknown",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, PublishStatus::Published)
    }

    fn all() -> &'static [Self] {
        &[PublishStatus::Published, PublishStatus::Draft]
    }
}

impl Toggle for PublishStatus {
    fn toggled(&self) -> Self {
        match self {
            PublishStatus::Published => PublishStatus::Draft,
            PublishStatus::Draft => PublishStatus::Published,
            PublishStatus::Unknown => PublishStatus::Unknown,
        }
    }
}

// ============================================================================
// orders
// ============================================================================

/// Order fulfilment state. Changed through the edit modal, never toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl EntityStatus for OrderStatus {
    fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    fn all() -> &'static [Self] {
        &[
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl EntityStatus for PaymentStatus {
    fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Unknown => "Unknown",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    fn all() -> &'static [Self] {
        &[
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ]
    }
}

// ============================================================================
// no status
// ============================================================================

/// Placeholder for resources that have nothing to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoStatus {}

impl EntityStatus for NoStatus {
    fn code(&self) -> &'static str {
        match *self {}
    }

    fn display_name(&self) -> &'static str {
        match *self {}
    }

    fn is_positive(&self) -> bool {
        match *self {}
    }

    fn all() -> &'static [Self] {
        &[]
    }
}

impl Toggle for NoStatus {
    fn toggled(&self) -> Self {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip<S: Toggle>(values: &[S]) {
        for value in values.iter().filter(|v| v.can_toggle()) {
            let next = value.toggled();
            assert_ne!(next, *value, "{:?}", value);
            assert!(next.can_toggle(), "{:?} -> {:?}", value, next);
            assert_eq!(next.toggled(), *value, "{:?}", value);
        }
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        assert_round_trip(ActiveStatus::all());
        assert_round_trip(CustomerStatus::all());
        assert_round_trip(PublishStatus::all());
        assert_round_trip(VendorStatus::all());
    }

    #[test]
    fn test_only_approved_and_suspended_vendors_toggle() {
        let toggleable: Vec<VendorStatus> = VendorStatus::all()
            .iter()
            .copied()
            .filter(|s| s.can_toggle())
            .collect();
        assert_eq!(toggleable, vec![VendorStatus::Approved, VendorStatus::Suspended]);
        assert_eq!(VendorStatus::Pending.toggled(), VendorStatus::Pending);
    }

    #[test]
    fn test_unrecognised_code_decodes_as_unknown() {
        let status: OrderStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        assert!(!status.is_known());
        assert!(is_unknown(&status));
        assert!(!ActiveStatus::Unknown.can_toggle());
        assert!(!is_unknown(&OrderStatus::Shipped));
    }

    #[test]
    fn test_code_matches_serde() {
        for status in OrderStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(OrderStatus::from_code(status.code()), Some(*status));
        }
        assert_eq!(VendorStatus::from_code("unknown"), None);
    }

    #[test]
    fn test_no_status_is_empty() {
        assert!(NoStatus::all().is_empty());
        assert_eq!(NoStatus::from_code("active"), None);
    }
}
