use serde::{Deserialize, Serialize};

use crate::enums::status::{is_unknown, VendorStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub business_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: VendorStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Vendor {
    pub fn display_name(&self) -> &str {
        if self.business_name.is_empty() {
            &self.name
        } else {
            &self.business_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: VendorStatus,
}

impl VendorDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Vendor name is required");
        }
        if self.business_name.trim().is_empty() {
            return Err("Business name is required");
        }
        if !self.email.contains('@') {
            return Err("A valid email is required");
        }
        Ok(())
    }
}

impl From<&Vendor> for VendorDto {
    fn from(v: &Vendor) -> Self {
        Self {
            id: Some(v.id.clone()),
            name: v.name.clone(),
            business_name: v.business_name.clone(),
            email: v.email.clone(),
            phone: v.phone.clone().unwrap_or_default(),
            address: v.address.clone().unwrap_or_default(),
            status: v.status,
        }
    }
}
