use serde::{Deserialize, Serialize};

use crate::enums::status::{is_unknown, CustomerStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: CustomerStatus,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if !self.email.contains('@') {
            return Err("A valid email is required");
        }
        Ok(())
    }
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone().unwrap_or_default(),
            status: c.status,
        }
    }
}
