use serde::{Deserialize, Serialize};

use crate::domain::entity_ref::{ref_id, EntityRef};
use crate::enums::status::{is_unknown, ActiveStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<EntityRef>,
    #[serde(default)]
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(rename = "category")]
    pub category_id: String,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: ActiveStatus,
}

impl SubcategoryDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Subcategory name is required");
        }
        if self.category_id.trim().is_empty() {
            return Err("Parent category is required");
        }
        Ok(())
    }
}

impl From<&Subcategory> for SubcategoryDto {
    fn from(s: &Subcategory) -> Self {
        Self {
            id: Some(s.id.clone()),
            name: s.name.clone(),
            description: s.description.clone(),
            category_id: ref_id(&s.category),
            status: s.status,
        }
    }
}
