use serde::{Deserialize, Serialize};

use crate::enums::status::{is_unknown, PublishStatus};

/// Storefront help article (FAQ, shipping, returns ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpContent {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub section: String,
    #[serde(default, alias = "displayOrder")]
    pub order: i64,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const HELP_SECTIONS: [&str; 5] = ["faq", "shipping", "returns", "payments", "account"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpContentDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub section: String,
    pub order: i64,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: PublishStatus,
}

impl Default for HelpContentDto {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            section: HELP_SECTIONS[0].to_string(),
            order: 0,
            status: PublishStatus::Draft,
        }
    }
}

impl HelpContentDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.content.trim().is_empty() {
            return Err("Content is required");
        }
        Ok(())
    }
}

impl From<&HelpContent> for HelpContentDto {
    fn from(h: &HelpContent) -> Self {
        Self {
            id: Some(h.id.clone()),
            title: h.title.clone(),
            content: h.content.clone(),
            section: h.section.clone(),
            order: h.order,
            status: h.status,
        }
    }
}
