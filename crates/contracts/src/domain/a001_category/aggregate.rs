use serde::{Deserialize, Serialize};

use crate::enums::status::{is_unknown, ActiveStatus};

/// Product category (top level of the catalogue)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: ActiveStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Draft behind the create/edit category modal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: ActiveStatus,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Category name is required");
        }
        Ok(())
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            description: c.description.clone(),
            image: c.image.clone().unwrap_or_default(),
            status: c.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_draft() {
        let json = r#"{"_id":"c1","name":"Home","description":"Decor","status":"inactive"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        let draft = CategoryDto::from(&category);
        assert_eq!(draft.id.as_deref(), Some("c1"));
        assert_eq!(draft.name, "Home");
        assert_eq!(draft.status, ActiveStatus::Inactive);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_body_has_no_id() {
        let draft = CategoryDto {
            id: Some("c1".into()),
            name: "Toys".into(),
            ..CategoryDto::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["status"], "active");
        assert!(CategoryDto::default().validate().is_err());
    }
}
