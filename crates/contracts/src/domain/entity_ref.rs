use serde::{Deserialize, Serialize};

/// Reference to another entity as the backend sends it: a bare id, or the
/// populated document with at least its id and a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default, rename = "businessName")]
        business_name: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
    Id(String),
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Populated { id, .. } => id,
            EntityRef::Id(id) => id,
        }
    }

    /// Best display name; falls back to the id when the reference is not populated.
    pub fn label(&self) -> &str {
        match self {
            EntityRef::Populated {
                business_name: Some(name),
                ..
            } if !name.is_empty() => name,
            EntityRef::Populated {
                name: Some(name), ..
            } if !name.is_empty() => name,
            EntityRef::Populated { id, .. } => id,
            EntityRef::Id(id) => id,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            EntityRef::Populated { email, .. } => email.as_deref(),
            EntityRef::Id(_) => None,
        }
    }
}

/// Id of an optional reference, empty when absent
pub fn ref_id(value: &Option<EntityRef>) -> String {
    value.as_ref().map(|r| r.id().to_string()).unwrap_or_default()
}

/// Label of an optional reference, `"-"` when absent
pub fn ref_label(value: &Option<EntityRef>) -> String {
    value
        .as_ref()
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_and_bare_refs() {
        let populated: EntityRef =
            serde_json::from_str(r#"{"_id":"c1","name":"Shoes"}"#).unwrap();
        assert_eq!(populated.id(), "c1");
        assert_eq!(populated.label(), "Shoes");

        let bare: EntityRef = serde_json::from_str(r#""c2""#).unwrap();
        assert_eq!(bare.id(), "c2");
        assert_eq!(bare.label(), "c2");
    }

    #[test]
    fn test_vendor_ref_prefers_business_name() {
        let vendor: EntityRef =
            serde_json::from_str(r#"{"_id":"v1","name":"Asha","businessName":"Asha Crafts"}"#)
                .unwrap();
        assert_eq!(vendor.label(), "Asha Crafts");
        assert_eq!(ref_label(&None), "-");
        assert_eq!(ref_id(&Some(vendor)), "v1");
    }
}
