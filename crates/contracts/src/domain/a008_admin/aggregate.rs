use serde::{Deserialize, Serialize};

use crate::enums::status::{is_unknown, ActiveStatus};

/// Administrator account, managed from the master dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub status: ActiveStatus,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_role() -> String {
    ADMIN_ROLES[0].to_string()
}

pub const ADMIN_ROLES: [&str; 3] = ["admin", "manager", "support"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Only sent when set; editing leaves the password alone
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: ActiveStatus,
}

impl Default for AdminDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            role: default_role(),
            password: String::new(),
            status: ActiveStatus::Active,
        }
    }
}

impl AdminDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if !self.email.contains('@') {
            return Err("A valid email is required");
        }
        if !ADMIN_ROLES.contains(&self.role.as_str()) {
            return Err("Unknown role");
        }
        if self.id.is_none() && self.password.len() < 6 {
            return Err("Password must be at least 6 characters");
        }
        Ok(())
    }
}

impl From<&Admin> for AdminDto {
    fn from(a: &Admin) -> Self {
        Self {
            id: Some(a.id.clone()),
            name: a.name.clone(),
            email: a.email.clone(),
            role: a.role.clone(),
            password: String::new(),
            status: a.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_required_only_on_create() {
        let mut draft = AdminDto {
            name: "Ravi".into(),
            email: "ravi@shop.in".into(),
            ..AdminDto::default()
        };
        assert!(draft.validate().is_err());
        draft.id = Some("a1".into());
        assert!(draft.validate().is_ok());
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("password").is_none());
    }
}
