//! Session blobs kept in browser storage and the gate that turns them into a
//! typed `Session` for a dashboard.
//!
//! The gate only checks what is stored locally. The token itself is never
//! verified before a dashboard renders; the backend rejects forged tokens on
//! the first request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::status::{ActiveStatus, VendorStatus};

/// Area of the application a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Realm {
    Customer,
    Vendor,
    Admin,
    Master,
}

impl Realm {
    /// Storage key of the bearer token, for realms that keep it separately
    pub fn token_key(&self) -> Option<&'static str> {
        match self {
            Realm::Admin => Some("adminToken"),
            Realm::Master => Some("masterToken"),
            Realm::Vendor | Realm::Customer => None,
        }
    }

    /// Storage key of the account JSON blob
    pub fn data_key(&self) -> &'static str {
        match self {
            Realm::Admin => "adminData",
            Realm::Master => "masterData",
            Realm::Vendor => "vendorData",
            Realm::Customer => "user",
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Realm::Admin => "/login/admin",
            Realm::Master => "/login/master",
            Realm::Vendor => "/login/vendor",
            Realm::Customer => "/login",
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            Realm::Admin => "/admin",
            Realm::Master => "/master",
            Realm::Vendor => "/vendor",
            Realm::Customer => "/",
        }
    }

    pub fn login_endpoint(&self) -> &'static str {
        match self {
            Realm::Admin => "/api/admins/login",
            Realm::Master => "/api/admins/master/login",
            Realm::Vendor => "/api/vendors/login",
            Realm::Customer => "/api/routes/login",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Realm::Admin => "Admin",
            Realm::Master => "Master Admin",
            Realm::Vendor => "Vendor",
            Realm::Customer => "Customer",
        }
    }

    /// All storage keys owned by the realm (cleared on logout)
    pub fn storage_keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.data_key()];
        keys.extend(self.token_key());
        keys
    }
}

/// `adminData` / `masterData`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminData {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: ActiveStatus,
}

/// `vendorData`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorData {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: VendorStatus,
    #[serde(default)]
    pub token: Option<String>,
}

/// `user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Authenticated user of one realm, passed down through context.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub realm: Realm,
    pub token: Option<String>,
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl Session {
    /// Headers attached to every API call made on behalf of this session
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        if matches!(self.realm, Realm::Vendor | Realm::Customer) {
            headers.push(("x-user-id", self.user_id.clone()));
        }
        headers
    }
}

/// Storage writes after a successful login of `realm`.
///
/// Admin realms keep the token under its own key; vendor and customer tokens
/// travel inside the account blob.
pub fn login_entries(
    realm: Realm,
    token: Option<&str>,
    mut account: serde_json::Value,
) -> Vec<(&'static str, String)> {
    let mut entries = Vec::new();
    match realm.token_key() {
        Some(key) => {
            if let Some(token) = token {
                entries.push((key, token.to_string()));
            }
        }
        None => {
            if let (Some(token), Some(object)) = (token, account.as_object_mut()) {
                object.insert("token".into(), serde_json::Value::String(token.to_string()));
            }
        }
    }
    entries.push((realm.data_key(), account.to_string()));
    entries
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("no stored session")]
    Missing,
    #[error("stored session is unreadable: {0}")]
    Malformed(String),
    #[error("{0}")]
    Rejected(String),
}

impl GateError {
    /// Whether the realm's storage keys must be wiped before redirecting
    pub fn clears_storage(&self) -> bool {
        !matches!(self, GateError::Missing)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Decide whether the stored values admit the user into `realm`.
pub fn evaluate_gate(
    realm: Realm,
    token: Option<&str>,
    blob: Option<&str>,
) -> Result<Session, GateError> {
    let blob = non_empty(blob).ok_or(GateError::Missing)?;
    let malformed = |e: serde_json::Error| GateError::Malformed(e.to_string());

    match realm {
        Realm::Admin | Realm::Master => {
            let token = non_empty(token).ok_or(GateError::Missing)?;
            let data: AdminData = serde_json::from_str(blob).map_err(malformed)?;
            if data.status != ActiveStatus::Active {
                return Err(GateError::Rejected("Your account is inactive".into()));
            }
            if realm == Realm::Master && data.role != "master" {
                return Err(GateError::Rejected("Master access required".into()));
            }
            Ok(Session {
                realm,
                token: Some(token.to_string()),
                user_id: data.id,
                name: data.name,
                email: data.email,
            })
        }
        Realm::Vendor => {
            let data: VendorData = serde_json::from_str(blob).map_err(malformed)?;
            if data.status != VendorStatus::Approved {
                return Err(GateError::Rejected(
                    "Your vendor account is not approved".into(),
                ));
            }
            let name = if data.business_name.is_empty() {
                data.name
            } else {
                data.business_name
            };
            Ok(Session {
                realm,
                token: data.token,
                user_id: data.id,
                name,
                email: data.email,
            })
        }
        Realm::Customer => {
            let data: CustomerData = serde_json::from_str(blob).map_err(malformed)?;
            Ok(Session {
                realm,
                token: data.token,
                user_id: data.id,
                name: data.name,
                email: data.email,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = r#"{"_id":"a1","name":"Priya","email":"p@shop.in","role":"admin","status":"active"}"#;

    #[test]
    fn test_admin_session() {
        let session = evaluate_gate(Realm::Admin, Some("tok"), Some(ADMIN)).unwrap();
        assert_eq!(session.user_id, "a1");
        assert_eq!(
            session.auth_headers(),
            vec![("Authorization", "Bearer tok".to_string())]
        );
    }

    #[test]
    fn test_missing_values_redirect_without_clearing() {
        let err = evaluate_gate(Realm::Admin, None, Some(ADMIN)).unwrap_err();
        assert_eq!(err, GateError::Missing);
        assert!(!err.clears_storage());
        let err = evaluate_gate(Realm::Customer, None, Some("  ")).unwrap_err();
        assert_eq!(err, GateError::Missing);
    }

    #[test]
    fn test_malformed_blob_clears_storage() {
        let err = evaluate_gate(Realm::Admin, Some("tok"), Some("{not json")).unwrap_err();
        assert!(matches!(err, GateError::Malformed(_)));
        assert!(err.clears_storage());
    }

    #[test]
    fn test_unapproved_vendor_is_rejected() {
        let blob = r#"{"_id":"v1","name":"Asha","status":"pending"}"#;
        let err = evaluate_gate(Realm::Vendor, None, Some(blob)).unwrap_err();
        assert!(matches!(err, GateError::Rejected(_)));
        assert!(err.clears_storage());
    }

    #[test]
    fn test_approved_vendor_headers() {
        let blob = r#"{"_id":"v1","name":"Asha","businessName":"Asha Crafts","status":"approved","token":"vt"}"#;
        let session = evaluate_gate(Realm::Vendor, None, Some(blob)).unwrap();
        assert_eq!(session.name, "Asha Crafts");
        assert_eq!(
            session.auth_headers(),
            vec![
                ("Authorization", "Bearer vt".to_string()),
                ("x-user-id", "v1".to_string()),
            ]
        );
    }

    #[test]
    fn test_master_requires_master_role() {
        let err = evaluate_gate(Realm::Master, Some("tok"), Some(ADMIN)).unwrap_err();
        assert!(matches!(err, GateError::Rejected(_)));
        let master = ADMIN.replace("\"admin\"", "\"master\"");
        assert!(evaluate_gate(Realm::Master, Some("tok"), Some(&master)).is_ok());
    }

    #[test]
    fn test_login_entries_per_realm() {
        let account = serde_json::json!({"_id": "a1", "name": "Priya", "status": "active"});
        let entries = login_entries(Realm::Admin, Some("tok"), account.clone());
        assert_eq!(entries[0], ("adminToken", "tok".to_string()));
        assert_eq!(entries[1].0, "adminData");

        let entries = login_entries(Realm::Customer, Some("ct"), account);
        assert_eq!(entries.len(), 1);
        let (key, blob) = &entries[0];
        assert_eq!(*key, "user");
        let session = evaluate_gate(Realm::Customer, None, Some(blob)).unwrap();
        assert_eq!(session.token.as_deref(), Some("ct"));
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(Realm::Admin.storage_keys(), vec!["adminData", "adminToken"]);
        assert_eq!(Realm::Customer.storage_keys(), vec!["user"]);
    }
}
