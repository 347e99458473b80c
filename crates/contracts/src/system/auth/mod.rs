use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a successful login. The account document comes back under a
/// realm-specific key (`admin`, `vendor`, `user`) and is stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(alias = "admin", alias = "master", alias = "vendor")]
    pub user: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realm_specific_account_key() {
        let admin: LoginResponse =
            serde_json::from_str(r#"{"token":"t","admin":{"_id":"a1"}}"#).unwrap();
        assert_eq!(admin.token.as_deref(), Some("t"));
        assert_eq!(admin.user["_id"], "a1");

        let vendor: LoginResponse =
            serde_json::from_str(r#"{"vendor":{"_id":"v1","status":"approved"}}"#).unwrap();
        assert!(vendor.token.is_none());
        assert_eq!(vendor.user["status"], "approved");
    }
}
