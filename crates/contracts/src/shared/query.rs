use serde::{Deserialize, Serialize};

/// Query string of a list request: `?page=1&limit=10&search=...&status=...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            status: None,
            category: None,
            vendor: None,
        }
    }
}

impl ListQuery {
    pub fn first_page(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}
