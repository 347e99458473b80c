use leptos::prelude::*;

use super::api_utils::api_base;

/// Runtime settings of the front-end.
///
/// The API origin can be fixed at build time with `MARKET_API_ORIGIN`;
/// otherwise it is derived from the page location (port 3000).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_origin: String,
    /// Rows per page in dashboard tables
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub message_ttl_ms: u32,
    pub carousel_interval_ms: u32,
    /// Products fetched once for the storefront showcase
    pub showcase_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_origin: String::new(),
            page_size: 10,
            page_size_options: vec![10, 25, 50, 100],
            message_ttl_ms: 5_000,
            carousel_interval_ms: 6_000,
            showcase_size: 20,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_origin = match option_env!("MARKET_API_ORIGIN") {
            Some(origin) if !origin.is_empty() => origin.to_string(),
            _ => api_base(),
        };
        Self {
            api_origin,
            ..Self::default()
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}
