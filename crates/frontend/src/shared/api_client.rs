//! Thin HTTP client over `gloo_net`.
//!
//! Every call goes through `send`, which attaches the session headers, and
//! every response is decoded through the envelope helpers from `contracts`,
//! so callers only ever see `Result<T, ApiError>`.

use contracts::shared::envelope::{decode_ack, decode_response, ApiError};
use contracts::shared::pagination::{ListPayload, ListResource};
use contracts::shared::query::ListQuery;
use contracts::system::session::Session;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::join_url;
use super::config::use_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ClientConfig {
    origin: String,
    headers: Vec<(&'static str, String)>,
}

/// Copyable handle so it can be moved into any number of event closures.
#[derive(Clone, Copy)]
pub struct ApiClient {
    inner: StoredValue<ClientConfig>,
}

impl ApiClient {
    pub fn new(origin: String, session: Option<&Session>) -> Self {
        let headers = session.map(|s| s.auth_headers()).unwrap_or_default();
        Self {
            inner: StoredValue::new(ClientConfig { origin, headers }),
        }
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<(u16, String), ApiError> {
        let config = self.inner.get_value();
        let url = join_url(&config.origin, path);
        log::debug!("{} {}", method.as_str(), url);

        let mut builder = method.builder(&url).header("Accept", "application/json");
        for (name, value) in &config.headers {
            builder = builder.header(name, value);
        }

        let response = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json)
                .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
        Ok((status, text))
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, body) = self.send(HttpMethod::Get, path, None).await?;
        decode_response(status, &body)
    }

    /// GET `{path}?{query}` and shape the payload into one page
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<ListResource<T>, ApiError> {
        let qs = serde_qs::to_string(query)
            .map_err(|e| ApiError::Decode(format!("Failed to encode query: {}", e)))?;
        let (status, body) = self
            .send(HttpMethod::Get, &format!("{}?{}", path, qs), None)
            .await?;
        let payload: ListPayload<T> = decode_response(status, &body)?;
        Ok(ListResource::from_payload(payload, query))
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let json = Self::encode(body)?;
        let (status, body) = self.send(HttpMethod::Post, path, Some(json)).await?;
        decode_response(status, &body)
    }

    /// Write call whose payload is ignored; returns the server message
    pub async fn write<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<Option<String>, ApiError> {
        let json = Self::encode(body)?;
        let (status, body) = self.send(method, path, Some(json)).await?;
        decode_ack(status, &body)
    }

    pub async fn delete(&self, path: &str) -> Result<Option<String>, ApiError> {
        let (status, body) = self.send(HttpMethod::Delete, path, None).await?;
        decode_ack(status, &body)
    }
}

/// Client for the current subtree: carries the session provided by the
/// nearest auth gate, or no credentials on public pages.
pub fn use_api_client() -> ApiClient {
    let config = use_config();
    let session = use_context::<Session>();
    ApiClient::new(config.api_origin, session.as_ref())
}

/// Log unexpected failures; application messages are only shown to the user.
pub fn log_api_error(context: &str, error: &ApiError) {
    if error.is_unexpected() {
        log::error!("{}: {}", context, error);
    } else {
        log::warn!("{}: {}", context, error);
    }
}
