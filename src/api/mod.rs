//! HTTP access to the EduPlatform REST API.
//!
//! `ApiClient` centralizes the "am I logged in" decision: every request reads
//! the credential store and attaches the bearer token when one is present.
//! There is no token refresh and no retry; an expired token fails at the
//! server and surfaces as [`ApiError::Unauthorized`].

pub mod auth;
pub mod contents;
pub mod courses;
pub mod enrollments;
pub mod error;
pub mod progress;

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::config::Config;
use crate::session::store::CredentialStore;
pub use error::ApiError;
use error::error_message;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: CredentialStore,
}

impl ApiClient {
    pub fn new(config: &Config, store: CredentialStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            store,
        })
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential from the store, when one is present. The
    /// store is read per request, so a login or logout between two calls is
    /// always reflected.
    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.store.get() {
            Some(session) if !session.access_token.is_empty() => {
                req.bearer_auth(session.access_token)
            }
            _ => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Value, ApiError> {
        let res = self.authorize(req).send().await?;
        let status = res.status();
        let body: Value = res.json().await.unwrap_or(Value::Null);
        if status.is_success() {
            return Ok(body);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::Server {
            status: status.as_u16(),
            message: error_message(&body, status),
        })
    }

    pub(crate) async fn get_value(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        self.send(self.http.get(self.url(path)).query(query)).await
    }

    pub(crate) async fn post_value<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn put_value<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }
}

/// Unwrap a list response. The API sometimes paginates (`{"results": [...]}`)
/// and sometimes returns a bare array; anything else degrades to an empty
/// list rather than failing the view.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let items = match value {
        Value::Object(mut map) => match map.remove("results") {
            Some(results) => results,
            None => Value::Object(map),
        },
        other => other,
    };
    match serde_json::from_value(items) {
        Ok(list) => list,
        Err(e) => {
            warn!("list response did not match the expected shape, rendering empty: {e}");
            Vec::new()
        }
    }
}
