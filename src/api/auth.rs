//! `POST /auth/login/` and `POST /auth/register/`.
//!
//! Both endpoints are called without a bearer credential and map non-success
//! responses to [`ApiError::Credentials`] carrying the server's message, so
//! the caller can render it inline with the session state untouched.

use serde_json::Value;

use super::{error::error_message, ApiClient, ApiError};
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    pub async fn login(&self, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.credential_exchange("/auth/login/", body).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.credential_exchange("/auth/register/", body).await
    }

    async fn credential_exchange<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthResponse, ApiError> {
        let res = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await?;
        let status = res.status();
        let value: Value = res.json().await.unwrap_or(Value::Null);
        if !status.is_success() {
            return Err(ApiError::Credentials(error_message(&value, status)));
        }
        let auth: AuthResponse = serde_json::from_value(value)
            .map_err(|e| ApiError::UnexpectedResponse(e.to_string()))?;
        if auth.access.is_empty() || auth.refresh.is_empty() {
            return Err(ApiError::UnexpectedResponse(
                "authentication succeeded but tokens are missing".into(),
            ));
        }
        Ok(auth)
    }
}
