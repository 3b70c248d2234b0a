use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::auth::{Anonymous, TokenProvider};
use crate::config::ApiConfig;
use crate::error::{ApiError, error_message};

/// Whether a request carries the session's bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Never attach a token.
    Anonymous,
    /// Attach a token when a session exists.
    Optional,
    /// Fail with [`ApiError::Unauthenticated`] before sending when there is no session.
    Required,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.config.base_url()).finish()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { http: reqwest::Client::new(), config, tokens }
    }

    pub fn anonymous(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(Anonymous))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    async fn token_for(&self, auth: Auth) -> Result<Option<String>, ApiError> {
        if auth == Auth::Anonymous {
            return Ok(None);
        }
        let token = self.tokens.token().await.map_err(|e| ApiError::Token(e.to_string()))?;
        match (auth, token) {
            (Auth::Required, None) => Err(ApiError::Unauthenticated),
            (_, token) => Ok(token),
        }
    }

    /// Sends the request and returns the body of a 2xx response.
    pub(crate) async fn send(&self, request: RequestBuilder, auth: Auth) -> Result<String, ApiError> {
        let token = self.token_for(auth).await?;
        let request = match &token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!("API {} {} (token: {})", method, path, token.is_some());

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = error_message(status, &body);
            tracing::warn!("API {} {} failed: {}: {}", method, path, status.as_u16(), message);
            return Err(ApiError::Status { status: status.as_u16(), message });
        }
        Ok(body)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, auth: Auth) -> Result<T, ApiError> {
        let body = self.send(request, auth).await?;
        Ok(serde_json::from_str::<T>(&body)?)
    }
}
