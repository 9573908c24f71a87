//! HTTP gateway — the single request/response pipeline for backend calls.
//!
//! The gateway is constructed with a token provider and an unauthorized
//! callback instead of reaching into the session store, so the store and
//! the gateway stay decoupled and tests can observe the teardown side
//! effect directly.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become [`ApiError::Network`]; non-2xx responses
//! become [`ApiError::Status`] carrying the backend `detail` when the body
//! has one. A 401 on a request that carried a bearer token means the stored
//! token is stale: the unauthorized callback runs (clearing the persisted
//! session) before the error reaches the caller. A 401 on an anonymous
//! request — a rejected login — is an ordinary error.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::net::types::ErrorBody;

/// Error produced by the gateway for any failed backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body was not the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The backend answered with a non-success status.
    #[error("status {status}")]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Backend-supplied human-readable detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Network(_) | Self::Decode(_) => None,
            Self::Status { detail, .. } => detail.as_deref(),
        }
    }

    /// Status code, for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(_) | Self::Decode(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Format the `Authorization` header value for a bearer token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response status must tear the session down.
///
/// Only a 401 on a request that actually carried a token means the stored
/// token is absent-equivalent, malformed, or expired. A 401 on an anonymous
/// request is a failed login and stays with the caller.
pub fn should_teardown(status: u16, had_token: bool) -> bool {
    status == 401 && had_token
}

/// Convert a non-success response into an [`ApiError`], pulling `detail`
/// out of the JSON body when present.
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);
    ApiError::Status { status, detail }
}

/// Map a failed response to its error, running `on_unauthorized` first
/// when the rejection invalidates a stored token. The callback completes
/// before the error reaches the caller.
pub fn handle_failure(
    status: u16,
    body: &str,
    had_token: bool,
    on_unauthorized: impl FnOnce(),
) -> ApiError {
    if should_teardown(status, had_token) {
        on_unauthorized();
    }
    error_from_response(status, body)
}

/// The configured HTTP client wrapping all outbound calls.
#[cfg(feature = "csr")]
pub struct Gateway {
    base_url: String,
    token_provider: std::rc::Rc<dyn Fn() -> Option<String>>,
    on_unauthorized: std::rc::Rc<dyn Fn()>,
}

#[cfg(feature = "csr")]
impl Gateway {
    /// Build a gateway from its collaborators.
    pub fn new(
        base_url: String,
        token_provider: impl Fn() -> Option<String> + 'static,
        on_unauthorized: impl Fn() + 'static,
    ) -> Self {
        Self {
            base_url,
            token_provider: std::rc::Rc::new(token_provider),
            on_unauthorized: std::rc::Rc::new(on_unauthorized),
        }
    }

    /// Gateway wired to the browser: the token comes from `localStorage`,
    /// and a stale token clears the persisted session and sends the
    /// browser to the login page.
    pub fn browser() -> Self {
        use crate::storage::{BrowserStorage, SessionStorage, TOKEN_KEY, clear_session};

        Self::new(
            crate::config::api_base_url().to_owned(),
            || BrowserStorage.get(TOKEN_KEY),
            || {
                clear_session(&BrowserStorage);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            },
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Shared pipeline: attach the bearer token, send, and map failures.
    async fn dispatch(
        &self,
        builder: gloo_net::http::RequestBuilder,
        body: Option<String>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let token = (self.token_provider)();
        let had_token = token.is_some();
        let builder = match &token {
            Some(token) => builder.header("Authorization", &bearer_header(token)),
            None => builder,
        };

        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(handle_failure(status, &body, had_token, || {
            (self.on_unauthorized)();
        }))
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET` returning a JSON body.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .dispatch(gloo_net::http::Request::get(&self.url(path)), None)
            .await?;
        Self::decode(response).await
    }

    /// `GET` where only the status matters.
    pub async fn get(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(gloo_net::http::Request::get(&self.url(path)), None)
            .await
            .map(|_| ())
    }

    /// `POST` with a URL-encoded form body.
    pub async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let builder = gloo_net::http::Request::post(&self.url(path))
            .header("Content-Type", "application/x-www-form-urlencoded");
        let response = self
            .dispatch(builder, Some(crate::util::form::encode_pairs(fields)))
            .await?;
        Self::decode(response).await
    }

    /// `POST` with a JSON body.
    pub async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload =
            serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let builder = gloo_net::http::Request::post(&self.url(path))
            .header("Content-Type", "application/json");
        let response = self.dispatch(builder, Some(payload)).await?;
        Self::decode(response).await
    }

    /// `PUT` with a JSON body.
    pub async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload =
            serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let builder = gloo_net::http::Request::put(&self.url(path))
            .header("Content-Type", "application/json");
        let response = self.dispatch(builder, Some(payload)).await?;
        Self::decode(response).await
    }

    /// `DELETE` where only the status matters.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(gloo_net::http::Request::delete(&self.url(path)), None)
            .await
            .map(|_| ())
    }
}
