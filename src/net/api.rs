//! REST API wrappers, one per backend endpoint.
//!
//! Browser builds issue real HTTP calls through the shared
//! [`Gateway`](crate::net::http::Gateway); non-browser builds return stub
//! errors since these endpoints are only meaningful next to a live backend.

#![allow(clippy::unused_async)]

use crate::net::http::ApiError;
use crate::net::types::{HealthResponse, Item, NewItem, SignupRequest, SignupResponse, TokenResponse};

#[cfg(feature = "csr")]
use crate::net::http::Gateway;

#[cfg(not(feature = "csr"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available outside the browser".to_owned()))
}

/// Exchange credentials for a bearer token via `POST /api/v1/auth/login`.
///
/// # Errors
///
/// 401 with a `detail` message for rejected credentials.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser()
            .post_form(
                "/api/v1/auth/login",
                &[("username", username), ("password", password)],
            )
            .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        unavailable()
    }
}

/// Register a new account via `POST /api/v1/auth/signup`.
///
/// # Errors
///
/// 400 with a `detail` such as "Username already taken".
pub async fn signup(request: &SignupRequest) -> Result<SignupResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser().post_json("/api/v1/auth/signup", request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        unavailable()
    }
}

/// Confirm a signup via `GET /api/v1/auth/confirm/{token}`.
/// Only the status matters; the success body is not load-bearing.
///
/// # Errors
///
/// 400 with a `detail` for an invalid or expired token.
pub async fn confirm(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser()
            .get(&format!("/api/v1/auth/confirm/{token}"))
            .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        unavailable()
    }
}

/// Fetch all items via `GET /api/v1/items`.
///
/// # Errors
///
/// 401 when the stored token is stale (the gateway tears the session down).
pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser().get_json("/api/v1/items").await
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable()
    }
}

/// Create an item via `POST /api/v1/items`.
///
/// # Errors
///
/// See [`fetch_items`].
pub async fn create_item(item: &NewItem) -> Result<Item, ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser().post_json("/api/v1/items", item).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = item;
        unavailable()
    }
}

/// Update an item via `PUT /api/v1/items/{id}`.
///
/// # Errors
///
/// 404 when the item no longer exists.
pub async fn update_item(item_id: i64, item: &NewItem) -> Result<Item, ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser()
            .put_json(&format!("/api/v1/items/{item_id}"), item)
            .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (item_id, item);
        unavailable()
    }
}

/// Delete an item via `DELETE /api/v1/items/{id}`.
///
/// # Errors
///
/// 404 when the item no longer exists.
pub async fn delete_item(item_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser()
            .delete(&format!("/api/v1/items/{item_id}"))
            .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = item_id;
        unavailable()
    }
}

/// Backend liveness probe via `GET /api/v1/health/`. Unauthenticated.
///
/// # Errors
///
/// Transport failures only.
pub async fn fetch_health() -> Result<HealthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        Gateway::browser().get_json("/api/v1/health/").await
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable()
    }
}
