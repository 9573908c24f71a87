//! Backend REST access.
//!
//! DESIGN
//! ======
//! Every call flows through the [`http::Gateway`] exactly once: it attaches
//! the bearer token and tears the session down when a stored token is
//! rejected. `api` holds one thin wrapper per endpoint; `types` holds the
//! wire types.

pub mod api;
pub mod http;
pub mod types;
