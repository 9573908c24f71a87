//! Backend endpoint configuration.

/// Base URL of the backend REST service.
///
/// Fixed at compile time via the `API_URL` environment variable; local
/// development falls back to the dev backend on port 8000.
pub fn api_base_url() -> &'static str {
    option_env!("API_URL").unwrap_or("http://localhost:8000")
}
