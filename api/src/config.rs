//! Client configuration, read from environment variables with
//! conservative in-code defaults.

use std::env;

/// Returns the base URL of the pool API, without a trailing slash.
///
/// # Environment Variables
/// - `POOL_API_URL`: overrides the default endpoint, e.g.
///   `https://api.examplepool.org/v2`.
pub fn base_url() -> String {
    /// Default used when `POOL_API_URL` is unset; points at a local
    /// development instance of the pool API.
    const POOL_API_URL: &str = "http://localhost:8080/api/v2";

    let url = env::var("POOL_API_URL").unwrap_or_else(|_| POOL_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!base_url().ends_with('/'));
    }
}
