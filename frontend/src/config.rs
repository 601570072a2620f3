//! Build-time configuration.
//!
//! The dashboard is a static bundle, so settings are baked in when it is
//! compiled (`ADMIN_API_BASE_URL=https://api.example.com trunk build`).
//! Every setting has a default suitable for serving the bundle behind the
//! same origin as the API.

/// Prefix prepended to every REST path.
pub const API_BASE_URL: &str = match option_env!("ADMIN_API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// `localStorage` key holding the bearer credential.
pub const TOKEN_KEY: &str = match option_env!("ADMIN_TOKEN_KEY") {
    Some(key) => key,
    None => "token",
};

/// How long toasts stay on screen.
pub const TOAST_MS: u32 = 3000;

const DEFAULT_CACHE_STALE_MS: f64 = 30_000.0;

/// Age after which a cached list is revalidated in the background.
pub fn cache_stale_ms() -> f64 {
    option_env!("ADMIN_CACHE_STALE_MS")
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| *value >= 0.0)
        .unwrap_or(DEFAULT_CACHE_STALE_MS)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_urls_join_without_double_slashes() {
        assert!(api_url("/auth/me").ends_with("/auth/me"));
        assert!(!api_url("/auth/me").contains("//auth"));
    }
}
