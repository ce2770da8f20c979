//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses `base_url` from the configuration when present, otherwise the current
/// window location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base) = config.base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    compose_base(&protocol, &hostname, config.port)
}

fn compose_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        let config = ApiConfig {
            port: 8000,
            base_url: Some("https://api.example.com/".to_string()),
        };
        assert_eq!(api_base(&config), "https://api.example.com");
    }

    #[test]
    fn test_compose_base() {
        assert_eq!(
            compose_base("https:", "admin.example.com", 8443),
            "https://admin.example.com:8443"
        );
    }
}
