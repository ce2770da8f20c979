use thiserror::Error;

/// Coarse classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never completed (offline, DNS, CORS, timeout)
    Transport,
    /// The backend answered, but not with what was asked for
    Backend,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::Backend { .. } | ApiError::Decode(_) => ErrorKind::Backend,
        }
    }

    /// Builds a backend error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Backend {
            status,
            message: backend_message(status, body),
        }
    }
}

/// Human-readable message of an error body.
///
/// Looks for the first non-blank `message`, `error` or `detail`; falls back
/// to a generic text naming the status code.
pub fn backend_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error", "detail"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(|v| v.as_str())
                    .map(str::trim)
                    .filter(|message| !message.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_is_surfaced_verbatim() {
        let error = ApiError::from_response(400, r#"{"message": "Category already exists"}"#);
        assert_eq!(error.to_string(), "Category already exists");
        assert_eq!(error.kind(), ErrorKind::Backend);
    }

    #[test]
    fn test_error_and_detail_fields() {
        assert_eq!(
            backend_message(409, r#"{"error": "Pincode in use"}"#),
            "Pincode in use"
        );
        assert_eq!(
            backend_message(403, r#"{"detail": "Not allowed"}"#),
            "Not allowed"
        );
        assert_eq!(
            backend_message(400, r#"{"message": "", "error": "Bad status"}"#),
            "Bad status"
        );
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        assert_eq!(
            backend_message(422, r#"{"message": "  ", "error": "", "detail": "Invalid pincode"}"#),
            "Invalid pincode"
        );
        assert_eq!(
            backend_message(400, r#"{"message": "", "error": ""}"#),
            "Request failed with status 400"
        );
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(
            backend_message(502, "<html>Bad Gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(
            backend_message(500, r#"{"error": {"code": 17}}"#),
            "Request failed with status 500"
        );
    }

    #[test]
    fn test_transport_kind() {
        let error = ApiError::Transport("Failed to fetch".into());
        assert_eq!(error.kind(), ErrorKind::Transport);
        assert_eq!(error.to_string(), "Network error: Failed to fetch");
    }
}
