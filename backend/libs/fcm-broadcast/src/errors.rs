use thiserror::Error;

/// Broadcast Client Error Types
#[derive(Error, Debug)]
pub enum BroadcastError {
    #[error("Failed to parse private key: {0}")]
    KeyParse(String),

    #[error("Failed to encode JWT: {0}")]
    JwtEncode(String),

    #[error("Failed to get access token: {status} - {body}")]
    TokenExchange { status: u16, body: String },

    #[error("Failed to parse token response: {0}")]
    TokenParse(String),

    #[error("FCM request failed: {status} - {body}")]
    FcmRequest { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_diagnostics() {
        let err = BroadcastError::TokenExchange {
            status: 401,
            body: r#"{"error": "invalid_grant"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("invalid_grant"));

        let err = BroadcastError::FcmRequest {
            status: 404,
            body: "project not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("project not found"));
    }
}
