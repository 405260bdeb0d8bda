use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Firebase Service Account Key
///
/// Deserialized from the service-account JSON blob supplied through
/// configuration. Only the fields this client needs are kept; the blob
/// carries more (key ids, auth URIs) which are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// OAuth2 Token Cache
#[derive(Debug, Clone)]
pub struct TokenCache {
    pub access_token: String,
    pub expires_at: i64,
}

/// JWT Claims for the Google OAuth2 JWT-bearer grant
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Google OAuth2 Token Response
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// FCM v1 Message Request
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FcmMessage {
    pub message: FcmMessageContent,
}

/// FCM v1 Message Content
///
/// `data` is always serialized, even when empty, so the envelope
/// round-trips without losing field presence.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FcmMessageContent {
    pub topic: String,
    pub notification: FcmNotification,
    #[serde(default)]
    pub data: HashMap<String, String>,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
}

/// FCM Notification Payload
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

/// Android delivery hints
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AndroidConfig {
    pub priority: String,
}

/// APNs delivery hints, passed through as an FCM sub-payload
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ApnsConfig {
    pub headers: HashMap<String, String>,
}

/// FCM API Response
#[derive(Debug, Deserialize)]
pub struct FcmApiResponse {
    pub name: Option<String>,
}

impl FcmMessage {
    /// Build the broadcast envelope for a topic send.
    ///
    /// Priority hints are fixed: high priority on Android, `apns-priority: 10`
    /// for APNs passthrough.
    pub fn broadcast(topic: &str, title: &str, body: &str, data: HashMap<String, String>) -> Self {
        let mut apns_headers = HashMap::new();
        apns_headers.insert("apns-priority".to_string(), "10".to_string());

        FcmMessage {
            message: FcmMessageContent {
                topic: topic.to_string(),
                notification: FcmNotification {
                    title: title.to_string(),
                    body: body.to_string(),
                },
                data,
                android: AndroidConfig {
                    priority: "high".to_string(),
                },
                apns: ApnsConfig {
                    headers: apns_headers,
                },
            },
        }
    }
}
