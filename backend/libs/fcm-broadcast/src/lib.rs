/// Dabbler FCM Broadcast Library
///
/// This library provides the Firebase Cloud Messaging (FCM) client used to
/// broadcast push notifications to topic subscribers.
///
/// It handles:
/// - OAuth2 access-token acquisition via a signed service-account JWT
/// - Token caching with expiry-aware refresh
/// - Topic broadcast delivery through the FCM HTTP v1 API

pub mod client;
pub mod errors;
pub mod models;

pub use client::FcmClient;
pub use errors::BroadcastError;
pub use models::{FcmMessage, FcmMessageContent, ServiceAccountKey};
