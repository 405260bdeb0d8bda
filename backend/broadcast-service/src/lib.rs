/// Dabbler Broadcast Service
///
/// HTTP front for topic push-notification broadcasts. Validates inbound
/// requests and relays them to Firebase Cloud Messaging through the shared
/// `fcm-broadcast` client.
pub mod config;
pub mod handlers;
pub mod models;

pub use config::Config;
