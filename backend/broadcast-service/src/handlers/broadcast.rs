/// Broadcast notification handler
use std::sync::Arc;

use actix_web::{web, HttpResponse, Result as ActixResult};
use fcm_broadcast::FcmClient;
use serde_json::json;

use crate::models::BroadcastRequest;

/// Broadcast a push notification to a topic
///
/// POST /
///
/// The body is parsed by hand so a malformed JSON payload follows the
/// generic server-error path instead of the extractor's 400.
pub async fn broadcast(
    client: web::Data<Arc<FcmClient>>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    let request: BroadcastRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => return Ok(internal_error(&e.to_string())),
    };

    let (title, text) = match request.required_fields() {
        Some(fields) => fields,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Missing required fields: title, body"
            })));
        }
    };

    let topic = request.topic();
    match client
        .send_to_topic(topic, title, text, request.data.clone())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "message": format!("Broadcast notification sent to topic: {}", topic),
            "topic": topic,
        }))),
        Err(e) => {
            tracing::error!(topic = topic, error = %e, "Broadcast failed");
            Ok(internal_error(&e.to_string()))
        }
    }
}

/// Reject anything that is not a POST to the broadcast route
pub async fn method_not_allowed() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::MethodNotAllowed().json(json!({
        "error": "Method not allowed"
    })))
}

fn internal_error(details: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "error": "Internal server error",
        "details": details,
    }))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::post().to(broadcast));
}
