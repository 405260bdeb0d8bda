use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use broadcast_service::handlers::broadcast::{method_not_allowed, register_routes};
use broadcast_service::Config;
use fcm_broadcast::{FcmClient, ServiceAccountKey};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting broadcast service");

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let credentials: ServiceAccountKey = serde_json::from_str(&config.firebase.service_account)
        .map_err(|e| {
            tracing::error!("Invalid FIREBASE_SERVICE_ACCOUNT: {}", e);
            io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
        })?;

    let fcm_client = Arc::new(FcmClient::new(
        config.firebase.project_id.clone(),
        credentials,
    ));
    tracing::info!(
        project_id = %config.firebase.project_id,
        "FCM client initialized"
    );

    let addr = format!("0.0.0.0:{}", config.app.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(fcm_client.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(register_routes)
            .default_service(web::route().to(method_not_allowed))
    })
    .bind(&addr)?
    .run()
    .await
}
