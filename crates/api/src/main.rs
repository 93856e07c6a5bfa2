// Mentorship Platform API Server
// Main entry point for the coordination backend REST API

mod config;
mod handlers;
mod routes;

use config::Config;
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub struct AppState {
    pub member_service: mentorship_services::MemberService,
    pub organization_service: mentorship_services::OrganizationService,
    pub assignment_service: mentorship_services::AssignmentService,
    pub todo_service: mentorship_services::TodoService,
    pub report_service: mentorship_services::ReportService,
    pub messaging_service: mentorship_services::MessagingService,
    pub notification_service: mentorship_services::NotificationService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,mentorship_api=debug,tower_http=debug".to_string()),
        )
        .init();

    tracing::info!("🚀 Starting Mentorship Platform API Server");
    tracing::info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env();
    tracing::info!("🔌 Server: {}:{}", config.server_host, config.server_port);

    // Initialize database
    tracing::info!("🗄️  Connecting to database...");
    let database = mentorship_database::Database::new(config.database.clone())
        .await
        .expect("Failed to connect to database");
    database.ping().await.expect("Database ping failed");
    tracing::info!("✅ Database connected");

    // Create email service
    let email_service = mentorship_services::EmailService::from_env()
        .expect("Failed to initialize email service");
    tracing::info!("📧 Email service initialized");

    // Create SMS service when configured
    let sms_service = mentorship_services::SmsService::from_env();
    if sms_service.is_some() {
        tracing::info!("📱 SMS service initialized");
    } else {
        tracing::info!("📱 SMS not configured, notifications are email-only");
    }

    // Create notification dispatcher
    let notification_service = mentorship_services::NotificationService::new(
        &database,
        email_service,
        sms_service,
    );
    tracing::info!("🔔 Notification service initialized");

    // Create domain services
    let member_service = mentorship_services::MemberService::new(&database);
    let organization_service = mentorship_services::OrganizationService::new(
        &database,
        notification_service.clone(),
    );
    let assignment_service = mentorship_services::AssignmentService::new(
        &database,
        notification_service.clone(),
    );
    let todo_service =
        mentorship_services::TodoService::new(&database, notification_service.clone());
    let report_service =
        mentorship_services::ReportService::new(&database, notification_service.clone());
    let messaging_service =
        mentorship_services::MessagingService::new(&database, notification_service.clone());
    tracing::info!("🧩 Domain services initialized");

    // Create app state
    let state = Arc::new(AppState {
        member_service,
        organization_service,
        assignment_service,
        todo_service,
        report_service,
        messaging_service,
        notification_service,
    });

    // Create router
    let app = routes::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("✅ Server ready at http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");

    Ok(())
}
