use crate::handlers;
use crate::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Members
        .route("/api/members", post(handlers::members::register))
        .route("/api/members/:id", get(handlers::members::profile))
        .route(
            "/api/members/:id/dashboard",
            get(handlers::members::dashboard),
        )
        .route(
            "/api/members/:id/preferences",
            put(handlers::members::update_preferences),
        )
        .route(
            "/api/members/:id/assignments",
            get(handlers::assignments::assignment_history),
        )
        // Organizations
        .route(
            "/api/organizations",
            post(handlers::organizations::create_organization),
        )
        .route(
            "/api/organizations/:id",
            get(handlers::organizations::get_organization),
        )
        .route(
            "/api/organizations/join",
            post(handlers::organizations::join_organization),
        )
        // Assignments
        .route(
            "/api/assignments",
            post(handlers::assignments::create_assignment),
        )
        // Todo lists
        .route("/api/todos", post(handlers::todos::create_todo_list))
        .route("/api/todos/today", get(handlers::todos::today))
        .route("/api/todos/mentor", get(handlers::todos::mentor_todos))
        .route(
            "/api/todos/:id/notes",
            put(handlers::todos::add_mentor_notes),
        )
        .route(
            "/api/todo-items/:id/status",
            put(handlers::todos::update_item_status),
        )
        // Daily reports
        .route(
            "/api/reports",
            post(handlers::reports::submit_report).get(handlers::reports::report_history),
        )
        .route("/api/reports/mentor", get(handlers::reports::mentor_reports))
        .route(
            "/api/reports/:id/feedback",
            put(handlers::reports::add_feedback),
        )
        // Messaging
        .route(
            "/api/conversations",
            post(handlers::messages::start_conversation).get(handlers::messages::inbox),
        )
        .route(
            "/api/conversations/:id/messages",
            get(handlers::messages::conversation_messages).post(handlers::messages::send_message),
        )
        // Notifications
        .route(
            "/api/notifications",
            get(handlers::notifications::list_notifications),
        )
        .route(
            "/api/notifications/:id/read",
            put(handlers::notifications::mark_notification_read),
        )
        // Reminder sweeps (invoked by an external scheduler)
        .route(
            "/api/reminders/morning",
            post(handlers::notifications::send_morning_reminders),
        )
        .route(
            "/api/reminders/evening",
            post(handlers::notifications::send_evening_reminders),
        )
        .with_state(state)
}
