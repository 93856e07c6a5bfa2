use crate::handlers::{service_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mentorship_models::Notification;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct MemberQuery {
    pub member_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub member_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub contacted: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/notifications?member_id=
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberQuery>,
) -> Result<Json<Vec<Notification>>, (StatusCode, Json<ErrorResponse>)> {
    let notifications = state
        .notification_service
        .list(query.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(notifications))
}

/// PUT /api/notifications/:id/read
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<MarkReadRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .notification_service
        .mark_read(id, request.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(MessageResponse {
        message: "Notification marked as read".to_string(),
    }))
}

/// POST /api/reminders/morning
pub async fn send_morning_reminders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReminderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let contacted = state
        .notification_service
        .send_morning_reminders()
        .await
        .map_err(service_error)?;

    Ok(Json(ReminderResponse { contacted }))
}

/// POST /api/reminders/evening
pub async fn send_evening_reminders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReminderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let contacted = state
        .notification_service
        .send_evening_reminders()
        .await
        .map_err(service_error)?;

    Ok(Json(ReminderResponse { contacted }))
}
