use crate::handlers::{service_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mentorship_models::{Member, RegisterMember, UpdateNotificationPreferences};
use mentorship_services::{MemberDashboard, MemberProfile};
use std::sync::Arc;
use uuid::Uuid;

/// POST /api/members
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterMember>,
) -> Result<(StatusCode, Json<Member>), (StatusCode, Json<ErrorResponse>)> {
    let member = state
        .member_service
        .register(&request)
        .await
        .map_err(service_error)?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/members/:id
pub async fn profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberProfile>, (StatusCode, Json<ErrorResponse>)> {
    let profile = state
        .member_service
        .profile(id)
        .await
        .map_err(service_error)?;

    Ok(Json(profile))
}

/// GET /api/members/:id/dashboard
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberDashboard>, (StatusCode, Json<ErrorResponse>)> {
    let dashboard = state
        .member_service
        .dashboard(id)
        .await
        .map_err(service_error)?;

    Ok(Json(dashboard))
}

/// PUT /api/members/:id/preferences
pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNotificationPreferences>,
) -> Result<Json<Member>, (StatusCode, Json<ErrorResponse>)> {
    let member = state
        .member_service
        .update_notification_preferences(id, &request)
        .await
        .map_err(service_error)?;

    Ok(Json(member))
}
