use crate::handlers::{service_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mentorship_models::MentorAssignment;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub mentee_id: Uuid,
    pub mentor_id: Uuid,
    pub assigned_by: Uuid,
    #[serde(default)]
    pub notes: String,
}

/// POST /api/assignments
pub async fn create_assignment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<MentorAssignment>), (StatusCode, Json<ErrorResponse>)> {
    let notes = if request.notes.is_empty() {
        "Reassigned by admin".to_string()
    } else {
        request.notes
    };

    let assignment = state
        .assignment_service
        .assign(
            request.mentee_id,
            request.mentor_id,
            request.assigned_by,
            &notes,
        )
        .await
        .map_err(service_error)?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/members/:id/assignments
pub async fn assignment_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MentorAssignment>>, (StatusCode, Json<ErrorResponse>)> {
    let history = state
        .assignment_service
        .history(id)
        .await
        .map_err(service_error)?;

    Ok(Json(history))
}
