use crate::handlers::{service_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mentorship_models::{DailyReport, SubmitDailyReport};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct MemberQuery {
    pub member_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SubmitReportRequest {
    pub member_id: Uuid,
    #[serde(flatten)]
    pub report: SubmitDailyReport,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub member_id: Uuid,
    pub feedback: String,
}

/// POST /api/reports
pub async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitReportRequest>,
) -> Result<(StatusCode, Json<DailyReport>), (StatusCode, Json<ErrorResponse>)> {
    let report = state
        .report_service
        .submit(request.member_id, &request.report)
        .await
        .map_err(service_error)?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/reports?member_id=
pub async fn report_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberQuery>,
) -> Result<Json<Vec<DailyReport>>, (StatusCode, Json<ErrorResponse>)> {
    let reports = state
        .report_service
        .history(query.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(reports))
}

/// PUT /api/reports/:id/feedback
pub async fn add_feedback(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<DailyReport>, (StatusCode, Json<ErrorResponse>)> {
    let report = state
        .report_service
        .add_feedback(request.member_id, id, &request.feedback)
        .await
        .map_err(service_error)?;

    Ok(Json(report))
}

/// GET /api/reports/mentor?member_id=
pub async fn mentor_reports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberQuery>,
) -> Result<Json<Vec<DailyReport>>, (StatusCode, Json<ErrorResponse>)> {
    let reports = state
        .report_service
        .reports_for_mentor(query.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(reports))
}
