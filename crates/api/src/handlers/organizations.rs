use crate::handlers::{service_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mentorship_models::{CreateOrganization, Member, Organization};
use mentorship_services::{JoinOutcome, OrganizationRoster};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_by: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CreateOrganizationResponse {
    pub organization: Organization,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinOrganizationRequest {
    pub join_code: String,
    pub member_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct JoinOrganizationResponse {
    pub organization: Organization,
    pub member: Member,
    pub assigned_mentor: Option<Member>,
    pub message: String,
}

/// POST /api/organizations
pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<Json<CreateOrganizationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let create = CreateOrganization {
        name: request.name,
        description: request.description,
    };

    let organization = state
        .organization_service
        .create_organization(&create, request.created_by)
        .await
        .map_err(service_error)?;

    let message = format!(
        "Organization \"{}\" created. Join code: {}",
        organization.name, organization.join_code
    );

    Ok(Json(CreateOrganizationResponse {
        organization,
        message,
    }))
}

/// GET /api/organizations/:id
pub async fn get_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrganizationRoster>, (StatusCode, Json<ErrorResponse>)> {
    let roster = state
        .organization_service
        .roster(id)
        .await
        .map_err(service_error)?;

    Ok(Json(roster))
}

/// POST /api/organizations/join
pub async fn join_organization(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JoinOrganizationRequest>,
) -> Result<Json<JoinOrganizationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let JoinOutcome {
        organization,
        member,
        assigned_mentor,
    } = state
        .organization_service
        .join_organization(&request.join_code, request.member_id)
        .await
        .map_err(service_error)?;

    let message = match &assigned_mentor {
        Some(mentor) => format!(
            "Joined {} and assigned to {}",
            organization.name, mentor.display_name
        ),
        None => format!("Joined {}", organization.name),
    };

    Ok(Json(JoinOrganizationResponse {
        organization,
        member,
        assigned_mentor,
        message,
    }))
}
