pub mod assignments;
pub mod health;
pub mod members;
pub mod messages;
pub mod notifications;
pub mod organizations;
pub mod reports;
pub mod todos;

use axum::http::StatusCode;
use axum::Json;
use mentorship_database::DatabaseError;
use mentorship_services::ServiceError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Map a service failure onto an HTTP status + JSON body.
pub fn service_error(e: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &e {
        ServiceError::CrossOrganizationAssignment => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "cross_organization_assignment",
        ),
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        ServiceError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        ServiceError::AlreadyExists(_) => (StatusCode::CONFLICT, "already_exists"),
        ServiceError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
        ServiceError::Database(DatabaseError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "not_found")
        }
        ServiceError::Database(DatabaseError::ConstraintViolation(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "constraint_violation",
        ),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("request failed: {}", e);
    }

    (status, Json(ErrorResponse::new(code, &e.to_string())))
}
