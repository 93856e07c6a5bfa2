use crate::handlers::{service_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mentorship_models::{NewTodoItem, TodoItem, TodoList};
use mentorship_services::TodoListWithItems;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct MemberQuery {
    pub member_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoListRequest {
    pub member_id: Uuid,
    pub items: Vec<NewTodoItem>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemStatusRequest {
    pub member_id: Uuid,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct MentorNotesRequest {
    pub member_id: Uuid,
    pub notes: String,
}

/// POST /api/todos
pub async fn create_todo_list(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTodoListRequest>,
) -> Result<(StatusCode, Json<TodoListWithItems>), (StatusCode, Json<ErrorResponse>)> {
    let list = state
        .todo_service
        .create_today(request.member_id, &request.items)
        .await
        .map_err(service_error)?;

    Ok((StatusCode::CREATED, Json(list)))
}

/// GET /api/todos/today?member_id=
pub async fn today(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberQuery>,
) -> Result<Json<Option<TodoListWithItems>>, (StatusCode, Json<ErrorResponse>)> {
    let list = state
        .todo_service
        .today(query.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(list))
}

/// PUT /api/todo-items/:id/status
pub async fn update_item_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateItemStatusRequest>,
) -> Result<Json<TodoItem>, (StatusCode, Json<ErrorResponse>)> {
    let item = state
        .todo_service
        .set_item_status(request.member_id, id, &request.status)
        .await
        .map_err(service_error)?;

    Ok(Json(item))
}

/// PUT /api/todos/:id/notes
pub async fn add_mentor_notes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<MentorNotesRequest>,
) -> Result<Json<TodoList>, (StatusCode, Json<ErrorResponse>)> {
    let list = state
        .todo_service
        .add_mentor_notes(request.member_id, id, &request.notes)
        .await
        .map_err(service_error)?;

    Ok(Json(list))
}

/// GET /api/todos/mentor?member_id=
pub async fn mentor_todos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberQuery>,
) -> Result<Json<Vec<TodoListWithItems>>, (StatusCode, Json<ErrorResponse>)> {
    let lists = state
        .todo_service
        .lists_for_mentor(query.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(lists))
}
