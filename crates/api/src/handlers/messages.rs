use crate::handlers::{service_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mentorship_models::{ChatMessage, Conversation, ConversationSummary, NewChatMessage};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct MemberQuery {
    pub member_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct StartConversationRequest {
    pub member_id: Uuid,
    pub other_member_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub member_id: Uuid,
    pub content: String,
}

/// POST /api/conversations
pub async fn start_conversation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartConversationRequest>,
) -> Result<Json<Conversation>, (StatusCode, Json<ErrorResponse>)> {
    let conversation = state
        .messaging_service
        .start_conversation(request.member_id, request.other_member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(conversation))
}

/// GET /api/conversations?member_id=
pub async fn inbox(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemberQuery>,
) -> Result<Json<Vec<ConversationSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let summaries = state
        .messaging_service
        .inbox(query.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(summaries))
}

/// GET /api/conversations/:id/messages?member_id=
pub async fn conversation_messages(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<MemberQuery>,
) -> Result<Json<Vec<ChatMessage>>, (StatusCode, Json<ErrorResponse>)> {
    let messages = state
        .messaging_service
        .messages(id, query.member_id)
        .await
        .map_err(service_error)?;

    Ok(Json(messages))
}

/// POST /api/conversations/:id/messages
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), (StatusCode, Json<ErrorResponse>)> {
    let message = state
        .messaging_service
        .send_message(
            id,
            request.member_id,
            &NewChatMessage {
                content: request.content,
            },
        )
        .await
        .map_err(service_error)?;

    Ok((StatusCode::CREATED, Json(message)))
}
