//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{UserId, ValueObjectError},
    infrastructure::dto::{
        http::{ComplaintSocialDto, ConversationDto, MessageDto, PresenceSnapshotDto},
        websocket::comment_to_payload,
    },
    ui::state::AppState,
    usecase::{FetchHistoryUseCase, ListConversationsUseCase},
};

/// Header carrying the requester's identity.
///
/// A fronting proxy is expected to set this from the verified session; the
/// server itself only checks that the value is a well-formed user id.
const USER_ID_HEADER: &str = "x-user-id";

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get conversation history with one counterpart
///
/// Side effect: unread messages from the counterpart to the requester are
/// marked read. The returned page is the pre-mark snapshot, oldest first.
pub async fn get_conversation_history(
    State(state): State<Arc<AppState>>,
    Path(counterpart): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<MessageDto>>, StatusCode> {
    let requester = requester_from_headers(&state, &headers).await?;
    let counterpart = match UserId::new(counterpart) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Invalid counterpart id in history request: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let usecase = FetchHistoryUseCase::new(state.messages.clone());
    let history = usecase.execute(&requester, &counterpart).await;

    Ok(Json(history.iter().map(MessageDto::from).collect()))
}

/// Get the requester's conversation list
///
/// One entry per counterpart, carrying only the most recent message, newest
/// conversation first.
pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ConversationDto>>, StatusCode> {
    let requester = requester_from_headers(&state, &headers).await?;

    let usecase = ListConversationsUseCase::new(state.messages.clone());
    let conversations = usecase.execute(&requester).await;

    Ok(Json(conversations.iter().map(ConversationDto::from).collect()))
}

/// Get the social state of one complaint
///
/// Comments come from storage; likes come from the process-local cache and
/// reset on restart.
pub async fn get_complaint_social(
    State(state): State<Arc<AppState>>,
    Path(complaint_id): Path<String>,
) -> Result<Json<ComplaintSocialDto>, StatusCode> {
    let id = match crate::domain::ComplaintId::new(complaint_id) {
        Ok(id) => id,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };

    let complaint = match state.complaints.find(&id).await {
        Ok(complaint) => complaint,
        Err(crate::domain::RepositoryError::ComplaintNotFound(_)) => {
            return Err(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            tracing::error!("Failed to load complaint '{}': {}", id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    let likes = state.likes.likes_for(&id).await;

    Ok(Json(ComplaintSocialDto {
        id: complaint.id.as_str().to_string(),
        likes: likes.into_iter().map(UserId::into_string).collect(),
        comments: complaint.comments.iter().map(comment_to_payload).collect(),
    }))
}

/// Get the set of users currently online
pub async fn get_presence(State(state): State<Arc<AppState>>) -> Json<PresenceSnapshotDto> {
    let online = state.presence.online_users().await;
    Json(PresenceSnapshotDto {
        online: online.into_iter().map(UserId::into_string).collect(),
    })
}

/// Resolve the requester from the identity header, or 401.
async fn requester_from_headers(
    state: &Arc<AppState>,
    headers: &HeaderMap,
) -> Result<UserId, StatusCode> {
    let claimed = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    state.verifier.verify(claimed).await.map_err(|e: ValueObjectError| {
        tracing::warn!("Rejected identity header '{}': {}", claimed, e);
        StatusCode::UNAUTHORIZED
    })
}
