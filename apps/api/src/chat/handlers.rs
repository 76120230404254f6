use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::Caller;
use crate::chat::selector::{categorize, respond, ChatTopic};
use crate::errors::AppError;
use crate::models::{ApiResponse, UserProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub topic: ChatTopic,
    pub reply: String,
}

/// POST /api/v1/chat
///
/// Anonymous callers get replies built from default profile values. The profile is
/// only read for authenticated callers that name a user.
pub async fn handle_chat(
    caller: Option<Caller>,
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ChatReply>>, AppError> {
    let Json(request) = payload?;

    let profile: Option<UserProfile> = match (caller, request.user_id.as_deref()) {
        (Some(_), Some(user_id)) if !user_id.trim().is_empty() => {
            state.store.get_profile(user_id).await?
        }
        _ => None,
    };

    let topic = categorize(&request.message);
    let reply = respond(&request.message, profile.as_ref(), &mut rand::thread_rng());

    Ok(Json(ApiResponse::ok(ChatReply { topic, reply })))
}
