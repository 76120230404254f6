//! Axum route handlers for profile endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::Caller;
use crate::errors::AppError;
use crate::models::{ApiResponse, UserProfile};
use crate::profiles::onboarding::{
    complete_demo_onboarding, complete_onboarding, update_profile, OnboardingRequest,
    ProfileUpdate,
};
use crate::profiles::progress::{award_xp, AwardXpRequest, Progress};
use crate::state::AppState;

/// GET /api/v1/users/:user_id/profile
///
/// 404 tells the client to show onboarding.
pub async fn handle_get_profile(
    _caller: Caller,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let profile = state
        .store
        .get_profile(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PATCH /api/v1/users/:user_id/profile
pub async fn handle_update_profile(
    _caller: Caller,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let Json(update) = payload?;
    let profile = update_profile(state.store.as_ref(), &user_id, &update).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// POST /api/v1/users/:user_id/onboarding
pub async fn handle_onboarding(
    _caller: Caller,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<OnboardingRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let Json(request) = payload?;
    let profile = complete_onboarding(state.store.as_ref(), &user_id, &request).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// POST /api/v1/demo/onboarding
///
/// Unauthenticated. Creates a throwaway `demo-user-*` profile.
pub async fn handle_demo_onboarding(
    State(state): State<AppState>,
    payload: Result<Json<OnboardingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<UserProfile>>), AppError> {
    let Json(request) = payload?;
    let profile = complete_demo_onboarding(state.store.as_ref(), &request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(profile))))
}

/// POST /api/v1/users/:user_id/xp
pub async fn handle_award_xp(
    _caller: Caller,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<AwardXpRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Progress>>, AppError> {
    let Json(request) = payload?;
    let progress = award_xp(state.store.as_ref(), &user_id, request.amount).await?;
    Ok(Json(ApiResponse::ok(progress)))
}
