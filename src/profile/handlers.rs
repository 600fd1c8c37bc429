use axum::{
    extract::State,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::error::{AppError, AppResult};
use crate::extractors::AppJson;
use crate::profile::dto::OnboardingView;
use crate::profile::onboarding::{AvatarEdit, ProfileForm};
use crate::profile::types::UserProfile;
use crate::state::AppState;

pub fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/onboarding", get(get_onboarding))
        .route("/onboarding/profile", post(submit_profile))
        .route("/onboarding/avatar", patch(edit_avatar))
        .route("/onboarding/complete", post(complete_onboarding))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state))]
pub async fn get_onboarding(State(state): State<AppState>) -> AppResult<Json<OnboardingView>> {
    let session = state.session.lock().await;
    Ok(Json(OnboardingView::from(session.onboarding()?)))
}

#[instrument(skip(state, form))]
pub async fn submit_profile(
    State(state): State<AppState>,
    AppJson(form): AppJson<ProfileForm>,
) -> AppResult<Json<OnboardingView>> {
    let mut session = state.session.lock().await;
    let wizard = session.onboarding_mut()?;
    wizard.submit_profile(&form)?;
    Ok(Json(OnboardingView::from(&*wizard)))
}

#[instrument(skip(state))]
pub async fn edit_avatar(
    State(state): State<AppState>,
    AppJson(edit): AppJson<AvatarEdit>,
) -> AppResult<Json<OnboardingView>> {
    let mut session = state.session.lock().await;
    let wizard = session.onboarding_mut()?;
    wizard.edit_avatar(edit)?;
    Ok(Json(OnboardingView::from(&*wizard)))
}

#[instrument(skip(state))]
pub async fn complete_onboarding(State(state): State<AppState>) -> AppResult<Json<UserProfile>> {
    let mut session = state.session.lock().await;
    let profile = session.complete_onboarding()?;
    info!(name = %profile.name, "profile created");
    Ok(Json(profile))
}

#[instrument(skip(state))]
pub async fn get_me(State(state): State<AppState>) -> AppResult<Json<UserProfile>> {
    let session = state.session.lock().await;
    session
        .profile()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Onboarding not completed".into()))
}
