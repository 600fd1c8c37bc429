use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::diary::repo::DiaryError;
use crate::profile::onboarding::OnboardingError;
use crate::recipes::repo::RecipeError;
use crate::session::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rej: JsonRejection) -> Self {
        AppError::Validation(rej.body_text())
    }
}

impl From<OnboardingError> for AppError {
    fn from(e: OnboardingError) -> Self {
        match e {
            OnboardingError::WrongStep { .. } => AppError::Conflict(e.to_string()),
            OnboardingError::Invalid(_) | OnboardingError::EmptyAvatarValue => {
                AppError::Validation(e.to_string())
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::WrongPage { .. } | SessionError::NotOnRecipes { .. } => {
                AppError::Conflict(e.to_string())
            }
            SessionError::Onboarding(inner) => inner.into(),
        }
    }
}

impl From<DiaryError> for AppError {
    fn from(e: DiaryError) -> Self {
        match e {
            DiaryError::EntryNotFound(_) | DiaryError::MealNotFound { .. } => {
                AppError::NotFound(e.to_string())
            }
            DiaryError::EmptyMealName | DiaryError::Food(_) => AppError::Validation(e.to_string()),
        }
    }
}

impl From<RecipeError> for AppError {
    fn from(e: RecipeError) -> Self {
        match e {
            RecipeError::NotFound(_) => AppError::NotFound(e.to_string()),
            RecipeError::NotPersonal | RecipeError::EmptyName | RecipeError::Ingredient(_) => {
                AppError::Validation(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
