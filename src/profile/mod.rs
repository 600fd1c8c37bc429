pub mod dto;
pub mod handlers;
pub mod onboarding;
pub mod types;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::onboarding_routes())
        .merge(handlers::me_routes())
}
