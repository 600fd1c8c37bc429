use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::extractors::AppJson;
use crate::navigation::dto::{NavigateRequest, PageView};
use crate::state::AppState;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/page", get(current_page))
        .route("/navigate", post(navigate))
        .route("/back", post(back))
}

#[instrument(skip(state))]
pub async fn current_page(State(state): State<AppState>) -> Json<PageView> {
    let session = state.session.lock().await;
    Json(PageView::from(&*session))
}

#[instrument(skip(state))]
pub async fn navigate(
    State(state): State<AppState>,
    AppJson(req): AppJson<NavigateRequest>,
) -> Json<PageView> {
    let mut session = state.session.lock().await;
    session.navigate(req.page);
    Json(PageView::from(&*session))
}

#[instrument(skip(state))]
pub async fn back(State(state): State<AppState>) -> Json<PageView> {
    let mut session = state.session.lock().await;
    session.back();
    Json(PageView::from(&*session))
}
