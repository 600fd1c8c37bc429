use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::error::AppResult;
use crate::extractors::AppJson;
use crate::recipes::dto::{LikeResponse, RecipeDraft, RecipeView, RecipesView};
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/recipes", get(list_recipes))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(add_recipe))
        .route("/recipes/:id/like", post(toggle_like))
}

#[instrument(skip(state))]
pub async fn list_recipes(State(state): State<AppState>) -> AppResult<Json<RecipesView>> {
    let session = state.session.lock().await;
    Ok(Json(RecipesView::from(session.recipes()?)))
}

#[instrument(skip(state, draft))]
pub async fn add_recipe(
    State(state): State<AppState>,
    AppJson(draft): AppJson<RecipeDraft>,
) -> AppResult<(StatusCode, Json<RecipeView>)> {
    let mut session = state.session.lock().await;
    let recipe = session.recipes_mut()?.add_recipe(draft)?;
    Ok((StatusCode::CREATED, Json(RecipeView::new(recipe, false))))
}

#[instrument(skip(state))]
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<LikeResponse>> {
    let mut session = state.session.lock().await;
    let browser = session.recipes_mut()?;
    let liked = browser.toggle_like(&id)?;
    Ok(Json(LikeResponse {
        recipe_id: id,
        liked,
        liked_count: browser.liked().len(),
    }))
}
