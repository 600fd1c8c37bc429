use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use time::{macros::format_description, Date};
use tracing::instrument;

use crate::diary::dto::{DiaryView, EntryView, MealDraft, MealEdit, MealView};
use crate::error::{AppError, AppResult};
use crate::extractors::AppJson;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/diary", get(get_diary))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/diary/:date/meals", post(add_meal))
        .route("/diary/:date/meals/:meal_id", put(edit_meal))
}

fn parse_date(raw: &str) -> AppResult<Date> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|_| AppError::Validation(format!("invalid date {raw:?}, expected YYYY-MM-DD")))
}

#[instrument(skip(state))]
pub async fn get_diary(State(state): State<AppState>) -> AppResult<Json<DiaryView>> {
    let session = state.session.lock().await;
    let diary = session.diary()?;
    Ok(Json(DiaryView {
        entries: diary.entries().iter().map(EntryView::from).collect(),
    }))
}

#[instrument(skip(state, draft))]
pub async fn add_meal(
    State(state): State<AppState>,
    Path(date): Path<String>,
    AppJson(draft): AppJson<MealDraft>,
) -> AppResult<(StatusCode, Json<MealView>)> {
    let date = parse_date(&date)?;
    let mut session = state.session.lock().await;
    let meal = session.diary_mut()?.add_meal(date, draft)?;
    Ok((StatusCode::CREATED, Json(MealView::from(meal))))
}

#[instrument(skip(state, edit))]
pub async fn edit_meal(
    State(state): State<AppState>,
    Path((date, meal_id)): Path<(String, String)>,
    AppJson(edit): AppJson<MealEdit>,
) -> AppResult<Json<MealView>> {
    let date = parse_date(&date)?;
    let mut session = state.session.lock().await;
    let meal = session.diary_mut()?.edit_meal(date, &meal_id, edit)?;
    Ok(Json(MealView::from(meal)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::app::build_app;
    use crate::state::AppState;
    use crate::test_support::send;

    async fn open_diary() -> axum::Router {
        let app = build_app(AppState::fake());
        send(&app, Method::POST, "/api/v1/navigate", Some(json!({"page": "diary"}))).await;
        app
    }

    #[tokio::test]
    async fn diary_shows_sample_day() {
        let app = open_diary().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/diary", None).await;
        assert_eq!(status, StatusCode::OK);
        let day = &body["entries"][0];
        assert_eq!(day["date"], "2024-07-12");
        assert_eq!(day["display_date"], "Friday, July 12, 2024");
        assert_eq!(day["totals"], json!({"calories": 600.0, "protein": 43.0, "carbs": 60.0, "fat": 16.0}));
        assert_eq!(day["meals"][0]["name"], "Breakfast");
    }

    #[tokio::test]
    async fn add_then_edit_meal() {
        let app = open_diary().await;
        let (status, meal) = send(
            &app,
            Method::POST,
            "/api/v1/diary/2024-07-12/meals",
            Some(json!({
                "name": "Dinner",
                "foods": [{"name": "Salmon", "calories": 280, "protein": 39, "carbs": 0, "fat": 13}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(meal["totals"]["calories"], 280.0);
        let meal_id = meal["id"].as_str().unwrap().to_string();

        let (status, edited) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/diary/2024-07-12/meals/{meal_id}"),
            Some(json!({"name": "Late dinner"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(edited["name"], "Late dinner");
        assert_eq!(edited["foods"][0]["name"], "Salmon");

        let (_, body) = send(&app, Method::GET, "/api/v1/diary", None).await;
        assert_eq!(body["entries"][0]["totals"]["calories"], 880.0);
        assert_eq!(body["entries"][0]["meals"][2]["name"], "Late dinner");
    }

    #[tokio::test]
    async fn rejects_bad_input() {
        let app = open_diary().await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/diary/july-12/meals",
            Some(json!({"name": "Dinner"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/diary/2024-07-12/meals",
            Some(json!({
                "name": "Dinner",
                "foods": [{"name": "Mystery", "calories": -5, "protein": 0, "carbs": 0, "fat": 0}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]["message"].as_str().unwrap().contains("calories"));

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/diary/2024-07-12/meals/unknown",
            Some(json!({"name": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_food_id_on_day_rejected() {
        let app = open_diary().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/diary/2024-07-12/meals",
            Some(json!({
                "name": "Snack",
                "foods": [{"id": "1", "name": "Oats", "calories": 150, "protein": 5, "carbs": 27, "fat": 3}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], 422);

        let (status, body) = send(&app, Method::POST, "/api/v1/diary/2024-07-12/meals", Some(json!({"foods": []}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], 422);
    }

    #[tokio::test]
    async fn diary_actions_need_the_diary_page() {
        let app = build_app(AppState::fake());
        let (status, _) = send(&app, Method::GET, "/api/v1/diary", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
