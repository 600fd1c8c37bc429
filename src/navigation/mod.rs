pub mod dto;
pub mod handlers;
pub mod page;

use crate::state::AppState;
use axum::Router;

pub use page::Page;

pub fn router() -> Router<AppState> {
    handlers::page_routes()
}
