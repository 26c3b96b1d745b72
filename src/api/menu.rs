use super::AppState;
use crate::model::Menu;
use axum::extract::State;
use axum::Json;

/// `GET /menu`
pub async fn get_menu(State(state): State<AppState>) -> Json<Menu> {
    Json(state.menu.as_ref().clone())
}
