use axum::{Json, Router, extract::State, routing::get};

use crate::{models::Item, services::item_service, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_items))
}

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "List catalog items", body = Vec<Item>)
    ),
    tag = "Items"
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(item_service::list_items(&state))
}
