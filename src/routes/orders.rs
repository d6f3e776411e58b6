use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::orders::PlaceOrderResponse,
    error::{AppResult, ErrorBody},
    middleware::auth::AuthUser,
    models::Order,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_orders).post(place_order))
}

#[utoipa::path(
    post,
    path = "/orders",
    responses(
        (status = 201, description = "Order placed from the current cart", body = PlaceOrderResponse),
        (status = 400, description = "Cart is empty", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<(StatusCode, Json<PlaceOrderResponse>)> {
    let resp = order_service::place_order(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Orders placed by the caller", body = Vec<Order>)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>, user: AuthUser) -> Json<Vec<Order>> {
    Json(order_service::list_orders(&state, &user).await)
}
