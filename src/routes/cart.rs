use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::cart::{AddToCartRequest, AddToCartResponse, MessageResponse, RemoveFromCartResponse},
    error::{AppResult, ErrorBody},
    middleware::auth::AuthUser,
    models::Cart,
    routes::params::{JsonBody, parse_item_id},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart).post(add_to_cart))
        .route("/clear", post(clear_cart))
        .route("/{item_id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/carts",
    responses(
        (status = 200, description = "Current cart of the caller", body = Cart),
        (status = 401, description = "Missing or malformed token", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn get_cart(State(state): State<AppState>, user: AuthUser) -> Json<Cart> {
    Json(cart_service::get_cart(&state, &user).await)
}

#[utoipa::path(
    post,
    path = "/carts",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "New cart line created", body = AddToCartResponse),
        (status = 200, description = "Existing line quantity increased", body = AddToCartResponse),
        (status = 400, description = "Malformed body or unavailable item", body = ErrorBody),
        (status = 404, description = "Item not found", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<AddToCartResponse>)> {
    let resp = cart_service::add_to_cart(&state, &user, payload).await?;
    let status = if resp.cart_item_id.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/carts/{item_id}",
    params(
        ("item_id" = u64, Path, description = "Catalog item ID")
    ),
    responses(
        (status = 200, description = "Removed from cart", body = RemoveFromCartResponse),
        (status = 400, description = "Invalid item ID", body = ErrorBody),
        (status = 404, description = "Item not found in cart", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    user: AuthUser,
    Path(item_id): Path<String>,
) -> AppResult<Json<RemoveFromCartResponse>> {
    let item_id = parse_item_id(&item_id)?;
    let resp = cart_service::remove_from_cart(&state, &user, item_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/carts/clear",
    responses(
        (status = 200, description = "Cart emptied", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>, user: AuthUser) -> Json<MessageResponse> {
    Json(cart_service::clear_cart(&state, &user).await)
}
