use crate::{
    dto::orders::PlaceOrderResponse,
    error::AppResult,
    middleware::auth::AuthUser,
    models::Order,
    state::AppState,
};

/// Checks out the caller's cart. Fails with `InvalidState` when it is empty.
pub async fn place_order(state: &AppState, user: &AuthUser) -> AppResult<PlaceOrderResponse> {
    let placed = state.store.place_order(user.user_id).await?;
    tracing::info!(
        user_id = user.user_id,
        order_id = placed.order_id,
        total = placed.total,
        "order placed"
    );

    Ok(PlaceOrderResponse {
        message: "Order placed successfully".into(),
        order_id: placed.order_id,
        total: placed.total,
    })
}

pub async fn list_orders(state: &AppState, user: &AuthUser) -> Vec<Order> {
    let orders = state.store.orders(Some(user.user_id)).await;
    tracing::debug!(user_id = user.user_id, count = orders.len(), "orders fetched");
    orders
}
