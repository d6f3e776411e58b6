use crate::{
    dto::cart::{AddToCartRequest, AddToCartResponse, MessageResponse, RemoveFromCartResponse},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Cart,
    services::item_service::find_purchasable,
    state::AppState,
};

pub async fn get_cart(state: &AppState, user: &AuthUser) -> Cart {
    let cart_items = state.store.cart_lines(user.user_id).await;
    tracing::debug!(user_id = user.user_id, lines = cart_items.len(), "cart fetched");

    Cart {
        id: user.user_id,
        user_id: user.user_id,
        cart_items,
    }
}

/// Adds one unit of the requested item. `payload.quantity` is ignored.
pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<AddToCartResponse> {
    let item = find_purchasable(state, payload.item_id)?;
    let addition = state.store.add_to_cart(user.user_id, &item).await?;

    let response = if addition.created {
        tracing::info!(
            user_id = user.user_id,
            item_id = item.id,
            item_name = %item.name,
            "added new item to cart"
        );
        AddToCartResponse {
            message: "Item added to cart successfully".into(),
            item_name: item.name,
            cart_item_id: Some(addition.line.id),
            new_quantity: None,
        }
    } else {
        tracing::info!(
            user_id = user.user_id,
            item_id = item.id,
            quantity = addition.line.quantity,
            "updated cart item quantity"
        );
        AddToCartResponse {
            message: "Item quantity updated in cart".into(),
            item_name: item.name,
            cart_item_id: None,
            new_quantity: Some(addition.line.quantity),
        }
    };

    Ok(response)
}

pub async fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    item_id: u64,
) -> AppResult<RemoveFromCartResponse> {
    state.store.remove_from_cart(user.user_id, item_id).await?;
    tracing::info!(user_id = user.user_id, item_id, "removed item from cart");

    Ok(RemoveFromCartResponse {
        message: "Item removed from cart successfully".into(),
        item_id,
    })
}

pub async fn clear_cart(state: &AppState, user: &AuthUser) -> MessageResponse {
    let dropped = state.store.clear_cart(user.user_id).await;
    tracing::info!(user_id = user.user_id, dropped, "cart cleared");

    MessageResponse {
        message: "Cart cleared successfully".into(),
    }
}
