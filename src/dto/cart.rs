use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub item_id: u64,
    /// Accepted for compatibility; every add counts as one unit.
    pub quantity: Option<i32>,
}

/// `cart_item_id` is set when a new line was created, `new_quantity` when an
/// existing line was bumped.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddToCartResponse {
    pub message: String,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_quantity: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveFromCartResponse {
    pub message: String,
    pub item_id: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
