use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    pub stock: i32,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }
}

/// One item + quantity entry in a cart. `item` is the catalog entry as it was
/// when the line was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub id: u64,
    pub item_id: u64,
    pub quantity: i32,
    pub item: Item,
    pub created_at: DateTime<Utc>,
}

impl CartLine {
    pub fn subtotal(&self) -> i64 {
        self.item.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub id: u64,
    pub user_id: u64,
    pub cart_items: Vec<CartLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Completed,
}

/// Snapshot of the cart lines an order was placed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderCart {
    pub cart_items: Vec<CartLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub total: i64,
    pub status: OrderStatus,
    pub cart_id: u64,
    pub cart: OrderCart,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub username: String,
}
