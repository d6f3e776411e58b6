use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{CartLine, Item, Order, OrderCart, OrderStatus},
};

/// Result of adding an item to a cart.
#[derive(Debug, Clone)]
pub struct CartAddition {
    pub line: CartLine,
    /// `false` when an existing line had its quantity bumped.
    pub created: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: u64,
    pub total: i64,
}

#[derive(Debug, Default)]
struct ShopState {
    carts: HashMap<u64, Vec<CartLine>>,
    orders: Vec<Order>,
    last_line_id: u64,
    last_order_id: u64,
}

impl ShopState {
    fn next_line_id(&mut self) -> u64 {
        self.last_line_id += 1;
        self.last_line_id
    }

    fn next_order_id(&mut self) -> u64 {
        self.last_order_id += 1;
        self.last_order_id
    }
}

/// Carts and orders for every user. All mutations go through one lock so
/// read-modify-write sequences never interleave.
#[derive(Debug, Default)]
pub struct ShopStore {
    state: Mutex<ShopState>,
}

impl ShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item` to the user's cart. The item must already be
    /// resolved against the catalog.
    pub async fn add_to_cart(&self, user_id: u64, item: &Item) -> AppResult<CartAddition> {
        let mut state = self.state.lock().await;

        let cart = state.carts.entry(user_id).or_default();
        if let Some(line) = cart.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or_else(|| AppError::BadRequest("Item quantity limit reached".into()))?;
            return Ok(CartAddition {
                line: line.clone(),
                created: false,
            });
        }

        let id = state.next_line_id();
        let line = CartLine {
            id,
            item_id: item.id,
            quantity: 1,
            item: item.clone(),
            created_at: Utc::now(),
        };
        state
            .carts
            .entry(user_id)
            .or_default()
            .push(line.clone());

        Ok(CartAddition {
            line,
            created: true,
        })
    }

    pub async fn cart_lines(&self, user_id: u64) -> Vec<CartLine> {
        let state = self.state.lock().await;
        state.carts.get(&user_id).cloned().unwrap_or_default()
    }

    pub async fn remove_from_cart(&self, user_id: u64, item_id: u64) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let cart = state.carts.get_mut(&user_id);

        let position = cart
            .as_ref()
            .and_then(|lines| lines.iter().position(|line| line.item_id == item_id));

        match (cart, position) {
            (Some(lines), Some(index)) => {
                lines.remove(index);
                Ok(())
            }
            _ => Err(AppError::NotFound("Item not found in cart".into())),
        }
    }

    /// Empties the user's cart and returns how many lines were dropped.
    pub async fn clear_cart(&self, user_id: u64) -> usize {
        let mut state = self.state.lock().await;
        state
            .carts
            .remove(&user_id)
            .map(|lines| lines.len())
            .unwrap_or(0)
    }

    /// Turns the user's cart into a completed order and empties the cart.
    pub async fn place_order(&self, user_id: u64) -> AppResult<PlacedOrder> {
        let mut state = self.state.lock().await;

        let lines = match state.carts.remove(&user_id) {
            Some(lines) if !lines.is_empty() => lines,
            _ => return Err(AppError::InvalidState("Cart is empty".into())),
        };

        let total = lines.iter().map(CartLine::subtotal).sum();
        let order_id = state.next_order_id();
        state.orders.push(Order {
            id: order_id,
            user_id,
            total,
            status: OrderStatus::Completed,
            cart_id: user_id,
            cart: OrderCart { cart_items: lines },
            created_at: Utc::now(),
        });

        Ok(PlacedOrder { order_id, total })
    }

    /// Orders in placement order, optionally only those of one user.
    pub async fn orders(&self, user_id: Option<u64>) -> Vec<Order> {
        let state = self.state.lock().await;
        state
            .orders
            .iter()
            .filter(|order| user_id.is_none_or(|id| order.user_id == id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn item(catalog: &Catalog, id: u64) -> Item {
        catalog.find(id).cloned().expect("catalog item")
    }

    #[tokio::test]
    async fn adding_same_item_twice_bumps_quantity() {
        let catalog = Catalog::default();
        let store = ShopStore::new();
        let laptop = item(&catalog, 1);

        let first = store.add_to_cart(1, &laptop).await.unwrap();
        let second = store.add_to_cart(1, &laptop).await.unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(second.line.id, first.line.id);
        assert_eq!(second.line.quantity, 2);

        let lines = store.cart_lines(1).await;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[tokio::test]
    async fn lines_keep_insertion_order() {
        let catalog = Catalog::default();
        let store = ShopStore::new();
        for id in [3, 1, 2, 1] {
            store.add_to_cart(1, &item(&catalog, id)).await.unwrap();
        }

        let ids: Vec<u64> = store.cart_lines(1).await.iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn removing_missing_item_leaves_cart_untouched() {
        let catalog = Catalog::default();
        let store = ShopStore::new();
        store.add_to_cart(1, &item(&catalog, 2)).await.unwrap();
        let before = store.cart_lines(1).await;

        let err = store.remove_from_cart(1, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.cart_lines(1).await, before);
    }

    #[tokio::test]
    async fn removing_from_unknown_cart_is_not_found() {
        let store = ShopStore::new();
        let err = store.remove_from_cart(42, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_preserves_order_of_remaining_lines() {
        let catalog = Catalog::default();
        let store = ShopStore::new();
        for id in [1, 2, 3] {
            store.add_to_cart(1, &item(&catalog, id)).await.unwrap();
        }

        store.remove_from_cart(1, 2).await.unwrap();

        let ids: Vec<u64> = store.cart_lines(1).await.iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn empty_cart_cannot_be_ordered() {
        let store = ShopStore::new();
        let err = store.place_order(1).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert!(store.orders(None).await.is_empty());
    }

    #[tokio::test]
    async fn order_total_is_sum_of_lines_and_cart_is_cleared() {
        let catalog = Catalog::default();
        let store = ShopStore::new();
        // 2 x Laptop (59999) + 1 x Mouse (1999) + 1 x Webcam (4999)
        for id in [1, 5, 1, 8] {
            store.add_to_cart(7, &item(&catalog, id)).await.unwrap();
        }

        let placed = store.place_order(7).await.unwrap();
        assert_eq!(placed.total, 2 * 59999 + 1999 + 4999);
        assert!(store.cart_lines(7).await.is_empty());

        let orders = store.orders(Some(7)).await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, placed.order_id);
        assert_eq!(orders[0].status, OrderStatus::Completed);
        assert_eq!(orders[0].cart.cart_items.len(), 3);
    }

    #[tokio::test]
    async fn order_ids_increase_and_filter_by_user() {
        let catalog = Catalog::default();
        let store = ShopStore::new();

        store.add_to_cart(1, &item(&catalog, 1)).await.unwrap();
        let a = store.place_order(1).await.unwrap();
        store.add_to_cart(2, &item(&catalog, 2)).await.unwrap();
        let b = store.place_order(2).await.unwrap();

        assert!(b.order_id > a.order_id);
        assert_eq!(store.orders(None).await.len(), 2);
        assert_eq!(store.orders(Some(2)).await[0].total, 29999);
        assert!(store.orders(Some(3)).await.is_empty());
    }

    #[tokio::test]
    async fn quantity_overflow_is_rejected_without_changing_line() {
        let catalog = Catalog::default();
        let store = ShopStore::new();
        let laptop = item(&catalog, 1);
        store.add_to_cart(1, &laptop).await.unwrap();
        store.state.lock().await.carts.get_mut(&1).unwrap()[0].quantity = i32::MAX;

        let err = store.add_to_cart(1, &laptop).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(store.cart_lines(1).await[0].quantity, i32::MAX);
    }

    #[tokio::test]
    async fn clear_cart_reports_dropped_lines() {
        let catalog = Catalog::default();
        let store = ShopStore::new();
        store.add_to_cart(1, &item(&catalog, 1)).await.unwrap();
        store.add_to_cart(1, &item(&catalog, 2)).await.unwrap();

        assert_eq!(store.clear_cart(1).await, 2);
        assert_eq!(store.clear_cart(1).await, 0);
    }

    #[tokio::test]
    async fn concurrent_adds_are_not_lost() {
        let catalog = Catalog::default();
        let store = std::sync::Arc::new(ShopStore::new());
        let laptop = item(&catalog, 1);

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                let laptop = laptop.clone();
                tokio::spawn(async move { store.add_to_cart(1, &laptop).await.map(|_| ()) })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let lines = store.cart_lines(1).await;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 50);
    }
}
