use chrono::{Duration, Utc};

use crate::models::{Item, ItemStatus};

/// Fixed list of purchasable items. Built once at start-up and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn find(&self, item_id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let now = Utc::now();
        let items = [
            (1, "Laptop", "High-performance laptop", 59999, 10, 30),
            (2, "Smartphone", "Latest smartphone", 29999, 15, 25),
            (3, "Headphones", "Wireless headphones", 9999, 20, 20),
            (4, "Keyboard", "Mechanical keyboard", 7999, 25, 15),
            (5, "Mouse", "Wireless mouse", 1999, 30, 10),
            (6, "Monitor", "4K monitor", 24999, 8, 5),
            (7, "Tablet", "10-inch tablet", 34999, 12, 3),
            (8, "Webcam", "HD webcam", 4999, 18, 1),
        ]
        .into_iter()
        .map(|(id, name, description, price, stock, days_ago)| Item {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            stock,
            status: ItemStatus::Available,
            created_at: now - Duration::days(days_ago),
        })
        .collect();

        Self::new(items)
    }
}
