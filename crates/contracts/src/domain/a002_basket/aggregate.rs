use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Line of the basket (also used for the dishes of a placed order).
/// `id` is the dish id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub total_price: f64,
    pub amount: u32,
    #[serde(default)]
    pub image: String,
}

impl BasketItem {
    pub fn display_text(&self) -> String {
        format!("{} - {} x {} ₽", self.name, self.amount, self.price)
    }
}

/// Snapshot of the server-side basket with derived totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasketState {
    items: Vec<BasketItem>,
    item_count: u32,
    total_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasketSummary {
    pub item_count: u32,
    pub total_price: f64,
    pub unique_items: usize,
}

impl BasketState {
    pub fn from_items(items: Vec<BasketItem>) -> Self {
        let mut state = Self::default();
        state.replace_items(items);
        state
    }

    /// Replace the contents with a fresh server response
    pub fn replace_items(&mut self, items: Vec<BasketItem>) {
        self.items = items;
        self.recalculate();
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Amount of `dish_id` in the basket, 0 when absent
    pub fn quantity_of(&self, dish_id: Uuid) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == dish_id)
            .map(|item| item.amount)
            .unwrap_or(0)
    }

    pub fn summary(&self) -> BasketSummary {
        BasketSummary {
            item_count: self.item_count,
            total_price: self.total_price,
            unique_items: self.items.len(),
        }
    }

    pub fn clear(&mut self) {
        self.replace_items(Vec::new());
    }

    fn recalculate(&mut self) {
        self.item_count = self.items.iter().map(|item| item.amount).sum();
        self.total_price = self.items.iter().map(|item| item.total_price).sum();
    }
}
