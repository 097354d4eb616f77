//! Shopping cart state.
//!
//! `CartManager` owns the ordered item list and mirrors it to a
//! `KeyValueStore` after every mutation. It knows nothing about the DOM:
//! views subscribe through `CartListener` and redraw from the items they are
//! handed.

use sp_api_types::{CURRENCY, CartItem, Price, price_label};
use sp_storage::{CART_KEY, KeyValueStore};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Added { item: CartItem },
    Removed { index: usize, item: CartItem },
}

/// Receives every completed cart mutation together with the cart contents
/// after the mutation and its persistence write.
pub trait CartListener {
    fn on_cart_event(&self, event: &CartEvent, items: &[CartItem]);
}

impl<F> CartListener for F
where
    F: Fn(&CartEvent, &[CartItem]),
{
    fn on_cart_event(&self, event: &CartEvent, items: &[CartItem]) {
        self(event, items)
    }
}

pub struct CartManager<S> {
    store: S,
    items: Vec<CartItem>,
    listeners: Vec<Box<dyn CartListener>>,
}

impl<S> CartManager<S>
where
    S: KeyValueStore,
{
    /// Build a manager from whatever the store holds under `CART_KEY`.
    /// Missing or unreadable data yields an empty cart.
    pub fn restore(store: S) -> Self {
        let items = match store.get(CART_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<CartItem>>(&raw).unwrap_or_else(|err| {
                warn!("discarding malformed persisted cart: {}", err);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read persisted cart: {}", err);
                Vec::new()
            }
        };
        debug!(count = items.len(), "cart restored");

        Self {
            store,
            items,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl CartListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add(&mut self, title: impl Into<String>, price: Price) {
        let item = CartItem::new(title, price);
        self.items.push(item.clone());
        self.persist();
        self.notify(&CartEvent::Added { item });
    }

    /// Remove the item at `index`. Out-of-range indices leave the cart,
    /// the store and the listeners untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<CartItem> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "ignoring out-of-range cart removal");
            return None;
        }
        let item = self.items.remove(index);
        self.persist();
        self.notify(&CartEvent::Removed {
            index,
            item: item.clone(),
        });
        Some(item)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_items(&self.items)
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize cart: {}", err);
                return;
            }
        };
        if let Err(err) = self.store.set(CART_KEY, &json) {
            warn!("failed to persist cart: {}", err);
        }
    }

    fn notify(&self, event: &CartEvent) {
        for listener in &self.listeners {
            listener.on_cart_event(event, &self.items);
        }
    }
}

/// Display-ready view of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartItem>,
    pub total: Price,
}

impl CartSummary {
    pub fn from_items(items: &[CartItem]) -> Self {
        Self {
            lines: items.to_vec(),
            total: items.iter().map(|item| item.price).sum(),
        }
    }

    /// An empty cart renders a placeholder rather than an empty list.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text order used to prefill the order form.
    pub fn order_details(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&format!("{} ({})\n", line.title, price_label(line.price)));
        }
        text.push_str(&format!("\nTOTAL: {} {CURRENCY}", self.total));
        text
    }
}
