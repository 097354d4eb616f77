//! Page-session application handle.
//!
//! One `Storefront` is built at startup and cloned into every event
//! callback. The cart lives behind `Rc<RefCell<_>>` (WASM is
//! single-threaded); there is no module-level singleton.

use crate::dom::Elements;
use crate::storage;
use sp_api_types::CartItem;
use sp_cart::CartManager;
use sp_config::{PageOverrides, StorefrontConfig};
use sp_storage::KeyValueStore;
use std::cell::RefCell;
use std::rc::Rc;

pub type PageStore = Rc<dyn KeyValueStore>;
pub type SharedCart = Rc<RefCell<CartManager<PageStore>>>;

#[derive(Clone)]
pub struct Storefront {
    pub els: Elements,
    pub config: Rc<StorefrontConfig>,
    pub store: PageStore,
    pub cart: SharedCart,
}

impl Storefront {
    pub fn new(els: Elements, config: StorefrontConfig) -> Self {
        let store = storage::page_store();
        let cart = CartManager::restore(Rc::clone(&store));
        Self {
            els,
            config: Rc::new(config),
            store,
            cart: Rc::new(RefCell::new(cart)),
        }
    }

    pub fn add_to_cart(&self, item: &CartItem) {
        self.cart.borrow_mut().add(item.title.clone(), item.price);
    }

    pub fn remove_from_cart(&self, index: usize) {
        self.cart.borrow_mut().remove_at(index);
    }

    pub fn cart_items(&self) -> Vec<CartItem> {
        self.cart.borrow().items().to_vec()
    }
}

/// Defaults, overridden by `data-catalog-url` / `data-log-level` on `<html>`.
pub fn page_config() -> StorefrontConfig {
    let root = gloo_utils::document_element();
    StorefrontConfig::default().with_overrides(PageOverrides {
        catalog_url: root.get_attribute("data-catalog-url"),
        log_level: root.get_attribute("data-log-level"),
    })
}

