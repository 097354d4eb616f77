//! Fixture page for browser tests.

use crate::dom::Elements;
use crate::state::Storefront;
use gloo_storage::{LocalStorage, Storage};
use sp_config::StorefrontConfig;
use sp_storage::CART_KEY;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
<a id="cart-btn" href="#">Cart <span id="cart-count">0</span></a>
<div id="cart-modal" style="display:none">
  <div class="cart-content">
    <span class="close-cart">&times;</span>
    <div id="cart-items"></div>
    <span id="cart-total-price">0</span>
    <textarea id="order-details-input"></textarea>
  </div>
</div>
<div id="product-list"></div>
"##;

/// Replace the body with the storefront fixture and start from an empty cart.
pub fn mount() -> Storefront {
    gloo_utils::body().set_inner_html(PAGE);
    LocalStorage::delete(CART_KEY);
    let els = Elements::bind().expect("fixture page binds");
    Storefront::new(els, StorefrontConfig::default())
}
