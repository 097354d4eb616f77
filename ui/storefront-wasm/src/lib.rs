//! SchoolPrint storefront WASM frontend.
//!
//! Page glue for the shop: theme toggle, scroll-to-top, reveal-on-scroll,
//! mobile nav, the cart modal and the product catalog. Cart and catalog
//! logic live in the `sp-*` crates; this crate only binds them to the DOM.

pub mod api;
pub mod cart_view;
pub mod catalog_view;
pub mod chrome;
pub mod dom;
pub mod events;
pub mod logging;
pub mod state;
pub mod storage;
pub mod theme;
pub mod toast;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_page;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let config = state::page_config();
    logging::init(&config.log_level);

    let els = dom::Elements::bind()?;
    let app = state::Storefront::new(els, config);

    theme::restore(&app);

    // Cart badge reflects whatever survived the last visit
    cart_view::subscribe(&app);
    cart_view::update_count(&app.els, app.cart.borrow().count());

    events::bind_events(&app)?;

    // Catalog last: it is the only step that waits on the network
    catalog_view::load_products(&app).await;

    tracing::info!("storefront ready");
    Ok(())
}
