//! Event binding.
//!
//! Wires every page-chrome listener once at startup. Each section is bound
//! only when its elements exist on the page.

use crate::cart_view;
use crate::chrome;
use crate::state::Storefront;
use crate::theme;
use wasm_bindgen::prelude::*;

/// Attach a listener for `$event` and leak the closure for the page lifetime.
/// Expands to a `?` on `addEventListener`, so use it in `Result` functions.
macro_rules! on_event {
    ($target:expr, $event:expr, $ty:ty, $cb:expr) => {{
        use ::wasm_bindgen::JsCast as _;
        let cb = ::wasm_bindgen::closure::Closure::wrap(Box::new($cb) as Box<dyn FnMut($ty)>);
        $target.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

pub(crate) use on_event;

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(app: &Storefront) -> Result<(), JsValue> {
    // ── Theme ──
    if let Some(toggle) = &app.els.theme_toggle {
        let app2 = app.clone();
        on_event!(toggle, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            theme::toggle(&app2);
        });
    }

    // ── Chrome ──
    chrome::bind_scroll_top(app)?;
    chrome::bind_reveal(&app.config)?;
    chrome::bind_nav(&app.els)?;

    // ── Cart ──
    cart_view::bind_modal(app)?;
    cart_view::bind_remove_buttons(app)?;

    Ok(())
}
