//! Scroll-to-top control, reveal-on-scroll and the mobile nav.

use crate::dom::{self, Elements};
use crate::events::on_event;
use crate::state::Storefront;
use sp_chrome::{NavState, scroll_top_visible};
use sp_config::StorefrontConfig;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions,
};

pub fn bind_scroll_top(app: &Storefront) -> Result<(), JsValue> {
    let window = gloo_utils::window();

    let btn = app.els.scroll_top_btn.clone();
    let threshold = app.config.scroll_top_threshold_px;
    on_event!(window, "scroll", web_sys::Event, move |_: web_sys::Event| {
        let y = gloo_utils::window().scroll_y().unwrap_or(0.0);
        dom::toggle_class(&btn, "show", scroll_top_visible(y, threshold));
    });

    on_event!(app.els.scroll_top_btn, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        gloo_utils::window().scroll_to_with_scroll_to_options(&opts);
    });

    Ok(())
}

/// Fade elements in the first time they enter the viewport. Each element
/// is unobserved once revealed, so scrolling away and back does nothing.
pub fn bind_reveal(config: &StorefrontConfig) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "visible");
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    cb.forget();

    for el in dom::query_all(&config.reveal_selector) {
        dom::add_class(&el, "fade-up");
        observer.observe(&el);
    }
    Ok(())
}

/// Hamburger and nav panel toggle together; any nav link collapses both.
pub fn bind_nav(els: &Elements) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu)) = (&els.hamburger, &els.nav_menu) else {
        return Ok(());
    };
    let state = Rc::new(Cell::new(NavState::default()));

    {
        let state = Rc::clone(&state);
        let (hamburger2, menu2) = (hamburger.clone(), menu.clone());
        on_event!(hamburger, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            let mut nav = state.get();
            let active = nav.toggle();
            state.set(nav);
            dom::toggle_class(&hamburger2, "active", active);
            dom::toggle_class(&menu2, "active", active);
        });
    }

    for link in &els.nav_links {
        let state = Rc::clone(&state);
        let (hamburger2, menu2) = (hamburger.clone(), menu.clone());
        on_event!(link, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            let mut nav = state.get();
            nav.collapse();
            state.set(nav);
            dom::remove_class(&hamburger2, "active");
            dom::remove_class(&menu2, "active");
        });
    }

    Ok(())
}
