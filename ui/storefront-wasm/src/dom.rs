//! DOM element bindings.
//!
//! All storefront elements are resolved once at startup. Page sections are
//! optional: a page without a cart modal or nav simply skips that behaviour.
//! The toast container and scroll-to-top button are created when missing.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

// ── Helpers ──

pub fn by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    gloo_utils::document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = gloo_utils::document().query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Set the value of an `<input>` or `<textarea>`.
pub fn set_field_value(el: &Element, val: &str) {
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(val);
    } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(val);
    }
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    gloo_utils::document().create_element(tag)
}

pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

// ── Elements struct ──

/// DOM references used by the storefront.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub root: Element,
    pub body: HtmlElement,

    // Chrome
    pub theme_toggle: Option<Element>,
    pub scroll_top_btn: HtmlElement,
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,

    // Cart
    pub cart_btn: Option<Element>,
    pub cart_count: Option<Element>,
    pub cart_modal: Option<HtmlElement>,
    pub cart_close: Option<Element>,
    pub cart_items: Option<Element>,
    pub cart_total: Option<Element>,
    pub order_details: Option<Element>,

    // Catalog
    pub product_list: Option<Element>,

    pub toast_container: Element,
}

const SCROLL_TOP_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 15l-6-6-6 6"/></svg>"#;

impl Elements {
    /// Resolve all DOM references. Call once after the document is parsed.
    pub fn bind() -> Result<Elements, JsValue> {
        let root = gloo_utils::document_element();
        let body = gloo_utils::body();

        Ok(Elements {
            theme_toggle: by_id("theme-toggle"),
            scroll_top_btn: create_scroll_top_btn(&body)?,
            hamburger: by_id("hamburger-btn"),
            nav_menu: by_id("nav-menu"),
            nav_links: query_all(".nav-links a"),

            cart_btn: by_id("cart-btn"),
            cart_count: by_id("cart-count"),
            cart_modal: by_id_typed::<HtmlElement>("cart-modal"),
            cart_close: query(".close-cart"),
            cart_items: by_id("cart-items"),
            cart_total: by_id("cart-total-price"),
            order_details: by_id("order-details-input"),

            product_list: by_id("product-list"),

            toast_container: ensure_toast_container(&body)?,

            root,
            body,
        })
    }
}

fn create_scroll_top_btn(body: &HtmlElement) -> Result<HtmlElement, JsValue> {
    let btn: HtmlElement = create_element("button")?.dyn_into()?;
    btn.set_id("scrollTopBtn");
    btn.set_inner_html(SCROLL_TOP_ICON);
    body.append_child(&btn)?;
    Ok(btn)
}

/// Return the page's `#toast-container`, creating it when absent.
pub fn ensure_toast_container(body: &HtmlElement) -> Result<Element, JsValue> {
    if let Some(existing) = by_id("toast-container") {
        return Ok(existing);
    }
    let container = create_element("div")?;
    container.set_id("toast-container");
    body.append_child(&container)?;
    Ok(container)
}
