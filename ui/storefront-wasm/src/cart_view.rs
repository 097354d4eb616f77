//! Cart modal, line items and the header count badge.

use crate::dom::{self, Elements};
use crate::events::on_event;
use crate::state::Storefront;
use crate::toast::Toaster;
use sp_api_types::{CartItem, price_label};
use sp_cart::{CartEvent, CartSummary};
use sp_chrome::{ToastTimeline, added_to_cart_message};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

const EMPTY_CART_HTML: &str = r#"<p class="cart-empty">Cart is empty</p>"#;

/// Keep the badge, toasts and open modal in step with cart mutations.
pub fn subscribe(app: &Storefront) {
    let els = app.els.clone();
    let toaster = Toaster::new(
        els.toast_container.clone(),
        ToastTimeline::new(app.config.toast_display_ms, app.config.toast_exit_ms),
    );
    app.cart
        .borrow_mut()
        .subscribe(move |event: &CartEvent, items: &[CartItem]| {
            update_count(&els, items.len());
            match event {
                CartEvent::Added { item } => toaster.show(&added_to_cart_message(&item.title)),
                CartEvent::Removed { .. } => render(&els, items),
            }
        });
}

pub fn update_count(els: &Elements, count: usize) {
    if let Some(badge) = &els.cart_count {
        dom::set_text(badge, &count.to_string());
    }
}

/// Redraw the line items, the total and the order-details field.
pub fn render(els: &Elements, items: &[CartItem]) {
    let Some(container) = &els.cart_items else {
        return;
    };
    let summary = CartSummary::from_items(items);

    dom::set_inner_html(container, "");
    if summary.is_empty() {
        dom::set_inner_html(container, EMPTY_CART_HTML);
    } else {
        for (index, item) in summary.lines.iter().enumerate() {
            match render_line(index, item) {
                Ok(line) => {
                    let _ = container.append_child(&line);
                }
                Err(err) => tracing::warn!("failed to render cart line {}: {:?}", index, err),
            }
        }
    }

    if let Some(total) = &els.cart_total {
        dom::set_text(total, &summary.total.to_string());
    }
    if let Some(field) = &els.order_details {
        dom::set_field_value(field, &summary.order_details());
    }
}

fn render_line(index: usize, item: &CartItem) -> Result<Element, JsValue> {
    let line = dom::create_element("div")?;
    line.set_class_name("cart-line");

    let title = dom::create_element("span")?;
    title.set_class_name("cart-line-title");
    dom::set_text(&title, &item.title);

    let actions = dom::create_element("div")?;
    actions.set_class_name("cart-line-actions");

    let price = dom::create_element("b")?;
    price.set_class_name("cart-line-price");
    dom::set_text(&price, &price_label(item.price));

    let remove = dom::create_element("button")?;
    remove.set_class_name("cart-remove");
    remove.set_attribute("data-index", &index.to_string())?;
    remove.set_attribute("aria-label", "Remove")?;
    dom::set_text(&remove, "×");

    actions.append_child(&price)?;
    actions.append_child(&remove)?;
    line.append_child(&title)?;
    line.append_child(&actions)?;
    Ok(line)
}

/// One delegated listener on the list handles every `×` button, including
/// those created by later renders.
pub fn bind_remove_buttons(app: &Storefront) -> Result<(), JsValue> {
    let Some(container) = &app.els.cart_items else {
        return Ok(());
    };
    let app2 = app.clone();
    on_event!(container, "click", web_sys::MouseEvent, move |e: web_sys::MouseEvent| {
        let Some(button) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(".cart-remove").ok().flatten())
        else {
            return;
        };
        let index = button
            .get_attribute("data-index")
            .and_then(|raw| raw.parse::<usize>().ok());
        if let Some(index) = index {
            app2.remove_from_cart(index);
        }
    });
    Ok(())
}

pub fn open(app: &Storefront) {
    if let Some(modal) = &app.els.cart_modal {
        dom::set_display(modal, "block");
        render(&app.els, &app.cart_items());
    }
}

pub fn close(els: &Elements) {
    if let Some(modal) = &els.cart_modal {
        dom::set_display(modal, "none");
    }
}

/// Cart button opens the modal; the close control or a click on the
/// backdrop itself (not its content) closes it.
pub fn bind_modal(app: &Storefront) -> Result<(), JsValue> {
    let (Some(cart_btn), Some(modal)) = (&app.els.cart_btn, &app.els.cart_modal) else {
        return Ok(());
    };

    let app2 = app.clone();
    on_event!(cart_btn, "click", web_sys::MouseEvent, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        open(&app2);
    });

    if let Some(close_btn) = &app.els.cart_close {
        let els = app.els.clone();
        on_event!(close_btn, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            close(&els);
        });
    }

    let els = app.els.clone();
    let backdrop: JsValue = modal.clone().into();
    on_event!(gloo_utils::window(), "click", web_sys::MouseEvent, move |e: web_sys::MouseEvent| {
        if e.target().is_some_and(|t| JsValue::from(t) == backdrop) {
            close(&els);
        }
    });

    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_page;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, HtmlTextAreaElement};

    fn click(selector: &str) {
        dom::query(selector)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .expect("clickable element present")
            .click();
    }

    fn text(id: &str) -> String {
        dom::by_id(id).and_then(|el| el.text_content()).unwrap_or_default()
    }

    fn order_details() -> String {
        dom::by_id_typed::<HtmlTextAreaElement>("order-details-input")
            .map(|area| area.value())
            .unwrap_or_default()
    }

    fn modal_display(app: &Storefront) -> String {
        app.els
            .cart_modal
            .as_ref()
            .and_then(|modal| modal.style().get_property_value("display").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn empty_cart_renders_placeholder() {
        let app = test_page::mount();
        render(&app.els, &[]);

        assert!(dom::query(".cart-empty").is_some());
        assert!(dom::query_all(".cart-line").is_empty());
        assert_eq!(text("cart-total-price"), "0");
        assert_eq!(order_details(), "\nTOTAL: 0 grn");
    }

    #[wasm_bindgen_test]
    fn lines_total_and_order_details_follow_items() {
        let app = test_page::mount();
        render(
            &app.els,
            &[CartItem::new("Cup", 150), CartItem::new("Bag", 200)],
        );

        assert!(dom::query(".cart-empty").is_none());
        assert_eq!(dom::query_all(".cart-line").len(), 2);
        assert_eq!(text("cart-total-price"), "350");
        assert_eq!(order_details(), "Cup (150 grn)\nBag (200 grn)\n\nTOTAL: 350 grn");
    }

    #[wasm_bindgen_test]
    fn remove_button_removes_its_line() {
        let app = test_page::mount();
        app.add_to_cart(&CartItem::new("Cup", 150));
        app.add_to_cart(&CartItem::new("Bag", 200));
        subscribe(&app);
        bind_remove_buttons(&app).unwrap();
        render(&app.els, &app.cart_items());

        click(r#".cart-remove[data-index="0"]"#);

        assert_eq!(app.cart_items(), vec![CartItem::new("Bag", 200)]);
        assert_eq!(dom::query_all(".cart-line").len(), 1);
        assert_eq!(text("cart-count"), "1");
        assert_eq!(text("cart-total-price"), "200");
    }

    #[wasm_bindgen_test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let app = test_page::mount();
        bind_modal(&app).unwrap();

        click("#cart-btn");
        assert_eq!(modal_display(&app), "block");
        assert!(dom::query(".cart-empty").is_some());

        click(".cart-content");
        assert_eq!(modal_display(&app), "block");

        click("#cart-modal");
        assert_eq!(modal_display(&app), "none");
    }

    #[wasm_bindgen_test]
    fn close_control_hides_modal() {
        let app = test_page::mount();
        bind_modal(&app).unwrap();

        open(&app);
        click(".close-cart");
        assert_eq!(modal_display(&app), "none");
    }
}
