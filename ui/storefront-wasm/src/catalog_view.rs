//! Product list rendering.
//!
//! Shows a loading placeholder, loads the catalog (falling back to the
//! sample products) and renders one card per product. Each card's button
//! adds the title and price captured when the card was built.

use crate::api::HttpCatalogSource;
use crate::dom;
use crate::events::on_event;
use crate::state::Storefront;
use gloo_timers::callback::Timeout;
use sp_catalog::{Catalog, ProductCard};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlImageElement};

const LOADING_HTML: &str = r#"<p class="catalog-status">Loading...</p>"#;
const LOAD_ERROR_HTML: &str = r#"<p class="catalog-status catalog-status--error">Failed to load products (see console).</p>"#;

pub async fn load_products(app: &Storefront) {
    let Some(list) = app.els.product_list.clone() else {
        return;
    };
    dom::set_inner_html(&list, LOADING_HTML);

    let source = HttpCatalogSource::new(app.config.catalog_url.as_str());
    let catalog = sp_catalog::load(&source).await;

    if let Err(err) = render_catalog(app, &list, &catalog) {
        tracing::error!("failed to render catalog: {:?}", err);
        dom::set_inner_html(&list, LOAD_ERROR_HTML);
    }
}

fn render_catalog(app: &Storefront, list: &Element, catalog: &Catalog) -> Result<(), JsValue> {
    dom::set_inner_html(list, "");
    for card in catalog.cards(&app.config.placeholder_image) {
        let el = render_card(app, &card)?;
        list.append_child(&el)?;

        let delayed = el.clone();
        Timeout::new(app.config.card_reveal_delay_ms, move || {
            dom::add_class(&delayed, "visible");
        })
        .forget();
    }
    Ok(())
}

fn render_card(app: &Storefront, card: &ProductCard) -> Result<Element, JsValue> {
    let item = dom::create_element("div")?;
    item.set_class_name("product-item fade-up");

    let img: HtmlImageElement = dom::create_element("img")?.dyn_into()?;
    img.set_src(&card.image_src);
    img.set_alt(&card.title);
    img.set_attribute("loading", "lazy")?;

    let title = dom::create_element("h3")?;
    dom::set_text(&title, &card.title);

    let description = dom::create_element("p")?;
    dom::set_text(&description, &card.description);

    let price = dom::create_element("div")?;
    price.set_class_name("product-price");
    dom::set_text(&price, &card.price_label);

    let button = dom::create_element("button")?;
    button.set_class_name("btn full-width");
    dom::set_text(&button, "Add to cart");

    let app2 = app.clone();
    let captured = card.add_to_cart.clone();
    on_event!(button, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
        app2.add_to_cart(&captured);
    });

    item.append_child(&img)?;
    item.append_child(&title)?;
    item.append_child(&description)?;
    item.append_child(&price)?;
    item.append_child(&button)?;
    Ok(item)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_page;
    use sp_api_types::{CartItem, Product};
    use sp_catalog::{CatalogOrigin, FallbackReason, sample_catalog};
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    fn fallback(products: Vec<Product>) -> Catalog {
        Catalog {
            products,
            origin: CatalogOrigin::Fallback(FallbackReason::Empty),
        }
    }

    fn product_list(app: &Storefront) -> Element {
        app.els.product_list.clone().expect("fixture has #product-list")
    }

    #[wasm_bindgen_test]
    fn sample_catalog_renders_three_cards() {
        let app = test_page::mount();
        let list = product_list(&app);
        render_catalog(&app, &list, &fallback(sample_catalog())).unwrap();

        let cards = dom::query_all(".product-item");
        assert_eq!(cards.len(), 3);
        let first_title = cards[0]
            .query_selector("h3")
            .ok()
            .flatten()
            .and_then(|h| h.text_content());
        assert_eq!(first_title.as_deref(), Some("Branded cup"));
        assert!(dom::query(".catalog-status").is_none());
    }

    #[wasm_bindgen_test]
    fn add_button_adds_captured_title_and_price() {
        let app = test_page::mount();
        let list = product_list(&app);
        render_catalog(&app, &list, &fallback(sample_catalog())).unwrap();

        dom::query(".product-item .btn")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .expect("add button present")
            .click();

        assert_eq!(app.cart_items(), vec![CartItem::new("Branded cup", 150)]);
    }

    #[wasm_bindgen_test]
    fn card_without_image_uses_placeholder() {
        let app = test_page::mount();
        let list = product_list(&app);
        let product = Product {
            title: "Pen".to_owned(),
            price: 25,
            image: None,
            description: "Blue ink.".to_owned(),
        };
        render_catalog(&app, &list, &fallback(vec![product])).unwrap();

        let img: HtmlImageElement = dom::query(".product-item img")
            .and_then(|el| el.dyn_into().ok())
            .expect("card image present");
        assert_eq!(img.src(), app.config.placeholder_image);
    }
}
