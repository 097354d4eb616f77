use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Price in whole currency units (hryvnia).
pub type Price = i64;

/// Currency label appended to every rendered price.
pub const CURRENCY: &str = "grn";

/// Image shown on cards whose product has no image of its own.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300?text=No+Image";

pub fn price_label(price: Price) -> String {
    format!("{price} {CURRENCY}")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub title: String,
    pub price: Price,
}

impl CartItem {
    pub fn new(title: impl Into<String>, price: Price) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(deserialize_with = "lenient_price")]
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Copy of the purchasable part of this product.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.title.clone(), self.price)
    }
}

/// Hand-edited catalogs write prices as `150`, `150.0` or `"150"`.
/// Anything that is not a whole number is rejected.
fn lenient_price<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Whole(i64),
        Float(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Whole(price) => Ok(price),
        RawPrice::Float(price) if price.is_finite() && price.fract() == 0.0 => Ok(price as Price),
        RawPrice::Float(price) => Err(de::Error::custom(format!(
            "price {price} is not a whole number"
        ))),
        RawPrice::Text(text) => text
            .trim()
            .parse::<Price>()
            .map_err(|_| de::Error::custom(format!("price {text:?} is not a whole number"))),
    }
}

/// One element of the catalog `items` array. Entries that do not describe
/// a product are kept as raw JSON so the rest of the catalog still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CatalogEntry {
    Product(Product),
    Invalid(serde_json::Value),
}

/// Body of `content/products.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    #[serde(default)]
    pub items: Option<Vec<CatalogEntry>>,
}

impl CatalogDocument {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            items: Some(products.into_iter().map(CatalogEntry::Product).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_image_and_description_are_optional() {
        let product: Product = serde_json::from_str(r#"{"title":"Pen","price":25}"#).unwrap();
        assert_eq!(product.image, None);
        assert_eq!(product.description, "");
        assert_eq!(product.to_cart_item(), CartItem::new("Pen", 25));
    }

    #[test]
    fn catalog_document_without_items_parses() {
        let doc: CatalogDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.items, None);
    }

    #[test]
    fn whole_prices_parse_from_integer_float_and_text() {
        for raw in ["25", "25.0", "\"25\"", "\" 25 \""] {
            let body = format!(r#"{{"title":"Pen","price":{raw}}}"#);
            let product: Product = serde_json::from_str(&body).unwrap();
            assert_eq!(product.price, 25, "input {raw}");
        }
    }

    #[test]
    fn fractional_or_missing_price_is_rejected() {
        for body in [
            r#"{"title":"Mug","price":99.5}"#,
            r#"{"title":"Mug","price":"cheap"}"#,
            r#"{"title":"Mug"}"#,
        ] {
            assert!(serde_json::from_str::<Product>(body).is_err(), "input {body}");
        }
    }

    #[test]
    fn bad_entries_do_not_break_the_document() {
        let body = r#"{"items":[
            {"title":"Pen","price":25},
            {"title":"Mug","price":99.5},
            {"title":"Cap"},
            "not a product",
            {"title":"Notebook","price":"80","image":"nb.png"}
        ]}"#;
        let doc: CatalogDocument = serde_json::from_str(body).unwrap();
        let items = doc.items.unwrap();
        assert_eq!(items.len(), 5);
        let titles: Vec<&str> = items
            .iter()
            .filter_map(|entry| match entry {
                CatalogEntry::Product(p) => Some(p.title.as_str()),
                CatalogEntry::Invalid(_) => None,
            })
            .collect();
        assert_eq!(titles, vec!["Pen", "Notebook"]);
    }

    #[test]
    fn price_label_uses_currency_suffix() {
        assert_eq!(price_label(150), "150 grn");
        assert_eq!(price_label(-5), "-5 grn");
    }
}
