//! Product catalog loading.
//!
//! The fallback decision is made in one place, `CatalogOutcome::classify`,
//! so each of its three branches can be exercised without a network.

use async_trait::async_trait;
use sp_api_types::{CartItem, CatalogDocument, CatalogEntry, Price, Product, price_label};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("invalid catalog JSON: {0}")]
    Parse(String),
}

/// Where the catalog document comes from. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch(&self) -> Result<CatalogDocument, FetchError>;
}

/// The three ways a catalog fetch can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    FetchFailed(FetchError),
    Empty,
    Loaded(Vec<Product>),
}

impl CatalogOutcome {
    /// Entries that are not usable products are skipped; the catalog only
    /// counts as empty when none remain.
    pub fn classify(result: Result<CatalogDocument, FetchError>) -> Self {
        match result {
            Err(err) => Self::FetchFailed(err),
            Ok(doc) => {
                let products = usable_products(doc.items.unwrap_or_default());
                if products.is_empty() {
                    Self::Empty
                } else {
                    Self::Loaded(products)
                }
            }
        }
    }

    pub fn into_catalog(self) -> Catalog {
        match self {
            Self::FetchFailed(err) => {
                error!("catalog fetch failed, showing sample catalog: {}", err);
                Catalog {
                    products: sample_catalog(),
                    origin: CatalogOrigin::Fallback(FallbackReason::FetchFailed),
                }
            }
            Self::Empty => {
                warn!("catalog has no items, showing sample catalog");
                Catalog {
                    products: sample_catalog(),
                    origin: CatalogOrigin::Fallback(FallbackReason::Empty),
                }
            }
            Self::Loaded(products) => {
                info!(count = products.len(), "catalog loaded");
                Catalog {
                    products,
                    origin: CatalogOrigin::Remote,
                }
            }
        }
    }
}

fn usable_products(entries: Vec<CatalogEntry>) -> Vec<Product> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            CatalogEntry::Product(product) => Some(product),
            CatalogEntry::Invalid(raw) => {
                warn!(index, "skipping catalog entry that is not a product: {}", raw);
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    FetchFailed,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub origin: CatalogOrigin,
}

impl Catalog {
    pub fn cards(&self, placeholder_image: &str) -> Vec<ProductCard> {
        self.products
            .iter()
            .map(|product| ProductCard::new(product, placeholder_image))
            .collect()
    }
}

/// Fetch the catalog and apply the fallback policy. Never fails.
pub async fn load<C>(source: &C) -> Catalog
where
    C: CatalogSource + ?Sized,
{
    CatalogOutcome::classify(source.fetch().await).into_catalog()
}

/// Demo products shown whenever the real catalog is unavailable.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            title: "Branded cup".to_owned(),
            price: 150,
            image: Some("https://via.placeholder.com/300/2563eb/ffffff?text=Cup".to_owned()),
            description: "Ceramic cup.".to_owned(),
        },
        Product {
            title: "Eco bag".to_owned(),
            price: 200,
            image: Some("https://via.placeholder.com/300/10b981/ffffff?text=Bag".to_owned()),
            description: "Handy tote bag.".to_owned(),
        },
        Product {
            title: "Stickers".to_owned(),
            price: 50,
            image: Some("https://via.placeholder.com/300/f59e0b/ffffff?text=Stickers".to_owned()),
            description: "Sticker pack.".to_owned(),
        },
    ]
}

/// Everything a product card needs, resolved at render time.
///
/// `add_to_cart` is a copy: a card keeps adding the title and price it was
/// rendered with even if the catalog is reloaded later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub image_src: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub add_to_cart: CartItem,
}

impl ProductCard {
    pub fn new(product: &Product, placeholder_image: &str) -> Self {
        let image_src = match product.image.as_deref() {
            Some(src) if !src.is_empty() => src.to_owned(),
            _ => placeholder_image.to_owned(),
        };
        Self {
            image_src,
            title: product.title.clone(),
            description: product.description.clone(),
            price_label: price_label(product.price),
            add_to_cart: product.to_cart_item(),
        }
    }

    pub fn price(&self) -> Price {
        self.add_to_cart.price
    }
}
