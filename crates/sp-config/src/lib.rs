use sp_api_types::DEFAULT_PLACEHOLDER_IMAGE;

/// Elements that fade in the first time they scroll into view.
pub const DEFAULT_REVEAL_SELECTOR: &str = ".card, .product-item, h1, h2, p, .contact-wrapper";

/// Storefront tunables. Built from `Default`, then adjusted by the page.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub catalog_url: String,
    pub scroll_top_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_selector: String,
    pub toast_display_ms: u32,
    pub toast_exit_ms: u32,
    pub card_reveal_delay_ms: u32,
    pub placeholder_image: String,
    pub log_level: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: "content/products.json".to_owned(),
            scroll_top_threshold_px: 300.0,
            reveal_threshold: 0.1,
            reveal_selector: DEFAULT_REVEAL_SELECTOR.to_owned(),
            toast_display_ms: 3000,
            toast_exit_ms: 300,
            card_reveal_delay_ms: 100,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

/// Page-supplied values that take priority over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOverrides {
    pub catalog_url: Option<String>,
    pub log_level: Option<String>,
}

impl StorefrontConfig {
    pub fn with_overrides(mut self, overrides: PageOverrides) -> Self {
        if let Some(url) = non_blank(overrides.catalog_url) {
            self.catalog_url = url;
        }
        if let Some(level) = non_blank(overrides.log_level) {
            self.log_level = level;
        }
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
