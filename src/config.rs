use {
    crate::domain::{error::ConfigError, id::MerchantKey},
    std::env,
};

pub const DEFAULT_SDK_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

/// Everything the storefront needs to know about the product and the backend.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the merchant backend; `/create_order` and `/verify_payment` hang off it.
    pub api_base: String,
    pub sdk_url: String,
    /// Used when the order response carries no `key`.
    pub fallback_key: MerchantKey,
    pub confirmation_path: String,
    pub receipt_tag: &'static str,
    pub product_label: String,
    pub display_name: String,
    pub description: String,
    pub theme_color: String,
}

impl StorefrontConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            sdk_url: DEFAULT_SDK_URL.to_string(),
            fallback_key: MerchantKey::default(),
            confirmation_path: "/thankyou".to_string(),
            receipt_tag: "AIWB",
            product_label: "AI Wealth Blueprint (eBook)".to_string(),
            display_name: "AI Wealth Blueprint".to_string(),
            description: "365-day eBook + Templates".to_string(),
            theme_color: "#211C84".to_string(),
        }
    }

    /// Reads `STOREFRONT_*` variables. Only the backend base URL is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base = env::var("STOREFRONT_API_BASE")
            .map_err(|_| ConfigError::Missing("STOREFRONT_API_BASE"))?;
        let mut config = Self::new(api_base);

        if let Ok(url) = env::var("STOREFRONT_SDK_URL") {
            config.sdk_url = url;
        }
        if let Ok(key) = env::var("STOREFRONT_FALLBACK_KEY") {
            config.fallback_key = MerchantKey::parse(key)
                .ok_or(ConfigError::Empty("STOREFRONT_FALLBACK_KEY"))?;
        }
        if let Ok(path) = env::var("STOREFRONT_CONFIRMATION_PATH") {
            config.confirmation_path = path;
        }
        Ok(config)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
