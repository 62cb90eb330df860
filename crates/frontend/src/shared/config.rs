//! Build-time configuration of the storefront.
//!
//! The storefront has no runtime config file; the API base can be overridden
//! when building with `STOREFRONT_API_BASE=https://host/api trunk build`.

/// Remote food-delivery API
const DEFAULT_API_BASE: &str = "https://food-delivery.int.kreosoft.space/api";

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Delay before the cart is re-fetched after a quantity change
pub const CART_REFRESH_DEBOUNCE_MS: u32 = 210;

pub const NOTIFICATION_DEFAULT_MS: u32 = 1500;
pub const NOTIFICATION_ERROR_MS: u32 = 2000;
pub const NOTIFICATION_VALIDATION_MS: u32 = 3000;

pub fn api_base() -> &'static str {
    option_env!("STOREFRONT_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_base().starts_with("http"));
    }
}
