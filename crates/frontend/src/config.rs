//! Build-time shop configuration.

/// WhatsApp number the purchase chats go to. International format: country
/// code first, digits only, no `+`, no trunk zero. The dispatcher validates
/// it with [`contracts::shared::whatsapp::PhoneNumber::parse`] before use.
pub const WHATSAPP_SALES_NUMBER: &str = "923402558440";

/// Storefront name shown in the header.
pub const SHOP_NAME: &str = "SK Fragnance";

/// House brand used in the about section and the footer copyright.
pub const BRAND_NAME: &str = "Luxe Perfumes";

pub const INSTAGRAM_URL: &str = "https://instagram.com/luxeperfumes";

/// Viewport width (CSS px) at or below which the header collapses the
/// search box behind an icon.
pub const NARROW_VIEWPORT_MAX_PX: f64 = 640.0;

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::whatsapp::PhoneNumber;

    #[test]
    fn test_sales_number_is_dispatchable() {
        assert!(PhoneNumber::parse(WHATSAPP_SALES_NUMBER).is_ok());
    }
}
