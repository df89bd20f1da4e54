//! Side-effecting half of the purchase dispatcher.

use contracts::shared::whatsapp::{purchase_link, PhoneNumber};
use web_sys::window;

use crate::config;

/// Opens a WhatsApp chat about `product_name` in a new tab.
///
/// Navigation is fire-and-forget: whether the tab actually opened is not
/// observed. Only a misconfigured shop number is reported, and then the
/// dispatch is skipped.
pub fn open_purchase_chat(product_name: &str) {
    let phone = match PhoneNumber::parse(config::WHATSAPP_SALES_NUMBER) {
        Ok(phone) => phone,
        Err(err) => {
            log::error!(
                "configured WhatsApp number {:?} rejected: {}",
                config::WHATSAPP_SALES_NUMBER,
                err
            );
            return;
        }
    };

    let url = purchase_link(&phone, product_name);
    log::debug!("purchase intent: {}", url);
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(&url, "_blank");
    }
}
