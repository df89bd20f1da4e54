//! Purchase-intent hand-off to WhatsApp.
//!
//! The shop has no checkout; "Buy Now" composes a prefilled chat link
//! (`https://wa.me/<number>?text=<message>`) that the UI opens in a new
//! tab. Everything here is pure string work so it stays testable off the
//! browser.

use thiserror::Error;

/// Opening line of the prefilled chat message, ahead of the product name.
pub const MESSAGE_PREFIX: &str = "Hello, I am interested in buying the perfume: ";

const WA_BASE_URL: &str = "https://wa.me";

/// E.164 bounds on the national significant number.
const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("phone number is empty")]
    Empty,

    #[error("phone number contains a non-digit character: {0:?}")]
    NonDigit(char),

    #[error("phone number must start with a country code, not a trunk zero")]
    LeadingZero,

    #[error("phone number has {0} digits, expected 7 to 15")]
    BadLength(usize),
}

/// A WhatsApp destination in international form: country code followed by
/// the subscriber number, digits only. No `+`, no separators, no trunk
/// prefix, exactly the shape `wa.me` expects in its path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, PhoneNumberError> {
        if raw.is_empty() {
            return Err(PhoneNumberError::Empty);
        }
        if let Some(ch) = raw.chars().find(|ch| !ch.is_ascii_digit()) {
            return Err(PhoneNumberError::NonDigit(ch));
        }
        if raw.starts_with('0') {
            return Err(PhoneNumberError::LeadingZero);
        }
        let len = raw.len();
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&len) {
            return Err(PhoneNumberError::BadLength(len));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }
}

/// Chat text for a given product, exactly as the customer will see it.
pub fn purchase_message(product_name: &str) -> String {
    format!("{}{}", MESSAGE_PREFIX, product_name)
}

/// Deep link that opens a WhatsApp chat with `phone`, prefilled with the
/// purchase message for `product_name`. The message is percent-encoded;
/// the number rides in the path as bare digits.
pub fn purchase_link(phone: &PhoneNumber, product_name: &str) -> String {
    let message = purchase_message(product_name);
    format!(
        "{}/{}?text={}",
        WA_BASE_URL,
        phone.digits(),
        urlencoding::encode(&message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_international_digits() {
        let phone = PhoneNumber::parse("923402558440").unwrap();
        assert_eq!(phone.digits(), "923402558440");
    }

    #[test]
    fn test_parse_rejects_plus_prefix() {
        assert_eq!(
            PhoneNumber::parse("+923402558440"),
            Err(PhoneNumberError::NonDigit('+'))
        );
    }

    #[test]
    fn test_parse_rejects_trunk_zero() {
        // The local spelling of the shop number is not a valid wa.me target.
        assert_eq!(
            PhoneNumber::parse("03402558440"),
            Err(PhoneNumberError::LeadingZero)
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneNumberError::Empty));
    }

    #[test]
    fn test_parse_rejects_separators() {
        assert_eq!(
            PhoneNumber::parse("92 340 2558440"),
            Err(PhoneNumberError::NonDigit(' '))
        );
        assert_eq!(
            PhoneNumber::parse("92-340-2558440"),
            Err(PhoneNumberError::NonDigit('-'))
        );
    }

    #[test]
    fn test_parse_enforces_length_bounds() {
        assert_eq!(
            PhoneNumber::parse("123456"),
            Err(PhoneNumberError::BadLength(6))
        );
        assert_eq!(
            PhoneNumber::parse("1234567890123456"),
            Err(PhoneNumberError::BadLength(16))
        );
        assert!(PhoneNumber::parse("1234567").is_ok());
        assert!(PhoneNumber::parse("123456789012345").is_ok());
    }

    #[test]
    fn test_purchase_message_wording() {
        assert_eq!(
            purchase_message("Ocean Breeze"),
            "Hello, I am interested in buying the perfume: Ocean Breeze"
        );
    }

    #[test]
    fn test_purchase_link_shape() {
        let phone = PhoneNumber::parse("923402558440").unwrap();
        assert_eq!(
            purchase_link(&phone, "Ocean Breeze"),
            "https://wa.me/923402558440?text=Hello%2C%20I%20am%20interested%20in%20buying%20the%20perfume%3A%20Ocean%20Breeze"
        );
    }

    #[test]
    fn test_purchase_link_text_survives_decoding() {
        let phone = PhoneNumber::parse("923402558440").unwrap();
        let link = purchase_link(&phone, "Ocean Breeze");

        let (_, encoded) = link.split_once("?text=").unwrap();
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            purchase_message("Ocean Breeze")
        );
    }
}
