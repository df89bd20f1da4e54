use crate::enums::collection::Collection;
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Identifiers are small integers unique only within their collection (both
/// collections count from 1). [`Product::key`] combines the collection tag
/// with the identifier for views that mix collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub collection: Collection,
    pub id: u32,
    pub name: String,

    /// Asset path, resolved by the hosting pipeline; opaque to this crate.
    pub image: String,

    /// List price in whole rupees.
    pub price: u32,

    /// Promotional price in whole rupees; by convention not above `price`.
    #[serde(rename = "discountPrice")]
    pub discount_price: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        collection: Collection,
        id: u32,
        name: &str,
        image: &str,
        price: u32,
        discount_price: u32,
    ) -> Self {
        Self {
            collection,
            id,
            name: name.to_string(),
            image: image.to_string(),
            price,
            discount_price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Render key unique across the whole catalog: collection code plus
    /// per-collection id, e.g. `"mens-1"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.collection.code(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_namespaces_by_collection() {
        let mens = Product::new(Collection::Mens, 1, "Ocean Breeze", "/pictures/mens1.png", 2000, 1500);
        let womens = Product::new(Collection::Womens, 1, "Rose Blossom", "/pictures/womens1.png", 2200, 1700);

        assert_eq!(mens.key(), "mens-1");
        assert_eq!(womens.key(), "womens-1");
        assert_ne!(mens.key(), womens.key());
    }

    #[test]
    fn test_wire_shape_uses_camel_case_discount_price() {
        let product = Product::new(Collection::Mens, 1, "Ocean Breeze", "/pictures/mens1.png", 2000, 1500);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["discountPrice"], 1500);
        assert_eq!(json["image"], "/pictures/mens1.png");
        // Absent description is omitted, not serialized as null
        assert!(json.get("description").is_none());
    }
}
