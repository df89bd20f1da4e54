//! Fixed product catalog.
//!
//! Both collections are defined once at initialization and never change at
//! runtime. There is no add/edit/remove surface; every view over the data
//! is a borrowed projection.

use once_cell::sync::Lazy;

use super::product::Product;
use crate::enums::collection::Collection;

pub static MENS_PERFUMES: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            Collection::Mens,
            1,
            "Ocean Breeze",
            "/pictures/mens1.png",
            2000,
            1500,
        )
        .with_description("Fresh aquatic notes over a hint of citrus"),
        Product::new(
            Collection::Mens,
            2,
            "Mountain Mist",
            "/pictures/mens2.png",
            1800,
            1400,
        )
        .with_description("Crisp alpine air, cedar and moss"),
    ]
});

pub static WOMENS_PERFUMES: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            Collection::Womens,
            1,
            "Rose Blossom",
            "/pictures/womens1.png",
            2200,
            1700,
        )
        .with_description("Velvety rose petals wrapped in warm amber"),
        Product::new(
            Collection::Womens,
            2,
            "Lavender Dream",
            "/pictures/womens2.png",
            2100,
            1600,
        ),
    ]
});

/// The fixed sequence backing one collection.
pub fn collection(collection: Collection) -> &'static [Product] {
    match collection {
        Collection::Mens => &MENS_PERFUMES,
        Collection::Womens => &WOMENS_PERFUMES,
    }
}

/// Every product in catalog order: men's first, then women's.
pub fn combined() -> impl Iterator<Item = &'static Product> {
    MENS_PERFUMES.iter().chain(WOMENS_PERFUMES.iter())
}
