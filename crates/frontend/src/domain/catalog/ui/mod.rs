pub mod product_card;
pub mod section;

pub use product_card::ProductCard;
pub use section::CollectionSection;
