pub mod product;
pub mod search;
pub mod store;

pub use product::Product;
pub use search::{filter, suggestions, SUGGESTION_LIMIT};
