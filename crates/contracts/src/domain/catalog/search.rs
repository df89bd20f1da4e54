//! Pure query engine over the catalog.
//!
//! Both operations are synchronous, deterministic projections: they borrow
//! from the input sequence, preserve its order, and copy no product data.
//! Blank means empty or whitespace-only; inside a non-blank query,
//! whitespace is significant and matches literally.

use super::product::Product;

/// Maximum number of entries the autocomplete dropdown shows.
pub const SUGGESTION_LIMIT: usize = 5;

/// Products whose name contains `query` as a case-insensitive substring,
/// in original order. A blank query selects the whole collection.
pub fn filter<'a>(query: &str, products: &'a [Product]) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return products.iter().collect();
    }

    let query = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&query))
        .collect()
}

/// Autocomplete candidates: products whose name starts with `query`,
/// case-insensitively, in original order, capped at [`SUGGESTION_LIMIT`].
/// A blank query yields no suggestions.
pub fn suggestions<'a>(
    query: &str,
    products: impl IntoIterator<Item = &'a Product>,
) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    products
        .into_iter()
        .filter(|product| product.name.to_lowercase().starts_with(&query))
        .take(SUGGESTION_LIMIT)
        .collect()
}
