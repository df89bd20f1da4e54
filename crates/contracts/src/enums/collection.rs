use serde::{Deserialize, Serialize};

/// The two fixed collections of the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Mens,
    Womens,
}

impl Collection {
    /// Stable code, used in composite render keys
    pub fn code(&self) -> &'static str {
        match self {
            Collection::Mens => "mens",
            Collection::Womens => "womens",
        }
    }

    /// Section title shown on the page
    pub fn display_name(&self) -> &'static str {
        match self {
            Collection::Mens => "Men's Collection",
            Collection::Womens => "Women's Collection",
        }
    }

    /// All collections, in catalog order (men's before women's)
    pub fn all() -> [Collection; 2] {
        [Collection::Mens, Collection::Womens]
    }
}
