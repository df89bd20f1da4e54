pub mod header;
pub mod search_box;
pub mod search_state;

pub use header::Header;
pub use search_box::SearchBox;
