pub mod components;
pub mod icons;
pub mod listener;
pub mod purchase;
pub mod viewport;
