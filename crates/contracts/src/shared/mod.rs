pub mod whatsapp;

pub use whatsapp::{PhoneNumber, PhoneNumberError};
