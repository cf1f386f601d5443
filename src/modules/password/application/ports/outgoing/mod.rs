pub mod base_password_check;

pub use base_password_check::{BaseCheckError, BasePasswordCheck};
