pub mod password_policy;

pub use password_policy::{InvalidArgument, PasswordPolicy, PasswordValidationError};
