pub mod entities;

pub use entities::{ValidationError, ValidationOutcome};
