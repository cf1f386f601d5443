pub mod modules;
pub use modules::password;
pub mod shared;

#[cfg(test)]
mod tests;
