mod error;
mod types;

#[cfg(test)]
mod tests;

pub use error::*;
pub use types::*;
