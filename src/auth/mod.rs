mod claims;
mod error;
pub mod guard;
pub mod jwks;
pub mod jwt;
#[cfg(test)]
pub(crate) mod testing;

pub use claims::{Claims, Permission};
pub use error::AuthError;
