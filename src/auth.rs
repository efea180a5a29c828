//! Consumer credentials and OAuth 1.0a token pairs.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::*;
