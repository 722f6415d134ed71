//! Auth module: credential exchange for a signed token, and bearer token checks.

pub mod domain;
pub mod errors;
pub mod service;
pub mod authenticator;

pub use authenticator::TokenAuthenticator;
pub use service::{AuthConfig, TokenIssuer};
