//! Service layer for the catalog.
//! - Token issuing and bearer authentication (`auth`).
//! - Service and version business rules behind repository traits (`catalog`, `versions`).
//! - The synthetic stall used on version delete (`stall`).

pub mod errors;
pub mod auth;
pub mod catalog;
pub mod versions;
pub mod stall;
#[cfg(test)]
pub mod test_support;
