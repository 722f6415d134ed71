//! Persistence model for the catalog: sea-orm entities for `services` and
//! `service_versions`, field rules, connection helpers and the sample data
//! loaded on a fresh start.

pub mod errors;
pub mod db;
pub mod nullable;
pub mod service;
pub mod service_version;
pub mod seed;

pub use nullable::Nullable;

#[cfg(test)]
mod tests;
