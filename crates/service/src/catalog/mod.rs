//! Services: the top-level catalog entries.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{SeaOrmServiceRepository, ServiceRepository};
pub use service::CatalogService;
