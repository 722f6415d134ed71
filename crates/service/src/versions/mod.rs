//! Service versions, addressed by `(service_id, version_id)`.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{SeaOrmVersionRepository, VersionRepository};
pub use service::VersionService;
