use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Text that may be shown to a client. Store failures have none.
    pub fn public_message(&self) -> Option<&str> {
        use models::errors::ModelError;
        match self {
            ServiceError::Validation(m) | ServiceError::NotFound(m) => Some(m),
            ServiceError::Model(ModelError::Validation(m)) => Some(m),
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => None,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
