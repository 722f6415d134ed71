use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const VERSION_MAX_LEN: usize = 16;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_versions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub service_id: String,
    pub version: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

// `service_id` is not a foreign key; versions may name unknown services.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_version(version: &str) -> Result<(), ModelError> {
    if version.chars().count() > VERSION_MAX_LEN {
        return Err(ModelError::Validation(format!(
            "Version cannot be longer than {VERSION_MAX_LEN} characters"
        )));
    }
    Ok(())
}
