use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MAX_LEN: usize = 64;
pub const DESCRIPTION_MAX_LEN: usize = 255;
/// Stored when a service is created without a description.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: Option<String>,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("Service name is required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!(
            "Name cannot be longer than {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ModelError::Validation(format!(
            "Description cannot be longer than {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Blank descriptions fall back to [`DEFAULT_DESCRIPTION`].
pub fn description_or_default(description: Option<&str>) -> String {
    match description {
        Some(d) if !d.trim().is_empty() => d.to_string(),
        _ => DEFAULT_DESCRIPTION.to_string(),
    }
}
