use models::Nullable;
use serde::Deserialize;

/// Body of `POST /v1/services`. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateServiceInput {
    #[serde(default)]
    pub name: Nullable<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PATCH /v1/services/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceInput {
    #[serde(default)]
    pub name: Nullable<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One column assignment of a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceChange {
    Name(String),
    Description(String),
}

impl UpdateServiceInput {
    /// Assignments for the fields that are present and not blank.
    pub fn changes(&self) -> Vec<ServiceChange> {
        let mut changes = Vec::new();
        if let Some(name) = self.name.as_value().filter(|n| !n.trim().is_empty()) {
            changes.push(ServiceChange::Name(name.clone()));
        }
        if let Some(d) = self.description.as_ref().filter(|d| !d.trim().is_empty()) {
            changes.push(ServiceChange::Description(d.clone()));
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_fields_are_skipped() {
        let input: UpdateServiceInput =
            serde_json::from_str(r#"{"name": "  ", "description": null}"#).unwrap();
        assert!(input.changes().is_empty());

        let input: UpdateServiceInput = serde_json::from_str(r#"{"description": "new"}"#).unwrap();
        assert_eq!(input.changes(), vec![ServiceChange::Description("new".into())]);
    }

    #[test]
    fn payload_id_is_ignored() {
        let input: CreateServiceInput =
            serde_json::from_str(r#"{"id": "mine", "name": "Billing"}"#).unwrap();
        assert_eq!(input.name, Nullable::Value("Billing".into()));
    }
}
