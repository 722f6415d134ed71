use serde::Deserialize;

/// Body of `POST /v1/services/{id}/versions`. The path decides the service;
/// a `service_id` or `id` in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVersionInput {
    #[serde(default)]
    pub version: Option<String>,
}

/// Body of `PATCH /v1/services/{id}/versions/{version_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVersionInput {
    #[serde(default)]
    pub version: Option<String>,
}

impl UpdateVersionInput {
    /// The new label, if present and not blank.
    pub fn version_change(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.trim().is_empty())
    }
}
