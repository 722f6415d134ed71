//! Tri-state optional value for JSON payloads.
//!
//! A JSON field can be missing, explicitly `null`, or carry a value; plain
//! `Option<T>` folds the first two together. Fields of this type must be
//! declared with `#[serde(default)]` so a missing key becomes [`Nullable::Absent`].
//!
//! ```
//! use models::Nullable;
//!
//! #[derive(serde::Deserialize)]
//! struct Patch {
//!     #[serde(default)]
//!     name: Nullable<String>,
//! }
//!
//! let absent: Patch = serde_json::from_str("{}").unwrap();
//! let null: Patch = serde_json::from_str(r#"{"name": null}"#).unwrap();
//! let set: Patch = serde_json::from_str(r#"{"name": "Billing"}"#).unwrap();
//! assert_eq!(absent.name, Nullable::Absent);
//! assert_eq!(null.name, Nullable::Null);
//! assert_eq!(set.name, Nullable::Value("Billing".to_string()));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    /// Absent and null both read as `None`.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Nullable::Null, Nullable::Value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_serialize_as_json_null() {
        assert_eq!(serde_json::to_string(&Nullable::<String>::Absent).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Nullable::<String>::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Nullable::Value("a")).unwrap(), "\"a\"");
    }

    #[test]
    fn empty_string_is_a_value_not_null() {
        let v: Nullable<String> = serde_json::from_str("\"\"").unwrap();
        assert_eq!(v, Nullable::Value(String::new()));
        assert_eq!(v.as_value().map(String::as_str), Some(""));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<Nullable<String>>("42").is_err());
    }
}
