use serde::{Deserialize, Serialize};

/// Single-resource envelope: `{"item": ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item<T> {
    pub item: T,
}

impl<T> Item<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }
}

/// Collection envelope: `{"items": [...]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenBody {
    pub token: String,
}
