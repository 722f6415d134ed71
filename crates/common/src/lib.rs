//! Pieces shared by every catalog crate: logging bootstrap and the JSON
//! envelopes the HTTP surface speaks.

pub mod types;

pub mod utils {
    pub mod logging;
}

pub use types::{ErrorBody, Item, Items, TokenBody};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes_serialize_with_expected_keys() {
        let item = serde_json::to_value(Item::new("x")).unwrap();
        assert_eq!(item, serde_json::json!({"item": "x"}));

        let items = serde_json::to_value(Items::new(vec![1, 2])).unwrap();
        assert_eq!(items, serde_json::json!({"items": [1, 2]}));

        let err = serde_json::to_value(ErrorBody::new("Unauthorized")).unwrap();
        assert_eq!(err, serde_json::json!({"error": "Unauthorized"}));
    }

    #[test]
    fn empty_list_is_an_array_not_null() {
        let items = serde_json::to_value(Items::<u8>::new(Vec::new())).unwrap();
        assert_eq!(items["items"], serde_json::json!([]));
    }
}
