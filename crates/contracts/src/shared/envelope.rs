use serde::{Deserialize, Serialize};

/// Single-record answer. Some endpoints wrap the record in `{ "data": ... }`,
/// others return it bare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_wrapped_and_bare() {
        let wrapped: Envelope<Item> = serde_json::from_value(json!({ "data": { "id": 3 } })).unwrap();
        assert_eq!(wrapped.into_inner(), Item { id: 3 });
        let bare: Envelope<Item> = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(bare.into_inner(), Item { id: 4 });
    }
}
