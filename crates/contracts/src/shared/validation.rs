use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation messages from a rejected form submit (HTTP 422).
///
/// Body shape: `{ "message": "...", "errors": { "name": ["..."] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// First message for `field`, shown under the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.first(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Messages for fields the form does not render, so they are not lost.
    pub fn unclaimed<'a>(&'a self, rendered: &[&str]) -> Vec<&'a str> {
        self.errors
            .iter()
            .filter(|(field, _)| !rendered.contains(&field.as_str()))
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .collect()
    }

    /// Banner text for messages no input shows; `None` when every message
    /// has a field of its own.
    pub fn unclaimed_message(&self, rendered: &[&str]) -> Option<String> {
        let rest = self.unclaimed(rendered);
        (!rest.is_empty()).then(|| rest.join(" "))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "message": "The name field is required. (and 1 more error)",
        "errors": {
            "name": ["The name field is required."],
            "harga_beli": ["The harga beli must be at least 0.", "second"],
            "token": ["Expired."]
        }
    }"#;

    #[test]
    fn test_parse_laravel_body() {
        let errors = ValidationErrors::from_body(BODY).unwrap();
        assert_eq!(errors.first("name"), Some("The name field is required."));
        assert_eq!(errors.first("harga_beli"), Some("The harga beli must be at least 0."));
        assert!(errors.has("name"));
        assert!(!errors.has("margin"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_unclaimed_messages() {
        let errors = ValidationErrors::from_body(BODY).unwrap();
        assert_eq!(errors.unclaimed(&["name", "harga_beli"]), vec!["Expired."]);
        assert_eq!(errors.unclaimed_message(&["name", "harga_beli"]), Some("Expired.".to_string()));
        assert_eq!(errors.unclaimed_message(&["name", "harga_beli", "token"]), None);
    }

    #[test]
    fn test_not_json() {
        assert!(ValidationErrors::from_body("<html>").is_none());
    }
}
