//! Lenient deserializers for backend payloads.
//!
//! The backend is not strict about shapes: decimals arrive as strings
//! ("10000.00"), nested collections are sometimes absent or `null`.
//! These helpers turn those cases into plain defaults instead of errors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number or numeric string. Anything else (null, "", "abc") becomes 0.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(amount_from_value).unwrap_or(0.0))
}

pub fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Array of `T`. A non-array value yields an empty vec; elements that do not
/// deserialize as `T` are skipped.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Like [`lenient_vec`] but keeps the difference between "absent / not an
/// array" (`None`) and "present" (`Some`, possibly empty).
pub fn lenient_opt_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "amount")]
        price: f64,
        #[serde(default, deserialize_with = "lenient_vec")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "lenient_opt_vec")]
        names: Option<Vec<String>>,
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let p: Probe = serde_json::from_value(json!({ "price": "10000.50" })).unwrap();
        assert_eq!(p.price, 10000.5);
        let p: Probe = serde_json::from_value(json!({ "price": 12 })).unwrap();
        assert_eq!(p.price, 12.0);
        let p: Probe = serde_json::from_value(json!({ "price": null })).unwrap();
        assert_eq!(p.price, 0.0);
        let p: Probe = serde_json::from_value(json!({ "price": "abc" })).unwrap();
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn test_lenient_vec_skips_garbage() {
        let p: Probe = serde_json::from_value(json!({ "tags": ["a", 1, "b"] })).unwrap();
        assert_eq!(p.tags, vec!["a", "b"]);
        let p: Probe = serde_json::from_value(json!({ "tags": "oops" })).unwrap();
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_lenient_opt_vec_distinguishes_absent() {
        let p: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.names, None);
        let p: Probe = serde_json::from_value(json!({ "names": {} })).unwrap();
        assert_eq!(p.names, None);
        let p: Probe = serde_json::from_value(json!({ "names": [] })).unwrap();
        assert_eq!(p.names, Some(vec![]));
    }
}
