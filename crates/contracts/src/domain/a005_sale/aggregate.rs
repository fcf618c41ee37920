use crate::shared::filter::Searchable;
use crate::shared::serde_utils;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cashier {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_name: String,
    pub quantity: u32,
    #[serde(default, deserialize_with = "serde_utils::amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "serde_utils::amount")]
    pub subtotal: f64,
}

/// Completed sale; read-only history on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub invoice_number: String,
    #[serde(default)]
    pub cashier: Option<Cashier>,
    #[serde(default, deserialize_with = "serde_utils::amount")]
    pub total: f64,
    #[serde(default, deserialize_with = "serde_utils::amount")]
    pub paid: f64,
    #[serde(default, deserialize_with = "serde_utils::amount")]
    pub change: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_utils::lenient_vec")]
    pub items: Vec<SaleItem>,
}

impl Sale {
    pub fn cashier_name(&self) -> &str {
        self.cashier.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }

    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|i| i.subtotal).sum()
    }
}

impl Searchable for Sale {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_number.as_str(), self.cashier_name()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_sale_with_items() {
        let sale: Sale = serde_json::from_value(json!({
            "id": 11,
            "invoice_number": "INV-20240315-011",
            "cashier": { "id": 2, "name": "Rina" },
            "total": 23000,
            "paid": "50000",
            "change": 27000,
            "created_at": "2024-03-15T14:02:26.000000Z",
            "items": [
                { "product_name": "Paracetamol 500mg", "quantity": 2, "price": 11500, "subtotal": 23000 }
            ]
        }))
        .unwrap();
        assert_eq!(sale.paid, 50000.0);
        assert_eq!(sale.items_total(), 23000.0);
        assert_eq!(sale.cashier_name(), "Rina");
        assert!(sale.matches_filter("0315"));
    }

    #[test]
    fn test_items_missing_from_list_payload() {
        let sale: Sale = serde_json::from_value(json!({
            "id": 12,
            "invoice_number": "INV-20240315-012",
            "total": 5000,
            "created_at": "2024-03-15T15:00:00Z"
        }))
        .unwrap();
        assert!(sale.items.is_empty());
        assert_eq!(sale.cashier_name(), "-");
    }
}
