use crate::domain::a002_supplier::SupplierRef;
use crate::shared::filter::Searchable;
use crate::shared::serde_utils;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock receipt from a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub invoice_number: String,
    #[serde(default)]
    pub supplier: Option<SupplierRef>,
    pub purchase_date: NaiveDate,
    #[serde(default, deserialize_with = "serde_utils::amount")]
    pub total: f64,
    #[serde(default)]
    pub items_count: u32,
}

impl Purchase {
    pub fn supplier_name(&self) -> &str {
        self.supplier.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }
}

impl Searchable for Purchase {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_number.as_str(), self.supplier_name()]
    }
}

/// Answer of `POST /api/purchases/import`. Parsing happens on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseImportResult {
    #[serde(default)]
    pub imported: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl PurchaseImportResult {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.errors.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("{} baris berhasil diimpor", self.imported)
        } else {
            format!(
                "{} baris diimpor, {} dilewati",
                self.imported, self.skipped
            )
        }
    }
}

/// Accepted upload extensions for the purchase import.
pub const IMPORT_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

pub fn is_importable_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            IMPORT_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_purchase() {
        let p: Purchase = serde_json::from_value(json!({
            "id": 3,
            "invoice_number": "PB-2024-0003",
            "supplier": { "id": 1, "name": "PT Kimia Farma" },
            "purchase_date": "2024-03-15",
            "total": "1250000.00",
            "items_count": 12
        }))
        .unwrap();
        assert_eq!(p.purchase_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(p.total, 1_250_000.0);
        assert!(p.matches_filter("kimia"));
    }

    #[test]
    fn test_import_summary() {
        let clean = PurchaseImportResult {
            imported: 10,
            ..Default::default()
        };
        assert_eq!(clean.summary(), "10 baris berhasil diimpor");

        let partial = PurchaseImportResult {
            imported: 8,
            skipped: 2,
            errors: vec!["Baris 4: produk tidak ditemukan".into()],
        };
        assert!(!partial.is_clean());
        assert_eq!(partial.summary(), "8 baris diimpor, 2 dilewati");
    }

    #[test]
    fn test_importable_extensions() {
        assert!(is_importable_file("faktur.XLSX"));
        assert!(is_importable_file("stok.csv"));
        assert!(!is_importable_file("faktur.pdf"));
        assert!(!is_importable_file("noext"));
    }
}
