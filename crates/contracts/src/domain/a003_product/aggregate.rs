use crate::domain::a001_category::CategoryRef;
use super::pricing;
use crate::shared::filter::Searchable;
use crate::shared::serde_utils;
use serde::{Deserialize, Serialize};

/// Product as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(rename = "harga_beli", default, deserialize_with = "serde_utils::amount")]
    pub purchase_price: f64,
    #[serde(rename = "margin", default, deserialize_with = "serde_utils::amount")]
    pub margin_percent: f64,
    #[serde(rename = "harga", default, deserialize_with = "serde_utils::amount")]
    pub sale_price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub expired_at: Option<String>,
}

impl Product {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category_name()]
    }
}

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub category_id: Option<i64>,
    pub harga_beli: f64,
    pub margin: f64,
    pub harga: i64,
    pub description: Option<String>,
}

/// Draft of the product form.
///
/// Purchase price and margin are kept as typed; the sale price is recomputed
/// on every change of either and has no setter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<i64>,
    pub name: String,
    pub category_id: Option<i64>,
    pub description: String,
    purchase_price: String,
    margin: String,
    sale_price: i64,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_product(p: &Product) -> Self {
        let mut form = Self {
            id: Some(p.id),
            name: p.name.clone(),
            category_id: p.category_id.or(p.category.as_ref().map(|c| c.id)),
            description: p.description.clone().unwrap_or_default(),
            purchase_price: format_input(p.purchase_price),
            margin: format_input(p.margin_percent),
            sale_price: 0,
        };
        form.recompute();
        form
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn purchase_price(&self) -> &str {
        &self.purchase_price
    }

    pub fn margin(&self) -> &str {
        &self.margin
    }

    pub fn sale_price(&self) -> i64 {
        self.sale_price
    }

    pub fn set_purchase_price(&mut self, value: impl Into<String>) {
        self.purchase_price = value.into();
        self.recompute();
    }

    pub fn set_margin(&mut self, value: impl Into<String>) {
        self.margin = value.into();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.sale_price = pricing::sale_price_from_input(&self.purchase_price, &self.margin);
    }

    /// Client-side required-field check; the server validates the rest.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.category_id.is_some()
    }

    pub fn to_payload(&self) -> ProductPayload {
        let description = self.description.trim();
        ProductPayload {
            name: self.name.trim().to_string(),
            category_id: self.category_id,
            harga_beli: pricing::parse_amount(&self.purchase_price),
            margin: pricing::parse_amount(&self.margin),
            harga: self.sale_price,
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}

/// Whole numbers are shown without a trailing ".0".
fn format_input(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        serde_json::from_value(json!({
            "id": 7,
            "name": "Paracetamol 500mg",
            "category_id": 2,
            "category": { "id": 2, "name": "Obat Bebas" },
            "harga_beli": "10000.00",
            "margin": 15,
            "harga": 11500,
            "description": null,
            "stock": 40
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_product_payload() {
        let p = sample();
        assert_eq!(p.purchase_price, 10000.0);
        assert_eq!(p.margin_percent, 15.0);
        assert_eq!(p.sale_price, 11500.0);
        assert_eq!(p.category_name(), "Obat Bebas");
        assert!(p.matches_filter("bebas"));
    }

    #[test]
    fn test_form_recomputes_on_every_change() {
        let mut form = ProductForm::new();
        assert_eq!(form.sale_price(), 0);

        form.set_purchase_price("10000");
        assert_eq!(form.sale_price(), 10000);

        form.set_margin("15");
        assert_eq!(form.sale_price(), 11500);

        form.set_purchase_price("");
        assert_eq!(form.sale_price(), 0);

        form.set_purchase_price("9999");
        form.set_margin("0");
        assert_eq!(form.sale_price(), 9999);
    }

    #[test]
    fn test_form_from_product_and_payload() {
        let form = ProductForm::from_product(&sample());
        assert!(form.is_edit_mode());
        assert_eq!(form.purchase_price(), "10000");
        assert_eq!(form.margin(), "15");
        assert_eq!(form.sale_price(), 11500);

        let payload = form.to_payload();
        assert_eq!(payload.harga, 11500);
        assert_eq!(payload.harga_beli, 10000.0);
        assert_eq!(payload.description, None);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["harga"], json!(11500));
        assert_eq!(body["category_id"], json!(2));
    }

    #[test]
    fn test_payload_price_ignores_stale_server_price() {
        let mut product = sample();
        product.sale_price = 99999.0;
        let form = ProductForm::from_product(&product);
        assert_eq!(form.to_payload().harga, 11500);
    }

    #[test]
    fn test_required_fields() {
        let mut form = ProductForm::new();
        assert!(!form.is_valid());
        form.name = "Vitamin C".into();
        assert!(!form.is_valid());
        form.category_id = Some(1);
        assert!(form.is_valid());
    }
}
