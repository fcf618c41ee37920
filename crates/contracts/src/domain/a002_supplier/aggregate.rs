use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    #[serde(skip_serializing)]
    pub id: Option<i64>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            address: s.address.clone(),
        }
    }
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.phone.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
        ]
    }
}
