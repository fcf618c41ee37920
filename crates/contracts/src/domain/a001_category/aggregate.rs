use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub products_count: Option<u64>,
}

/// Category embedded in other payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(skip_serializing)]
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            description: c.description.clone(),
        }
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_deref().unwrap_or_default(),
        ]
    }
}
