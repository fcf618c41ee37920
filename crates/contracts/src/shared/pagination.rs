use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 15;

/// Paging block returned next to every list (`{ data, meta }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

fn first_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: DEFAULT_PER_PAGE,
            total: 0,
            from: None,
            to: None,
        }
    }
}

impl PageMeta {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// "1–15 dari 42" style range label.
    pub fn range_label(&self) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) => format!("{}–{} dari {}", from, to, self.total),
            _ => format!("0 dari {}", self.total),
        }
    }
}

/// One server page of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

/// Query string of list endpoints: `?page=2&per_page=15&search=para`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
        }
    }
}

impl ListQuery {
    /// New search text resets to the first page; blank text clears the search.
    pub fn with_search(&self, search: &str) -> Self {
        let trimmed = search.trim();
        Self {
            page: 1,
            per_page: self.per_page,
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn with_per_page(&self, per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            search: self.search.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page_with_partial_meta() {
        let page: Paginated<String> = serde_json::from_value(json!({
            "data": ["a", "b"],
            "meta": { "current_page": 2, "last_page": 3, "total": 32, "from": 16, "to": 30 }
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.per_page, DEFAULT_PER_PAGE);
        assert!(page.meta.has_prev());
        assert!(page.meta.has_next());
        assert_eq!(page.meta.range_label(), "16–30 dari 32");
    }

    #[test]
    fn test_missing_meta_is_single_page() {
        let page: Paginated<String> = serde_json::from_value(json!({ "data": [] })).unwrap();
        assert!(!page.meta.has_prev());
        assert!(!page.meta.has_next());
        assert_eq!(page.meta.range_label(), "0 dari 0");
    }

    #[test]
    fn test_list_query_transitions() {
        let q = ListQuery::default().with_page(4);
        assert_eq!(q.page, 4);

        let searched = q.with_search("  para ");
        assert_eq!(searched.page, 1);
        assert_eq!(searched.search.as_deref(), Some("para"));

        let cleared = searched.with_search("   ");
        assert_eq!(cleared.search, None);

        let resized = searched.with_page(3).with_per_page(50);
        assert_eq!((resized.page, resized.per_page), (1, 50));
        assert_eq!(resized.search.as_deref(), Some("para"));

        assert_eq!(ListQuery::default().with_page(0).page, 1);
    }
}
